use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::{DISABLED_STYLE, FOOTER_STYLE, SELECTED_STYLE};

pub enum Field {
    Text {
        label: &'static str,
        value: String,
        placeholder: &'static str,
    },
    Choice {
        label: &'static str,
        options: Vec<&'static str>,
        selected: Option<usize>,
        placeholder: &'static str,
    },
}

impl Field {
    pub fn text(label: &'static str, placeholder: &'static str, value: &str) -> Self {
        Field::Text {
            label,
            value: value.to_string(),
            placeholder,
        }
    }

    pub fn choice(label: &'static str, placeholder: &'static str, options: Vec<&'static str>) -> Self {
        Field::Choice {
            label,
            options,
            selected: None,
            placeholder,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Field::Text { label, .. } | Field::Choice { label, .. } => *label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Ignored,
    Moved,
    Edited,
    Pressed(usize),
    Cancel,
}

/// A column of input fields followed by a row of buttons. Focus runs over
/// fields first, then buttons.
pub struct Form {
    pub fields: Vec<Field>,
    pub buttons: Vec<&'static str>,
    disabled: Vec<bool>,
    focus: usize,
}

impl Form {
    pub fn new(fields: Vec<Field>, buttons: Vec<&'static str>) -> Self {
        let disabled = vec![false; buttons.len()];
        Self {
            fields,
            buttons,
            disabled,
            focus: 0,
        }
    }

    fn slots(&self) -> usize {
        self.fields.len() + self.buttons.len()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn set_disabled(&mut self, button: usize, disabled: bool) {
        if let Some(d) = self.disabled.get_mut(button) {
            *d = disabled;
        }
    }

    pub fn text(&self, idx: usize) -> &str {
        match self.fields.get(idx) {
            Some(Field::Text { value, .. }) => value,
            _ => "",
        }
    }

    pub fn choice(&self, idx: usize) -> Option<usize> {
        match self.fields.get(idx) {
            Some(Field::Choice { selected, .. }) => *selected,
            _ => None,
        }
    }

    fn focused_button(&self) -> Option<usize> {
        self.focus.checked_sub(self.fields.len())
    }

    pub fn handle_key(&mut self, code: KeyCode) -> FormEvent {
        let slots = self.slots();
        if slots == 0 {
            return FormEvent::Ignored;
        }
        match code {
            KeyCode::Esc => FormEvent::Cancel,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % slots;
                FormEvent::Moved
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + slots - 1) % slots;
                FormEvent::Moved
            }
            KeyCode::Enter => match self.focused_button() {
                Some(b) if self.disabled[b] => FormEvent::Ignored,
                Some(b) => FormEvent::Pressed(b),
                None => {
                    self.focus = (self.focus + 1) % slots;
                    FormEvent::Moved
                }
            },
            KeyCode::Left | KeyCode::Right => {
                let forward = code == KeyCode::Right;
                if self.focused_button().is_some() {
                    let first = self.fields.len();
                    let last = slots - 1;
                    self.focus = if forward {
                        (self.focus + 1).min(last)
                    } else {
                        self.focus.saturating_sub(1).max(first)
                    };
                    return FormEvent::Moved;
                }
                match self.fields.get_mut(self.focus) {
                    Some(Field::Choice { options, selected, .. }) if !options.is_empty() => {
                        let n = options.len();
                        *selected = Some(match (*selected, forward) {
                            (None, true) => 0,
                            (None, false) => n - 1,
                            (Some(i), true) => (i + 1) % n,
                            (Some(i), false) => (i + n - 1) % n,
                        });
                        FormEvent::Edited
                    }
                    _ => FormEvent::Ignored,
                }
            }
            KeyCode::Char(c) => match self.fields.get_mut(self.focus) {
                Some(Field::Text { value, .. }) => {
                    value.push(c);
                    FormEvent::Edited
                }
                _ => FormEvent::Ignored,
            },
            KeyCode::Backspace => match self.fields.get_mut(self.focus) {
                Some(Field::Text { value, .. }) => {
                    value.pop();
                    FormEvent::Edited
                }
                _ => FormEvent::Ignored,
            },
            _ => FormEvent::Ignored,
        }
    }

    /// Lines needed to draw the form: one per field, a gap, the button row.
    pub fn height(&self) -> u16 {
        self.fields.len() as u16 + 2
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let label_width = self.fields.iter().map(|f| f.label().len()).max().unwrap_or(0);
        let mut lines: Vec<Line> = Vec::new();

        for (i, field) in self.fields.iter().enumerate() {
            let focused = i == self.focus;
            let marker = if focused { ">" } else { " " };
            let label = format!(" {marker} {:<width$}  ", field.label(), width = label_width);
            let value = match field {
                Field::Text { value, placeholder, .. } => {
                    if value.is_empty() && !focused {
                        Span::styled(placeholder.to_string(), FOOTER_STYLE)
                    } else if focused {
                        Span::raw(format!("{value}\u{2588}"))
                    } else {
                        Span::raw(value.clone())
                    }
                }
                Field::Choice { options, selected, placeholder, .. } => match selected.and_then(|i| options.get(i)) {
                    Some(opt) => Span::raw(format!("\u{25c2} {opt} \u{25b8}")),
                    None => Span::styled(format!("\u{25c2} {placeholder} \u{25b8}"), FOOTER_STYLE),
                },
            };
            let label_style = if focused {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![Span::styled(label, label_style), value]));
        }

        lines.push(Line::from(""));

        let mut buttons = vec![Span::raw("   ")];
        for (b, text) in self.buttons.iter().enumerate() {
            let style = if self.disabled[b] {
                DISABLED_STYLE
            } else if self.focused_button() == Some(b) {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            buttons.push(Span::styled(format!("[ {text} ]"), style));
            buttons.push(Span::raw("  "));
        }
        lines.push(Line::from(buttons));

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> Form {
        Form::new(
            vec![
                Field::text("Name", "Name", ""),
                Field::choice("Type", "Type", vec!["A", "B", "C"]),
            ],
            vec!["Add", "Cancel"],
        )
    }

    #[test]
    fn test_typing_edits_focused_text_field() {
        let mut f = form();
        assert_eq!(f.handle_key(KeyCode::Char('h')), FormEvent::Edited);
        f.handle_key(KeyCode::Char('i'));
        f.handle_key(KeyCode::Char('!'));
        f.handle_key(KeyCode::Backspace);
        assert_eq!(f.text(0), "hi");
    }

    #[test]
    fn test_enter_advances_then_presses() {
        let mut f = form();
        assert_eq!(f.handle_key(KeyCode::Enter), FormEvent::Moved);
        assert_eq!(f.handle_key(KeyCode::Enter), FormEvent::Moved);
        assert_eq!(f.focus(), 2);
        assert_eq!(f.handle_key(KeyCode::Enter), FormEvent::Pressed(0));
        f.handle_key(KeyCode::Right);
        assert_eq!(f.handle_key(KeyCode::Enter), FormEvent::Pressed(1));
    }

    #[test]
    fn test_choice_cycles() {
        let mut f = form();
        f.handle_key(KeyCode::Tab);
        assert_eq!(f.choice(1), None);
        f.handle_key(KeyCode::Right);
        assert_eq!(f.choice(1), Some(0));
        f.handle_key(KeyCode::Left);
        assert_eq!(f.choice(1), Some(2));
        // Typing into a choice does nothing.
        assert_eq!(f.handle_key(KeyCode::Char('x')), FormEvent::Ignored);
    }

    #[test]
    fn test_disabled_button_ignores_enter() {
        let mut f = form();
        f.set_disabled(0, true);
        f.handle_key(KeyCode::Up);
        f.handle_key(KeyCode::Up);
        assert_eq!(f.focus(), 2);
        assert_eq!(f.handle_key(KeyCode::Enter), FormEvent::Ignored);
    }

    #[test]
    fn test_focus_wraps_and_esc_cancels() {
        let mut f = form();
        f.handle_key(KeyCode::Up);
        assert_eq!(f.focus(), 3);
        f.handle_key(KeyCode::Down);
        assert_eq!(f.focus(), 0);
        assert_eq!(f.handle_key(KeyCode::Esc), FormEvent::Cancel);
    }
}
