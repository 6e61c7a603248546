use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::form::{Field, Form, FormEvent};
use crate::models::{parse_amount, Category, NewTransaction};
use crate::tui::{centered, FOOTER_STYLE, HEADER_STYLE, SELECTED_STYLE};

/// Informational message with a single dismiss button.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: &'static str,
    pub header: &'static str,
    pub body: &'static str,
}

impl Alert {
    pub fn up_to_date(title: &'static str) -> Self {
        Self {
            title,
            header: "Success",
            body: "Up to date.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteAllData,
    ChangeCard,
    DeleteTransaction(i64),
}

impl ConfirmAction {
    /// Whether a "yes" throws data away. Those prompts open with No focused.
    pub fn is_destructive(self) -> bool {
        matches!(self, ConfirmAction::DeleteAllData | ConfirmAction::DeleteTransaction(_))
    }
}

/// Yes/no question. The answer is reported with the action it guards.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirm {
    pub title: &'static str,
    pub body: String,
    pub on_answer: ConfirmAction,
    yes_focused: bool,
}

impl Confirm {
    pub fn new(title: &'static str, body: impl Into<String>, on_answer: ConfirmAction) -> Self {
        Self {
            title,
            body: body.into(),
            on_answer,
            yes_focused: !on_answer.is_destructive(),
        }
    }
}

pub struct AddTransactionDialog {
    form: Form,
}

const FIELD_NAME: usize = 0;
const FIELD_AMOUNT: usize = 1;
const FIELD_TYPE: usize = 2;
const BUTTON_ADD: usize = 0;

impl Default for AddTransactionDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl AddTransactionDialog {
    pub fn new() -> Self {
        let labels = Category::ALL.iter().map(|c| c.label()).collect();
        Self {
            form: Form::new(
                vec![
                    Field::text("Name:", "Name", ""),
                    Field::text("Amount:", "Amount", ""),
                    Field::choice("Type:", "Type", labels),
                ],
                vec!["Add", "Cancel"],
            ),
        }
    }

    /// Build the record from the current input, or `None` if any field is unusable.
    pub fn entry(&self) -> Option<NewTransaction> {
        let amount = parse_amount(self.form.text(FIELD_AMOUNT))?;
        let category = *Category::ALL.get(self.form.choice(FIELD_TYPE)?)?;
        let now = chrono::Local::now().naive_local();
        Some(NewTransaction::new(self.form.text(FIELD_NAME), amount, category).at(now))
    }
}

pub enum Modal {
    Alert(Alert),
    Confirm(Confirm),
    AddTransaction(AddTransactionDialog),
}

#[derive(Debug, PartialEq)]
pub enum ModalOutcome {
    Open,
    Dismissed,
    Answered { action: ConfirmAction, yes: bool },
    /// `None` when the entry did not validate; it is dropped without a message.
    Submitted(Option<NewTransaction>),
}

impl Modal {
    pub fn handle_key(&mut self, code: KeyCode) -> ModalOutcome {
        match self {
            Modal::Alert(_) => match code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => ModalOutcome::Dismissed,
                _ => ModalOutcome::Open,
            },
            Modal::Confirm(confirm) => match code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    confirm.yes_focused = !confirm.yes_focused;
                    ModalOutcome::Open
                }
                KeyCode::Char('y') => ModalOutcome::Answered { action: confirm.on_answer, yes: true },
                KeyCode::Char('n') | KeyCode::Esc => ModalOutcome::Answered { action: confirm.on_answer, yes: false },
                KeyCode::Enter => ModalOutcome::Answered {
                    action: confirm.on_answer,
                    yes: confirm.yes_focused,
                },
                _ => ModalOutcome::Open,
            },
            Modal::AddTransaction(dialog) => match dialog.form.handle_key(code) {
                FormEvent::Cancel => ModalOutcome::Dismissed,
                FormEvent::Pressed(BUTTON_ADD) => ModalOutcome::Submitted(dialog.entry()),
                FormEvent::Pressed(_) => ModalOutcome::Dismissed,
                _ => ModalOutcome::Open,
            },
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        match self {
            Modal::Alert(alert) => draw_message(frame, area, alert.title, alert.header, alert.body, &[("OK", true)]),
            Modal::Confirm(confirm) => draw_message(
                frame,
                area,
                confirm.title,
                "Alert",
                &confirm.body,
                &[("Yes", confirm.yes_focused), ("No", !confirm.yes_focused)],
            ),
            Modal::AddTransaction(dialog) => {
                let rect = centered(area, 56, dialog.form.height() + 5);
                frame.render_widget(Clear, rect);
                let block = Block::default()
                    .title(" Add Finance Record ")
                    .title_style(HEADER_STYLE)
                    .borders(Borders::ALL);
                let inner = block.inner(rect);
                frame.render_widget(block, rect);
                let [header, _gap, body, hints] = Layout::vertical([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                    Constraint::Length(1),
                ])
                .areas(inner);
                frame.render_widget(Paragraph::new(" Enter finance details"), header);
                dialog.form.draw(frame, body);
                frame.render_widget(
                    Paragraph::new(" Tab=next  \u{25c2}\u{25b8}=type  Enter=select  Esc=cancel").style(FOOTER_STYLE),
                    hints,
                );
            }
        }
    }
}

fn draw_message(frame: &mut Frame, area: Rect, title: &str, header: &str, body: &str, buttons: &[(&str, bool)]) {
    let rect = centered(area, 52, 9);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(HEADER_STYLE)
        .borders(Borders::ALL);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let [header_area, body_area, button_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {header}"), Style::default().add_modifier(Modifier::BOLD))),
        header_area,
    );
    frame.render_widget(Paragraph::new(format!(" {body}")).wrap(Wrap { trim: true }), body_area);

    let mut spans = vec![Span::raw(" ")];
    for (text, focused) in buttons {
        let style = if *focused { SELECTED_STYLE } else { Style::default() };
        spans.push(Span::styled(format!("[ {text} ]"), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), button_area);
}
