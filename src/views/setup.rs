//! The four-stage setup wizard.
//!
//! Each stage reads its initial values from the [`SetupDraft`] on the
//! application context and writes them back when the user moves forward, so
//! going back and forth keeps what was typed. The profile is only written to
//! the store from the last stage.
//!
//! [`SetupDraft`]: crate::context::SetupDraft

use chrono::NaiveDate;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::form::{Field, Form, FormEvent};
use super::{Action, Screen, ViewId};
use crate::context::{AppContext, SetupDraft};
use crate::fmt::money;
use crate::tui::{centered, ERROR_STYLE, FOOTER_STYLE, HEADER_STYLE};

pub const BANK_CODE_URL: &str = "https://bankproject.atomtables.dev/financetrack";

const HINTS: &str = "Tab/\u{2191}\u{2193}=move  Enter=select  Esc=back";

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Frame shared by all stages: a titled box with a subtitle, the form, an
/// optional error line and the key hints.
fn draw_stage(frame: &mut Frame, area: Rect, step: u8, subtitle: &str, form: &Form, error: Option<&str>) {
    let rect = centered(area, 64, form.height() + 8);
    let block = Block::default()
        .title(format!(" Setup ({step}/4) "))
        .title_style(HEADER_STYLE)
        .borders(Borders::ALL);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let [subtitle_area, _gap, form_area, error_area, hints_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(form.height()),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(format!(" {subtitle}")), subtitle_area);
    form.draw(frame, form_area);
    if let Some(msg) = error {
        frame.render_widget(Paragraph::new(Line::styled(format!(" {msg}"), ERROR_STYLE)), error_area);
    }
    frame.render_widget(Paragraph::new(format!(" {HINTS}")).style(FOOTER_STYLE), hints_area);
}

// Stage 1: name and email.

pub struct PersonalDetails {
    form: Form,
}

impl PersonalDetails {
    pub fn new(draft: &SetupDraft) -> Self {
        Self {
            form: Form::new(
                vec![
                    Field::text("First name:", "First name", &draft.first_name),
                    Field::text("Last name:", "Last name", &draft.last_name),
                    Field::text("Email:", "Email", &draft.email),
                ],
                vec!["Next", "Back"],
            ),
        }
    }
}

impl Screen for PersonalDetails {
    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        draw_stage(frame, area, 1, "Let's get to know you.", &self.form, None);
    }

    fn handle_key(&mut self, code: KeyCode, ctx: &mut AppContext) -> Action {
        match self.form.handle_key(code) {
            FormEvent::Pressed(0) => {
                ctx.setup.first_name = self.form.text(0).trim().to_string();
                ctx.setup.last_name = self.form.text(1).trim().to_string();
                ctx.setup.email = self.form.text(2).trim().to_string();
                Action::Push(ViewId::Setup2)
            }
            FormEvent::Pressed(_) | FormEvent::Cancel => Action::Back,
            _ => Action::None,
        }
    }
}

// Stage 2: date of birth and occupation.

pub struct AboutYou {
    form: Form,
    greeting: String,
    error: Option<&'static str>,
}

impl AboutYou {
    pub fn new(draft: &SetupDraft) -> Self {
        Self {
            form: Form::new(
                vec![
                    Field::text(
                        "Date of birth:",
                        "YYYY-MM-DD",
                        draft.date_of_birth.as_deref().unwrap_or(""),
                    ),
                    Field::text("Occupation:", "Occupation", draft.occupation.as_deref().unwrap_or("")),
                ],
                vec!["Next", "Back"],
            ),
            greeting: format!("Nice to meet you, {}! Tell us about yourself.", draft.first_name),
            error: None,
        }
    }
}

/// A birth date in `YYYY-MM-DD` form, normalized.
pub fn parse_birth_date(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

impl Screen for AboutYou {
    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        draw_stage(frame, area, 2, &self.greeting, &self.form, self.error);
    }

    fn handle_key(&mut self, code: KeyCode, ctx: &mut AppContext) -> Action {
        match self.form.handle_key(code) {
            FormEvent::Pressed(0) => match parse_birth_date(self.form.text(0)) {
                Some(dob) => {
                    self.error = None;
                    ctx.setup.date_of_birth = Some(dob);
                    ctx.setup.occupation = non_empty(self.form.text(1));
                    Action::Push(ViewId::Setup3)
                }
                None => {
                    self.error = Some("Enter your date of birth as YYYY-MM-DD.");
                    Action::None
                }
            },
            FormEvent::Pressed(_) | FormEvent::Cancel => Action::Back,
            _ => Action::None,
        }
    }
}

// Stage 3: link a bank. The code is never checked; entering anything unlocks
// Next, which loads the sample ledger.

pub struct BankLink {
    form: Form,
}

const BUTTON_GET_CODE: usize = 0;
const BUTTON_NEXT: usize = 1;

impl BankLink {
    pub fn new() -> Self {
        let mut form = Form::new(
            vec![Field::text("Bank code:", "Code", "")],
            vec!["Get code", "Next", "Back"],
        );
        form.set_disabled(BUTTON_NEXT, true);
        Self { form }
    }
}

impl Default for BankLink {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for BankLink {
    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        draw_stage(
            frame,
            area,
            3,
            "Link your bank. Get a code from your bank, then enter it here.",
            &self.form,
            None,
        );
    }

    fn handle_key(&mut self, code: KeyCode, ctx: &mut AppContext) -> Action {
        match self.form.handle_key(code) {
            FormEvent::Edited => {
                self.form.set_disabled(BUTTON_NEXT, false);
                Action::None
            }
            FormEvent::Pressed(BUTTON_GET_CODE) => Action::OpenExternal(BANK_CODE_URL),
            FormEvent::Pressed(BUTTON_NEXT) => {
                if ctx.setup.seeded_balance.is_none() {
                    ctx.setup.seeded_balance = Some(ctx.store.seed_sample_transactions());
                }
                Action::Push(ViewId::Setup4)
            }
            FormEvent::Pressed(_) | FormEvent::Cancel => Action::Back,
            _ => Action::None,
        }
    }
}

// Stage 4: review and finish.

pub struct Confirmation {
    form: Form,
    summary: Vec<String>,
}

impl Confirmation {
    pub fn new(draft: &SetupDraft) -> Self {
        let summary = vec![
            format!("Name:        {} {}", draft.first_name, draft.last_name),
            format!("Email:       {}", draft.email),
            format!("Born:        {}", draft.date_of_birth.as_deref().unwrap_or("-")),
            format!("Occupation:  {}", draft.occupation.as_deref().unwrap_or("-")),
            format!("Balance:     {}", money(draft.seeded_balance.unwrap_or(0.0))),
        ];
        Self {
            form: Form::new(Vec::new(), vec!["Finish", "Back"]),
            summary,
        }
    }
}

impl Screen for Confirmation {
    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let rect = centered(area, 64, self.summary.len() as u16 + 9);
        let block = Block::default()
            .title(" Setup (4/4) ")
            .title_style(HEADER_STYLE)
            .borders(Borders::ALL);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let [subtitle_area, _gap, summary_area, buttons_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(self.summary.len() as u16),
            Constraint::Length(self.form.height()),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(" You're all set. Does this look right?"), subtitle_area);
        let lines: Vec<Line> = self.summary.iter().map(|s| Line::from(format!("   {s}"))).collect();
        frame.render_widget(Paragraph::new(lines), summary_area);
        self.form.draw(frame, buttons_area);
        frame.render_widget(Paragraph::new(format!(" {HINTS}")).style(FOOTER_STYLE), hints_area);
    }

    fn handle_key(&mut self, code: KeyCode, ctx: &mut AppContext) -> Action {
        match self.form.handle_key(code) {
            FormEvent::Pressed(0) => {
                ctx.store.set_user(&ctx.setup.profile());
                tracing::info!(first_name = %ctx.setup.first_name, "setup complete");
                Action::ReplaceRoot(ViewId::Main)
            }
            FormEvent::Pressed(_) | FormEvent::Cancel => Action::Back,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::temp_context;

    fn type_text(view: &mut dyn Screen, ctx: &mut AppContext, text: &str) {
        for c in text.chars() {
            view.handle_key(KeyCode::Char(c), ctx);
        }
    }

    #[test]
    fn test_personal_details_saves_draft() {
        let (_dir, mut ctx) = temp_context();
        let mut view = PersonalDetails::new(&ctx.setup);
        type_text(&mut view, &mut ctx, "Ada");
        view.handle_key(KeyCode::Enter, &mut ctx);
        type_text(&mut view, &mut ctx, "Lovelace");
        view.handle_key(KeyCode::Enter, &mut ctx);
        type_text(&mut view, &mut ctx, "ada@example.com");
        view.handle_key(KeyCode::Enter, &mut ctx);
        assert_eq!(view.handle_key(KeyCode::Enter, &mut ctx), Action::Push(ViewId::Setup2));
        assert_eq!(ctx.setup.first_name, "Ada");
        assert_eq!(ctx.setup.last_name, "Lovelace");
        assert_eq!(ctx.setup.email, "ada@example.com");
    }

    #[test]
    fn test_personal_details_prefills_and_backs_out() {
        let (_dir, mut ctx) = temp_context();
        ctx.setup.first_name = "Ada".to_string();
        let mut view = PersonalDetails::new(&ctx.setup);
        assert_eq!(view.form.text(0), "Ada");
        assert_eq!(view.handle_key(KeyCode::Esc, &mut ctx), Action::Back);
    }

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(parse_birth_date(" 1990-12-10 ").as_deref(), Some("1990-12-10"));
        assert_eq!(parse_birth_date("10/12/1990"), None);
        assert_eq!(parse_birth_date("1990-02-30"), None);
        assert_eq!(parse_birth_date(""), None);
    }

    #[test]
    fn test_about_you_requires_birth_date() {
        let (_dir, mut ctx) = temp_context();
        ctx.setup.first_name = "Ada".to_string();
        let mut view = AboutYou::new(&ctx.setup);
        assert!(view.greeting.contains("Nice to meet you, Ada!"));

        // Straight to Next with an empty date.
        view.handle_key(KeyCode::Tab, &mut ctx);
        view.handle_key(KeyCode::Tab, &mut ctx);
        assert_eq!(view.handle_key(KeyCode::Enter, &mut ctx), Action::None);
        assert!(view.error.is_some());
        assert_eq!(ctx.setup.date_of_birth, None);

        // Fill it in and try again.
        view.handle_key(KeyCode::Tab, &mut ctx);
        view.handle_key(KeyCode::Tab, &mut ctx);
        type_text(&mut view, &mut ctx, "1990-12-10");
        view.handle_key(KeyCode::Enter, &mut ctx);
        type_text(&mut view, &mut ctx, "Analyst");
        view.handle_key(KeyCode::Enter, &mut ctx);
        assert_eq!(view.handle_key(KeyCode::Enter, &mut ctx), Action::Push(ViewId::Setup3));
        assert!(view.error.is_none());
        assert_eq!(ctx.setup.date_of_birth.as_deref(), Some("1990-12-10"));
        assert_eq!(ctx.setup.occupation.as_deref(), Some("Analyst"));
    }

    #[test]
    fn test_bank_link_next_locked_until_code_entered() {
        let (_dir, mut ctx) = temp_context();
        let mut view = BankLink::new();
        view.handle_key(KeyCode::Tab, &mut ctx);
        view.handle_key(KeyCode::Tab, &mut ctx);
        assert_eq!(view.form.focus(), 2);
        assert_eq!(view.handle_key(KeyCode::Enter, &mut ctx), Action::None);
        assert_eq!(ctx.store.transaction_count(), 0);

        view.handle_key(KeyCode::BackTab, &mut ctx);
        view.handle_key(KeyCode::BackTab, &mut ctx);
        view.handle_key(KeyCode::Char('7'), &mut ctx);
        view.handle_key(KeyCode::Tab, &mut ctx);
        assert_eq!(
            view.handle_key(KeyCode::Enter, &mut ctx),
            Action::OpenExternal(BANK_CODE_URL)
        );
        view.handle_key(KeyCode::Tab, &mut ctx);
        assert_eq!(view.handle_key(KeyCode::Enter, &mut ctx), Action::Push(ViewId::Setup4));
        assert_eq!(ctx.store.transaction_count(), 60);
        assert!((ctx.setup.seeded_balance.unwrap() - (-93_917.12)).abs() < 0.005);
    }

    #[test]
    fn test_bank_link_seeds_once_per_draft() {
        let (_dir, mut ctx) = temp_context();
        for _ in 0..2 {
            let mut view = BankLink::new();
            view.handle_key(KeyCode::Char('1'), &mut ctx);
            view.handle_key(KeyCode::Tab, &mut ctx);
            view.handle_key(KeyCode::Tab, &mut ctx);
            assert_eq!(view.handle_key(KeyCode::Enter, &mut ctx), Action::Push(ViewId::Setup4));
        }
        assert_eq!(ctx.store.transaction_count(), 60);
    }

    #[test]
    fn test_confirmation_writes_profile() {
        let (_dir, mut ctx) = temp_context();
        ctx.setup = SetupDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            date_of_birth: Some("1990-12-10".to_string()),
            occupation: None,
            seeded_balance: Some(250.0),
        };
        let mut view = Confirmation::new(&ctx.setup);
        assert!(view.summary.iter().any(|l| l.contains("$250.00")));
        assert_eq!(view.handle_key(KeyCode::Enter, &mut ctx), Action::ReplaceRoot(ViewId::Main));
        let user = ctx.store.get_user().unwrap();
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.balance, 250.0);
        assert_eq!(user.occupation, None);
    }

    #[test]
    fn test_confirmation_back() {
        let (_dir, mut ctx) = temp_context();
        let mut view = Confirmation::new(&ctx.setup);
        view.handle_key(KeyCode::Right, &mut ctx);
        assert_eq!(view.handle_key(KeyCode::Enter, &mut ctx), Action::Back);
        assert!(ctx.store.get_user().is_none());
    }
}
