use chrono::NaiveDate;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog::{Alert, Confirm, ConfirmAction};
use super::{tab_action, Action, Screen, ViewId, TAB_HINTS};
use crate::context::AppContext;
use crate::fmt::{money, percent};
use crate::summary::{compute_monthly_summary, MonthlySummary};
use crate::tui::{money_span, FOOTER_STYLE, HEADER_STYLE, SELECTED_STYLE};

pub const BANK_URL: &str = "https://bankproject.atomtables.dev/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    AddRecord,
    FinanceLog,
    Trends,
    SyncTransactions,
    SyncAnalysis,
    UpdateCard,
    OpenBank,
    DeleteAllData,
}

const MENU: &[(MenuItem, &str)] = &[
    (MenuItem::AddRecord, "Add a finance record"),
    (MenuItem::FinanceLog, "Open the finance log"),
    (MenuItem::Trends, "See trends"),
    (MenuItem::SyncTransactions, "Sync transactions"),
    (MenuItem::SyncAnalysis, "Sync analysis"),
    (MenuItem::UpdateCard, "Update card"),
    (MenuItem::OpenBank, "Open your bank"),
    (MenuItem::DeleteAllData, "Delete all data"),
];

pub struct Dashboard {
    greeting: String,
    balance: f64,
    summary: MonthlySummary,
    selection: usize,
}

impl Dashboard {
    pub fn new(ctx: &AppContext) -> Self {
        let mut view = Self {
            greeting: String::new(),
            balance: 0.0,
            summary: MonthlySummary::default(),
            selection: 0,
        };
        view.load(ctx, chrono::Local::now().date_naive());
        view
    }

    fn load(&mut self, ctx: &AppContext, today: NaiveDate) {
        let user = ctx.store.get_user();
        self.greeting = match &user {
            Some(u) => format!("Welcome back, {}!", u.first_name),
            None => "Welcome back!".to_string(),
        };
        self.balance = user.map(|u| u.balance).unwrap_or(0.0);
        self.summary = compute_monthly_summary(today, &ctx.store.list_transactions());
    }

    fn activate(&self, item: MenuItem) -> Action {
        match item {
            MenuItem::AddRecord => Action::AddTransaction,
            MenuItem::FinanceLog => Action::Push(ViewId::Ledger),
            MenuItem::Trends => Action::Push(ViewId::Trends),
            MenuItem::SyncTransactions => Action::Alert(Alert::up_to_date("Syncing Transaction Data")),
            MenuItem::SyncAnalysis => Action::Alert(Alert::up_to_date("Syncing Analysis Data")),
            MenuItem::UpdateCard => Action::Confirm(Confirm::new(
                "Change Card",
                "Are you sure you want to change your card or unlink your bank?",
                ConfirmAction::ChangeCard,
            )),
            MenuItem::OpenBank => Action::OpenExternal(BANK_URL),
            MenuItem::DeleteAllData => Action::Confirm(Confirm::new(
                "Delete All Data",
                "Are you sure you want to delete all data? This cannot be undone.",
                ConfirmAction::DeleteAllData,
            )),
        }
    }
}

fn change_span(change: f64) -> Span<'static> {
    let style = if change > 0.0 {
        Style::default().fg(Color::Rgb(80, 220, 100))
    } else if change < 0.0 {
        Style::default().fg(Color::Red)
    } else {
        FOOTER_STYLE
    };
    Span::styled(format!("{} vs last month", percent(change)), style)
}

impl Screen for Dashboard {
    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = Style::default().fg(Color::DarkGray);
        let [header_area, sep1, stats_area, sep2, menu_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(format!(" {}", self.greeting)).style(HEADER_STYLE),
            header_area,
        );
        let sep_line = "\u{2501}".repeat(area.width as usize);
        let sep_widget = Paragraph::new(sep_line.as_str()).style(border_style);
        frame.render_widget(sep_widget.clone(), sep1);
        frame.render_widget(sep_widget, sep2);

        let s = &self.summary;
        let stats = vec![
            Line::from(vec![Span::raw(" Balance             "), money_span(self.balance)]),
            Line::from(""),
            Line::from(vec![
                Span::raw(" Credits this month  "),
                Span::raw(format!("{:<16}", money(s.this_month_credits))),
                change_span(s.credit_percent_change),
            ]),
            Line::from(vec![
                Span::raw(" Debits this month   "),
                Span::raw(format!("{:<16}", money(s.this_month_debits))),
                change_span(s.debit_percent_change),
            ]),
        ];
        frame.render_widget(Paragraph::new(stats), stats_area);

        let mut menu = vec![Line::from(Span::styled(
            " What would you like to do?",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        for (i, (_, label)) in MENU.iter().enumerate() {
            if i == self.selection {
                menu.push(Line::from(Span::styled(format!(" \u{25b8} {label}"), SELECTED_STYLE)));
            } else {
                menu.push(Line::from(format!("   {label}")));
            }
        }
        frame.render_widget(Paragraph::new(menu), menu_area);

        frame.render_widget(
            Paragraph::new(format!(" \u{2191}\u{2193}=select  Enter=open  a=add  {TAB_HINTS}  q=quit"))
                .style(FOOTER_STYLE),
            hints_area,
        );
    }

    fn handle_key(&mut self, code: KeyCode, _ctx: &mut AppContext) -> Action {
        if let Some(action) = tab_action(code) {
            return action;
        }
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selection = self.selection.checked_sub(1).unwrap_or(MENU.len() - 1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selection = (self.selection + 1) % MENU.len();
                Action::None
            }
            KeyCode::Enter => self.activate(MENU[self.selection].0),
            KeyCode::Char('a') => Action::AddTransaction,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Esc => Action::Back,
            _ => Action::None,
        }
    }

    fn reload(&mut self, ctx: &AppContext) {
        self.load(ctx, chrono::Local::now().date_naive());
    }
}
