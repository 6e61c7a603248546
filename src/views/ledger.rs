use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::dialog::{Confirm, ConfirmAction};
use super::{tab_action, Action, Screen, TAB_HINTS};
use crate::context::AppContext;
use crate::fmt::{day, money};
use crate::ledger::{arrange, LedgerMode};
use crate::models::Transaction;
use crate::tui::{CELL_NEG_STYLE, CELL_POS_STYLE, FOOTER_STYLE, HEADER_STYLE, SELECTED_STYLE};

/// A table column: its heading, width and how to render a record into it.
struct Column {
    title: &'static str,
    width: Constraint,
    cell: fn(&Transaction) -> Cell<'static>,
}

fn name_cell(t: &Transaction) -> Cell<'static> {
    Cell::from(t.name.clone())
}

fn type_cell(t: &Transaction) -> Cell<'static> {
    Cell::from(t.category.label())
}

fn date_cell(t: &Transaction) -> Cell<'static> {
    Cell::from(day(&t.date))
}

fn amount_cell(t: &Transaction) -> Cell<'static> {
    let style = if t.amount >= 0.0 { CELL_POS_STYLE } else { CELL_NEG_STYLE };
    Cell::from(Line::from(format!(" {} ", money(t.amount))).right_aligned()).style(style)
}

const COLUMNS: [Column; 4] = [
    Column { title: "Name", width: Constraint::Fill(1), cell: name_cell },
    Column { title: "Type", width: Constraint::Length(16), cell: type_cell },
    Column { title: "Date", width: Constraint::Length(12), cell: date_cell },
    Column { title: "Amount", width: Constraint::Length(16), cell: amount_cell },
];

pub struct LedgerView {
    mode: LedgerMode,
    rows: Vec<Transaction>,
    state: TableState,
}

impl LedgerView {
    pub fn new(ctx: &AppContext) -> Self {
        let mut view = Self {
            mode: LedgerMode::DateDescending,
            rows: Vec::new(),
            state: TableState::default(),
        };
        view.reload(ctx);
        view
    }

    fn set_mode(&mut self, mode: LedgerMode, ctx: &AppContext) {
        self.mode = mode;
        self.reload(ctx);
        self.state.select(if self.rows.is_empty() { None } else { Some(0) });
    }

    fn selected(&self) -> Option<&Transaction> {
        self.state.selected().and_then(|i| self.rows.get(i))
    }

    fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let current = self.state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.state.select(Some(next));
    }
}

impl Screen for LedgerView {
    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, status_area, table_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(format!(" Finance Log ({} records)", self.rows.len())).style(HEADER_STYLE),
            header_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::raw(" "), Span::styled(self.mode.label(), FOOTER_STYLE)])),
            status_area,
        );

        let header = Row::new(COLUMNS.iter().map(|c| Cell::from(c.title))).style(HEADER_STYLE);
        let rows = self
            .rows
            .iter()
            .map(|t| Row::new(COLUMNS.iter().map(|c| (c.cell)(t))));
        let table = Table::new(rows, COLUMNS.iter().map(|c| c.width))
            .header(header)
            .column_spacing(2)
            .row_highlight_style(SELECTED_STYLE)
            .highlight_symbol("\u{25b8} ");
        frame.render_stateful_widget(table, table_area, &mut self.state);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(" 1/2=date \u{2191}\u{2193}  3/4=amount \u{2191}\u{2193}  s=spending  i=income  m=last month"),
                Line::from(format!(" a=add  d=delete  {TAB_HINTS}  Esc=back")),
            ])
            .style(FOOTER_STYLE),
            hints_area,
        );
    }

    fn handle_key(&mut self, code: KeyCode, ctx: &mut AppContext) -> Action {
        if let Some(action) = tab_action(code) {
            return action;
        }
        let mode = match code {
            KeyCode::Char('1') => Some(LedgerMode::DateAscending),
            KeyCode::Char('2') => Some(LedgerMode::DateDescending),
            KeyCode::Char('3') => Some(LedgerMode::AmountAscending),
            KeyCode::Char('4') => Some(LedgerMode::AmountDescending),
            KeyCode::Char('s') => Some(LedgerMode::Spending),
            KeyCode::Char('i') => Some(LedgerMode::Income),
            KeyCode::Char('m') => Some(LedgerMode::LastMonth),
            _ => None,
        };
        if let Some(mode) = mode {
            self.set_mode(mode, ctx);
            return Action::None;
        }
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                Action::None
            }
            KeyCode::PageUp => {
                self.move_selection(-10);
                Action::None
            }
            KeyCode::PageDown => {
                self.move_selection(10);
                Action::None
            }
            KeyCode::Char('a') => Action::AddTransaction,
            KeyCode::Char('d') | KeyCode::Delete => match self.selected() {
                Some(t) => Action::Confirm(Confirm::new(
                    "Delete Record",
                    format!("Delete \"{}\" ({})?", t.name, money(t.amount)),
                    ConfirmAction::DeleteTransaction(t.id),
                )),
                None => Action::None,
            },
            KeyCode::Esc => Action::Back,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn reload(&mut self, ctx: &AppContext) {
        let now = chrono::Local::now().naive_local();
        self.rows = arrange(ctx.store.list_transactions(), self.mode, now);
        match self.state.selected() {
            _ if self.rows.is_empty() => self.state.select(None),
            Some(i) if i >= self.rows.len() => self.state.select(Some(self.rows.len() - 1)),
            None => self.state.select(Some(0)),
            Some(_) => {}
        }
    }
}
