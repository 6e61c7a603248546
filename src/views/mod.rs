pub mod dashboard;
pub mod dialog;
pub mod form;
pub mod ledger;
pub mod setup;
pub mod trends;
pub mod welcome;

use crossterm::event::KeyCode;
use ratatui::{layout::Rect, Frame};

use crate::context::AppContext;
use dialog::{Alert, Confirm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Welcome,
    Setup1,
    Setup2,
    Setup3,
    Setup4,
    Main,
    Ledger,
    Trends,
}

/// What a view asks the application to do after handling a key.
#[derive(Debug, PartialEq)]
pub enum Action {
    None,
    Push(ViewId),
    ReplaceRoot(ViewId),
    Back,
    Quit,
    AddTransaction,
    Alert(Alert),
    Confirm(Confirm),
    OpenExternal(&'static str),
}

pub trait Screen {
    fn draw(&mut self, frame: &mut Frame, area: Rect);

    fn handle_key(&mut self, code: KeyCode, ctx: &mut AppContext) -> Action;

    /// Re-read store data after the ledger changed underneath the view.
    fn reload(&mut self, _ctx: &AppContext) {}
}

/// Tab bar shared by the dashboard, ledger and trends views.
pub const TAB_HINTS: &str = "h=home  l=log  t=trends";

pub fn tab_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('h') => Some(Action::Push(ViewId::Main)),
        KeyCode::Char('l') => Some(Action::Push(ViewId::Ledger)),
        KeyCode::Char('t') => Some(Action::Push(ViewId::Trends)),
        _ => None,
    }
}
