use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{Action, Screen, ViewId};
use crate::context::AppContext;
use crate::tui::{centered, FOOTER_STYLE, HEADER_STYLE};

/// First screen shown before a profile exists.
pub struct Welcome;

impl Screen for Welcome {
    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let box_area = centered(area, 50, 7);
        let [title, _gap, tagline, _gap2, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(box_area);

        frame.render_widget(
            Paragraph::new("Welcome to FinanceTrack").style(HEADER_STYLE).centered(),
            title,
        );
        frame.render_widget(
            Paragraph::new(Line::styled(
                "Track what comes in and what goes out.",
                Style::default().fg(Color::Gray),
            ))
            .centered(),
            tagline,
        );
        frame.render_widget(
            Paragraph::new("Enter=get started  q=quit").style(FOOTER_STYLE).centered(),
            hint,
        );
    }

    fn handle_key(&mut self, code: KeyCode, _ctx: &mut AppContext) -> Action {
        match code {
            KeyCode::Enter => Action::Push(ViewId::Setup1),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}
