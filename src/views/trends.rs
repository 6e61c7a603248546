use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{tab_action, Action, Screen, TAB_HINTS};
use crate::context::AppContext;
use crate::summary::Outlook;
use crate::tui::{money_span, wrap_text, AMOUNT_NEG_STYLE, AMOUNT_POS_STYLE, FOOTER_STYLE, HEADER_STYLE};

pub struct TrendsView {
    outlook: Outlook,
}

impl TrendsView {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            outlook: Outlook::from_transactions(&ctx.store.list_transactions()),
        }
    }
}

impl Screen for TrendsView {
    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, totals_area, advice_area, hints_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(" Trends").style(HEADER_STYLE), header_area);

        let totals = vec![
            Line::from(vec![Span::raw(" Money in    "), money_span(self.outlook.credits)]),
            Line::from(vec![Span::raw(" Money out   "), money_span(self.outlook.debits)]),
            Line::from(vec![
                Span::raw(" Net         "),
                money_span(self.outlook.credits + self.outlook.debits),
            ]),
        ];
        frame.render_widget(Paragraph::new(totals), totals_area);

        let (title, title_style) = if self.outlook.is_saving() {
            (" Saving ", AMOUNT_POS_STYLE)
        } else {
            (" Overspending ", AMOUNT_NEG_STYLE)
        };
        let block = Block::default()
            .title(Span::styled(title, title_style.add_modifier(Modifier::BOLD)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(advice_area);
        let (wrapped, _) = wrap_text(self.outlook.advice(), inner.width.saturating_sub(2) as usize);
        let lines: Vec<Line> = wrapped.lines().map(|l| Line::from(format!(" {l}"))).collect();
        frame.render_widget(Paragraph::new(lines).block(block), advice_area);

        frame.render_widget(
            Paragraph::new(format!(" {TAB_HINTS}  Esc=back  q=quit")).style(FOOTER_STYLE),
            hints_area,
        );
    }

    fn handle_key(&mut self, code: KeyCode, _ctx: &mut AppContext) -> Action {
        if let Some(action) = tab_action(code) {
            return action;
        }
        match code {
            KeyCode::Esc => Action::Back,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn reload(&mut self, ctx: &AppContext) {
        self.outlook = Outlook::from_transactions(&ctx.store.list_transactions());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::temp_context;
    use crate::models::{Category, NewTransaction};
    use crate::views::ViewId;

    #[test]
    fn test_trends_totals_follow_store() {
        let (_dir, mut ctx) = temp_context();
        ctx.store.add_transaction(&NewTransaction::new("Pay", 1_000.0, Category::Services));
        ctx.store.add_transaction(&NewTransaction::new("Rent", -400.0, Category::Services));
        let mut view = TrendsView::new(&ctx);
        assert_eq!(view.outlook.credits, 1_000.0);
        assert_eq!(view.outlook.debits, -400.0);
        assert!(view.outlook.is_saving());

        ctx.store.add_transaction(&NewTransaction::new("Car", -2_000.0, Category::Transportation));
        view.reload(&ctx);
        assert!(!view.outlook.is_saving());
        assert!(view.outlook.advice().starts_with("Oh no!"));

        assert_eq!(view.handle_key(KeyCode::Char('h'), &mut ctx), Action::Push(ViewId::Main));
        assert_eq!(view.handle_key(KeyCode::Esc, &mut ctx), Action::Back);
    }
}
