use std::process::{Command, Stdio};

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::error::Result;
use crate::fmt::money;

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const AMOUNT_POS_STYLE: Style = Style::new().fg(Color::Rgb(80, 220, 100));
pub const AMOUNT_NEG_STYLE: Style = Style::new().fg(Color::Red);

/// Ledger amount cells: white on green for income, white on red for spending.
pub const CELL_POS_STYLE: Style = Style::new().fg(Color::White).bg(Color::Rgb(30, 120, 50));
pub const CELL_NEG_STYLE: Style = Style::new().fg(Color::White).bg(Color::Rgb(150, 30, 30));

pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::Rgb(40, 40, 60))
    .add_modifier(Modifier::BOLD);

pub const DISABLED_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const ERROR_STYLE: Style = Style::new().fg(Color::Red);

/// Format an amount as a colored Span (green for income, red for expense).
/// Keeps the sign, unlike the ledger cells where the background carries it.
pub fn money_span(amount: f64) -> Span<'static> {
    let style = if amount < 0.0 {
        AMOUNT_NEG_STYLE
    } else {
        AMOUNT_POS_STYLE
    };
    Span::styled(money(amount), style)
}

/// Wrap text to a given width. Returns (wrapped_string, line_count).
pub fn wrap_text(text: &str, width: usize) -> (String, u16) {
    if width == 0 {
        return (text.to_string(), 1);
    }
    let wrapped = textwrap::fill(text, width);
    let lines = wrapped.lines().count().max(1) as u16;
    (wrapped, lines)
}

/// A `width` x `height` rect centered in `area`, clipped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// `area` shifted right by `fraction` of its width, or `None` once fully off-screen.
pub fn slid(area: Rect, fraction: f64) -> Option<Rect> {
    let shift = (area.width as f64 * fraction.clamp(0.0, 1.0)).round() as u16;
    if shift >= area.width {
        return None;
    }
    Some(Rect {
        x: area.x + shift,
        width: area.width - shift,
        ..area
    })
}

fn opener(url: &str) -> Command {
    let mut cmd = if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(url);
        c
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };
    cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
    cmd
}

/// Open a URL with the platform's default handler.
///
/// The handler runs detached with no access to the terminal, so it can neither
/// block the event loop nor draw over the UI. Only a failure to start it is reported.
pub fn open_external(url: &str) -> Result<()> {
    let mut child = opener(url).spawn()?;
    // Reap off the UI thread so the exited handler does not linger as a zombie.
    std::thread::spawn(move || child.wait());
    Ok(())
}
