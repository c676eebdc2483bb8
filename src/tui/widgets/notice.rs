//! Notice modal
//!
//! A modal message box dismissed with any key. Success notices confirm a
//! completed action; error notices report a failed one.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::NoticeKind;
use crate::tui::layout::centered_rect_fixed;

impl NoticeKind {
    /// Border and title color for this notice kind
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    /// Dialog title for this notice kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => " Success ",
            Self::Error => " Error ",
        }
    }
}

/// Render a notice modal
pub fn render(frame: &mut Frame, kind: NoticeKind, message: &str) {
    let longest = message.lines().map(str::len).max().unwrap_or(0);
    let width = (longest as u16 + 6).clamp(30, 70);
    let height = 6 + message.lines().count().max(1) as u16;
    let area = centered_rect_fixed(width, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(kind.title())
        .title_style(
            Style::default()
                .fg(kind.color())
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(kind.color()));

    let mut lines = vec![Line::from("")];
    for text in message.lines() {
        lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::White),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to continue",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
