//! Monthly analysis view
//!
//! Proportional expense-by-category chart for the current month

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::MonthKey;
use crate::reports::MonthlyBreakdown;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// Bar colors, cycled per category
const BAR_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
];

/// Render the monthly analysis view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    let month = MonthKey::current();

    // Render header
    render_header(frame, month, layout.header);

    // Render chart
    render_chart(frame, app, month, layout.content);
}

/// Render analysis header
fn render_header(frame: &mut Frame, month: MonthKey, area: Rect) {
    let block = Block::default()
        .title(format!(" Expense by Category - {} ", month))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new("Esc: Back")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the per-category bar chart
fn render_chart(frame: &mut Frame, app: &mut App, month: MonthKey, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let breakdown = match MonthlyBreakdown::generate(app.storage, month) {
        Ok(breakdown) => breakdown,
        Err(_) => {
            let text = Paragraph::new("Unable to read ledger data.")
                .block(block)
                .style(Style::default().fg(Color::Red));
            frame.render_widget(text, area);
            return;
        }
    };

    if breakdown.is_empty() {
        let text = Paragraph::new(format!("No expense data for {}.", month))
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // A 100% bar fills the space left of the fixed columns.
    let max_bar = (area.width as usize).saturating_sub(42).max(10);

    let mut lines = vec![Line::from("")];
    for (i, entry) in breakdown.entries.iter().enumerate() {
        let bar_len = ((entry.percentage / 100.0) * max_bar as f64).round() as usize;
        let color = BAR_COLORS[i % BAR_COLORS.len()];

        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<16}", entry.category),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:>10}", entry.amount.to_string()),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:>8.2}%  ", entry.percentage),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled("█".repeat(bar_len.max(1)), Style::default().fg(color)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {:<16}", "Total"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>10}", breakdown.total_expense.to_string()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}
