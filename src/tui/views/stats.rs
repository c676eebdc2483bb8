//! Statistics view
//!
//! All-time income, expense, and balance figures

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::format_signed;
use crate::reports::TotalsReport;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// Render the statistics view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    // Render header
    render_header(frame, layout.header);

    // Render totals
    render_totals(frame, app, layout.content);
}

/// Render statistics header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Statistics ")
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

/// Render the totals panel
fn render_totals(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let report = TotalsReport::generate(app.storage).unwrap_or_default();

    let balance_color = if report.balance < 0 {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Total Income:  ", Style::default().fg(Color::White)),
            Span::styled(
                report.total_income.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Total Expense: ", Style::default().fg(Color::White)),
            Span::styled(
                report.total_expense.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Balance:       ", Style::default().fg(Color::White)),
            Span::styled(
                format_signed(report.balance),
                Style::default()
                    .fg(balance_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Transactions:  ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{}", report.transaction_count),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}
