//! Budget limits view
//!
//! Per-category limit status for the current month

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{format_signed, MonthKey};
use crate::reports::LimitOverview;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// Render the budget limits view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    let month = MonthKey::current();

    // Render header
    render_header(frame, month, layout.header);

    // Render limit table
    render_limit_table(frame, app, month, layout.content);
}

/// Render limits header
fn render_header(frame: &mut Frame, month: MonthKey, area: Rect) {
    let block = Block::default()
        .title(format!(" Budget Limits - {} ", month))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new("Enter: Set limit  r: Reset  Esc: Back")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render limit table
fn render_limit_table(frame: &mut Frame, app: &mut App, month: MonthKey, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let overview = match LimitOverview::generate(app.storage, month) {
        Ok(overview) => overview,
        Err(_) => {
            let text = Paragraph::new("Unable to read budget data.")
                .block(block)
                .style(Style::default().fg(Color::Red));
            frame.render_widget(text, area);
            return;
        }
    };

    // Define column widths
    let widths = [
        ratatui::layout::Constraint::Min(14),    // Category
        ratatui::layout::Constraint::Length(14), // Monthly Limit
        ratatui::layout::Constraint::Length(19), // This Month Expense
        ratatui::layout::Constraint::Length(12), // Remaining
    ];

    // Header row
    let header = Row::new(vec![
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Monthly Limit").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("This Month Expense").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Remaining").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    // Data rows
    let rows: Vec<Row> = overview
        .rows
        .iter()
        .map(|row| {
            let limit_cell = if row.has_limit() {
                row.limit.to_string()
            } else {
                "No limit".to_string()
            };

            let (remaining_cell, remaining_style) = match row.remaining {
                Some(remaining) if remaining < 0 => {
                    (format_signed(remaining), Style::default().fg(Color::Red))
                }
                Some(remaining) => (format_signed(remaining), Style::default().fg(Color::Green)),
                None => ("N/A".to_string(), Style::default().fg(Color::DarkGray)),
            };

            Row::new(vec![
                Cell::from(row.category.clone()),
                Cell::from(limit_cell),
                Cell::from(row.spent.to_string()),
                Cell::from(remaining_cell).style(remaining_style),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.limits_index));

    frame.render_stateful_widget(table, area, &mut state);
}
