//! Transaction history view
//!
//! Numbered ledger table with deletion marks

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::TransactionKind;
use crate::services::TransactionService;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// Render the transaction history
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    // Render header
    render_header(frame, layout.header);

    // Render transaction table
    render_history_table(frame, app, layout.content);
}

/// Render history header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Transaction History ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new("SPACE: Mark  d: Delete  Esc: Back")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render transaction table
fn render_history_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let service = TransactionService::new(app.storage);
    let transactions = service.history().unwrap_or_default();

    if transactions.is_empty() {
        let text = Paragraph::new("No transactions found.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Define column widths
    let widths = [
        ratatui::layout::Constraint::Length(2),  // Mark
        ratatui::layout::Constraint::Length(5),  // No.
        ratatui::layout::Constraint::Length(12), // Date
        ratatui::layout::Constraint::Length(9),  // Type
        ratatui::layout::Constraint::Min(14),    // Category
        ratatui::layout::Constraint::Length(12), // Amount
    ];

    // Header row
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("No.").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Type").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    // Data rows
    let rows: Vec<Row> = transactions
        .iter()
        .enumerate()
        .map(|(i, txn)| {
            // Deletion mark
            let mark = if app.marked_rows.contains(&i) {
                "■"
            } else {
                "□"
            };

            let kind_style = match txn.kind {
                TransactionKind::Income => Style::default().fg(Color::Green),
                TransactionKind::Expense => Style::default().fg(Color::Red),
            };

            Row::new(vec![
                Cell::from(mark).style(Style::default().fg(Color::Yellow)),
                Cell::from(format!("{}", i + 1)),
                Cell::from(txn.date.clone()),
                Cell::from(txn.kind.to_string()).style(kind_style),
                Cell::from(txn.category.clone()),
                Cell::from(txn.amount.to_string()).style(kind_style),
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
    state.select(Some(app.history_index));

    frame.render_stateful_widget(table, area, &mut state);
}
