//! Budget limit display formatting
//!
//! Renders the per-category limit overview as a terminal table with the
//! "No limit" / "N/A" sentinels for unlimited categories.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::format_signed;
use crate::reports::LimitOverview;

#[derive(Tabled)]
struct LimitTableRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Monthly Limit")]
    limit: String,
    #[tabled(rename = "This Month Expense")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Format the limit overview as a table
pub fn format_limits_table(overview: &LimitOverview) -> String {
    let rows: Vec<LimitTableRow> = overview
        .rows
        .iter()
        .map(|row| LimitTableRow {
            category: row.category.clone(),
            limit: if row.has_limit() {
                row.limit.to_string()
            } else {
                "No limit".to_string()
            },
            spent: row.spent.to_string(),
            remaining: match row.remaining {
                Some(remaining) => format_signed(remaining),
                None => "N/A".to_string(),
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("Budget Limits - {}\n{}\n", overview.month, table)
}
