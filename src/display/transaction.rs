//! Transaction display formatting
//!
//! Renders the transaction history as a terminal table. Row numbers are
//! 1-based and double as the ordinals the delete command takes.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "No.")]
    no: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the transaction history as a table
pub fn format_history_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<HistoryRow> = transactions
        .iter()
        .enumerate()
        .map(|(i, txn)| HistoryRow {
            no: i + 1,
            id: txn.id.to_string(),
            date: txn.date.clone(),
            kind: txn.kind.to_string(),
            category: txn.category.clone(),
            amount: txn.amount.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, TransactionKind};

    #[test]
    fn test_empty_history() {
        assert_eq!(format_history_table(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_history_rows_are_numbered_from_one() {
        let transactions = vec![
            Transaction::new(
                Amount::new(3000),
                "Salary",
                "2025-01-01",
                TransactionKind::Income,
            ),
            Transaction::new(
                Amount::new(45),
                "Food",
                "2025-01-03",
                TransactionKind::Expense,
            ),
        ];

        let text = format_history_table(&transactions);
        assert!(text.contains("No."));
        assert!(text.contains("Category"));
        assert!(text.contains("Salary"));
        assert!(text.contains("$3,000"));
        assert!(text.contains("Expense"));

        let first_data_line = text
            .lines()
            .find(|l| l.contains("Salary"))
            .unwrap()
            .trim_start();
        assert!(first_data_line.starts_with('1'));
    }
}
