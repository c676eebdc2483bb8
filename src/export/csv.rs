//! CSV export functionality
//!
//! Writes the two spreadsheet-compatible files: a raw dump of the ledger and
//! a statistics summary for the current month.

use std::io::Write;

use crate::error::BudgetResult;
use crate::models::MonthKey;
use crate::reports::TotalsReport;
use crate::storage::Storage;

/// Export the full ledger as CSV rows
///
/// Columns mirror the stored shape, with the ordinal and stable id first.
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["No.", "ID", "Amount", "Category", "Date", "Type"])?;

    for (i, txn) in storage.ledger.all()?.iter().enumerate() {
        csv_writer.write_record([
            (i + 1).to_string(),
            txn.id.to_string(),
            txn.amount.units().to_string(),
            txn.category.clone(),
            txn.date.clone(),
            txn.kind.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export the statistics summary for one month as CSV rows
///
/// Income, expense, and balance are filtered to the month by the same
/// substring rule the accounting uses; the expense ratio is expense as a
/// percentage of income.
pub fn export_statistics_csv<W: Write>(
    storage: &Storage,
    month: MonthKey,
    writer: W,
) -> BudgetResult<()> {
    let totals = TotalsReport::generate_for_month(storage, month)?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Item", "Value"])?;
    csv_writer.write_record(["Total Income", totals.total_income.units().to_string().as_str()])?;
    csv_writer.write_record(["Total Expense", totals.total_expense.units().to_string().as_str()])?;
    csv_writer.write_record(["Balance", totals.balance.to_string().as_str()])?;
    csv_writer.write_record([
        "Expense Ratio (%)",
        format!("{:.2}", totals.expense_ratio()).as_str(),
    ])?;

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use crate::models::{Amount, Transaction, TransactionKind};
    use tempfile::TempDir;

    fn storage(temp_dir: &TempDir) -> Storage {
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        storage
    }

    fn add(storage: &Storage, amount: u64, category: &str, date: &str, kind: TransactionKind) {
        storage
            .ledger
            .append(Transaction::new(Amount::new(amount), category, date, kind))
            .unwrap();
    }

    #[test]
    fn test_transactions_csv_has_header_and_ordered_rows() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        add(&storage, 3000, "Salary", "2025-01-01", TransactionKind::Income);
        add(&storage, 45, "Food", "2025-01-03", TransactionKind::Expense);

        let mut buf = Vec::new();
        export_transactions_csv(&storage, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "No.,ID,Amount,Category,Date,Type");
        assert!(lines[1].starts_with("1,txn-"));
        assert!(lines[1].ends_with("3000,Salary,2025-01-01,Income"));
        assert!(lines[2].starts_with("2,txn-"));
        assert!(lines[2].ends_with("45,Food,2025-01-03,Expense"));
    }

    #[test]
    fn test_statistics_csv_is_month_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        add(&storage, 1000, "Salary", "2025-01-01", TransactionKind::Income);
        add(&storage, 250, "Food", "2025-01-10", TransactionKind::Expense);
        // Different month, must not appear in the figures.
        add(&storage, 9999, "Food", "2025-02-10", TransactionKind::Expense);

        let mut buf = Vec::new();
        export_statistics_csv(&storage, MonthKey::new(2025, 1), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Item,Value"));
        assert!(text.contains("Total Income,1000"));
        assert!(text.contains("Total Expense,250"));
        assert!(text.contains("Balance,750"));
        assert!(text.contains("Expense Ratio (%),25.00"));
    }

    #[test]
    fn test_statistics_csv_zero_income_month() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        add(&storage, 10, "Food", "2025-05-01", TransactionKind::Expense);

        let mut buf = Vec::new();
        export_statistics_csv(&storage, MonthKey::new(2025, 5), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Balance,-10"));
        assert!(text.contains("Expense Ratio (%),0.00"));
    }
}
