//! Income/expense totals report
//!
//! All-time sums for the statistics view, plus a month-filtered variant
//! backing the spreadsheet export's statistics sheet.

use crate::error::BudgetResult;
use crate::models::{format_signed, Amount, MonthKey, Transaction};
use crate::storage::Storage;

/// Income, expense, and balance over a set of entries
#[derive(Debug, Clone, Default)]
pub struct TotalsReport {
    /// Sum of all income amounts
    pub total_income: Amount,
    /// Sum of all expense amounts
    pub total_expense: Amount,
    /// income - expense; can go negative
    pub balance: i64,
    /// Number of entries considered
    pub transaction_count: usize,
}

impl TotalsReport {
    /// Generate totals over the full ledger (no month filter)
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        let entries = storage.ledger.all()?;
        Ok(Self::fold(&entries))
    }

    /// Generate totals over one month, using the date-substring rule
    pub fn generate_for_month(storage: &Storage, month: MonthKey) -> BudgetResult<Self> {
        let key = month.to_string();
        let entries: Vec<Transaction> = storage
            .ledger
            .all()?
            .into_iter()
            .filter(|t| t.date.contains(&key))
            .collect();
        Ok(Self::fold(&entries))
    }

    fn fold(entries: &[Transaction]) -> Self {
        let total_income: Amount = entries
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let total_expense: Amount = entries
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        Self {
            total_income,
            total_expense,
            balance: total_income.units() as i64 - total_expense.units() as i64,
            transaction_count: entries.len(),
        }
    }

    /// Expense as a percentage of income; 0 when there is no income
    pub fn expense_ratio(&self) -> f64 {
        if self.total_income.is_zero() {
            0.0
        } else {
            self.total_expense.units() as f64 / self.total_income.units() as f64 * 100.0
        }
    }

    /// Render the statistics lines for terminal output
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str("Statistics\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("Total Income:  {}\n", self.total_income));
        output.push_str(&format!("Total Expense: {}\n", self.total_expense));
        output.push_str(&format!("Balance:       {}\n", format_signed(self.balance)));
        output.push_str(&format!("Transactions:  {}\n", self.transaction_count));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use crate::models::TransactionKind;
    use tempfile::TempDir;

    fn storage_with(entries: &[(u64, &str, &str, TransactionKind)]) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        for (amount, category, date, kind) in entries {
            storage
                .ledger
                .append(Transaction::new(Amount::new(*amount), *category, *date, *kind))
                .unwrap();
        }
        (temp_dir, storage)
    }

    #[test]
    fn test_all_time_totals() {
        let (_guard, storage) = storage_with(&[
            (3000, "Salary", "2025-01-01", TransactionKind::Income),
            (200, "Food", "2025-01-10", TransactionKind::Expense),
            (500, "Other", "2024-06-01", TransactionKind::Income),
            (100, "Food", "2024-06-02", TransactionKind::Expense),
        ]);

        let report = TotalsReport::generate(&storage).unwrap();
        assert_eq!(report.total_income, Amount::new(3500));
        assert_eq!(report.total_expense, Amount::new(300));
        assert_eq!(report.balance, 3200);
        assert_eq!(report.transaction_count, 4);
    }

    #[test]
    fn test_balance_can_go_negative() {
        let (_guard, storage) = storage_with(&[
            (100, "Salary", "2025-01-01", TransactionKind::Income),
            (250, "Food", "2025-01-02", TransactionKind::Expense),
        ]);

        let report = TotalsReport::generate(&storage).unwrap();
        assert_eq!(report.balance, -150);
        assert!(report.format_terminal().contains("-$150"));
    }

    #[test]
    fn test_month_filter_uses_substring_rule() {
        let (_guard, storage) = storage_with(&[
            (3000, "Salary", "2025-01-01", TransactionKind::Income),
            (200, "Food", "2025-01-10", TransactionKind::Expense),
            (999, "Food", "2025-02-10", TransactionKind::Expense),
            (50, "Other", "checked 2025-01 later", TransactionKind::Expense),
        ]);

        let report = TotalsReport::generate_for_month(&storage, MonthKey::new(2025, 1)).unwrap();
        assert_eq!(report.total_income, Amount::new(3000));
        assert_eq!(report.total_expense, Amount::new(250));
        assert_eq!(report.transaction_count, 3);
    }

    #[test]
    fn test_expense_ratio() {
        let (_guard, storage) = storage_with(&[
            (1000, "Salary", "2025-01-01", TransactionKind::Income),
            (333, "Food", "2025-01-10", TransactionKind::Expense),
        ]);

        let report = TotalsReport::generate(&storage).unwrap();
        assert!((report.expense_ratio() - 33.3).abs() < 1e-9);
    }

    #[test]
    fn test_expense_ratio_zero_income() {
        let (_guard, storage) =
            storage_with(&[(333, "Food", "2025-01-10", TransactionKind::Expense)]);

        let report = TotalsReport::generate(&storage).unwrap();
        assert_eq!(report.expense_ratio(), 0.0);
    }
}
