//! Per-category monthly expense breakdown
//!
//! Drives the proportional chart: expense totals grouped by category for one
//! month, with categories ordered by first appearance in the ledger and
//! zero-expense categories omitted.

use crate::error::BudgetResult;
use crate::models::{Amount, MonthKey};
use crate::storage::Storage;

/// One category's share of a month's expenses
#[derive(Debug, Clone)]
pub struct CategoryExpense {
    /// Category name
    pub category: String,
    /// Expense total for the month
    pub amount: Amount,
    /// Percentage of the month's expense total
    pub percentage: f64,
}

/// Expense-by-category breakdown for one month
#[derive(Debug, Clone)]
pub struct MonthlyBreakdown {
    /// The month covered
    pub month: MonthKey,
    /// Non-zero categories, in first-appearance order
    pub entries: Vec<CategoryExpense>,
    /// Expense total across all categories
    pub total_expense: Amount,
}

impl MonthlyBreakdown {
    /// Generate the breakdown for a month, using the date-substring rule
    pub fn generate(storage: &Storage, month: MonthKey) -> BudgetResult<Self> {
        let key = month.to_string();
        let mut entries: Vec<CategoryExpense> = Vec::new();
        let mut total_expense = Amount::zero();

        for txn in storage.ledger.all()? {
            if !txn.is_expense() || !txn.date.contains(&key) {
                continue;
            }

            total_expense += txn.amount;
            match entries.iter_mut().find(|e| e.category == txn.category) {
                Some(entry) => entry.amount += txn.amount,
                None => entries.push(CategoryExpense {
                    category: txn.category,
                    amount: txn.amount,
                    percentage: 0.0,
                }),
            }
        }

        for entry in &mut entries {
            entry.percentage =
                entry.amount.units() as f64 / total_expense.units() as f64 * 100.0;
        }

        Ok(Self {
            month,
            entries,
            total_expense,
        })
    }

    /// Check whether the month had any expenses at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the chart rows for terminal output
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Expense by Category - {}\n", self.month));
        output.push_str(&"=".repeat(56));
        output.push('\n');

        if self.is_empty() {
            output.push_str(&format!("No expense data for {}.\n", self.month));
            return output;
        }

        for entry in &self.entries {
            let bar_len = (entry.percentage / 4.0).round() as usize;
            output.push_str(&format!(
                "{:<16} {:>10} {:>7.2}%  {}\n",
                entry.category,
                entry.amount.to_string(),
                entry.percentage,
                "#".repeat(bar_len)
            ));
        }

        output.push_str(&format!("{:<16} {:>10}\n", "Total", self.total_expense.to_string()));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use crate::models::{Transaction, TransactionKind};
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
    fn test_groups_by_category_and_omits_other_months() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        add(&storage, 30, "Food", "2025-01-02", TransactionKind::Expense);
        add(&storage, 70, "Food", "2025-01-20", TransactionKind::Expense);
        add(&storage, 100, "Transportation", "2025-01-05", TransactionKind::Expense);
        add(&storage, 55, "Food", "2025-02-01", TransactionKind::Expense);
        add(&storage, 900, "Salary", "2025-01-01", TransactionKind::Income);

        let breakdown = MonthlyBreakdown::generate(&storage, MonthKey::new(2025, 1)).unwrap();
        assert_eq!(breakdown.total_expense, Amount::new(200));
        assert_eq!(breakdown.entries.len(), 2);

        // First-appearance order: Food was seen before Transportation.
        assert_eq!(breakdown.entries[0].category, "Food");
        assert_eq!(breakdown.entries[0].amount, Amount::new(100));
        assert!((breakdown.entries[0].percentage - 50.0).abs() < 1e-9);
        assert_eq!(breakdown.entries[1].category, "Transportation");
        assert!((breakdown.entries[1].percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_expense_categories_are_absent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        add(&storage, 10, "Food", "2025-03-01", TransactionKind::Expense);

        let breakdown = MonthlyBreakdown::generate(&storage, MonthKey::new(2025, 3)).unwrap();
        let names: Vec<&str> = breakdown.entries.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(names, vec!["Food"]);
    }

    #[test]
    fn test_empty_month() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        let breakdown = MonthlyBreakdown::generate(&storage, MonthKey::new(2025, 6)).unwrap();
        assert!(breakdown.is_empty());
        assert!(breakdown.format_terminal().contains("No expense data for 2025-06."));
    }

    #[test]
    fn test_percentages_have_two_decimal_rendering() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        add(&storage, 1, "Food", "2025-04-01", TransactionKind::Expense);
        add(&storage, 2, "Other", "2025-04-02", TransactionKind::Expense);

        let breakdown = MonthlyBreakdown::generate(&storage, MonthKey::new(2025, 4)).unwrap();
        let text = breakdown.format_terminal();
        assert!(text.contains("33.33%"));
        assert!(text.contains("66.67%"));
    }
}
