//! Per-category limit overview
//!
//! For every known category: the monthly limit, month-to-date expense, and
//! remaining budget. A limit of 0 renders as the "No limit" sentinel with no
//! remaining figure.

use crate::error::BudgetResult;
use crate::models::{Amount, MonthKey};
use crate::services::BudgetService;
use crate::storage::Storage;

/// One category's limit status
#[derive(Debug, Clone)]
pub struct LimitRow {
    /// Category name
    pub category: String,
    /// Configured monthly limit (0 means no limit)
    pub limit: Amount,
    /// Month-to-date expense for the category
    pub spent: Amount,
    /// limit - spent; None when no limit is set
    pub remaining: Option<i64>,
}

impl LimitRow {
    /// Check whether this category has a limit configured
    pub fn has_limit(&self) -> bool {
        !self.limit.is_zero()
    }
}

/// Limit status for all known categories
#[derive(Debug, Clone)]
pub struct LimitOverview {
    /// The month the spent figures cover
    pub month: MonthKey,
    /// One row per known category, in configured order
    pub rows: Vec<LimitRow>,
}

impl LimitOverview {
    /// Generate the overview for a month
    pub fn generate(storage: &Storage, month: MonthKey) -> BudgetResult<Self> {
        let budget = BudgetService::new(storage);
        let mut rows = Vec::with_capacity(storage.categories().len());

        for category in storage.categories() {
            let limit = budget.limit_for(category)?;
            let spent = budget.month_to_date_expense(category, month)?;
            let remaining = if limit.is_zero() {
                None
            } else {
                Some(limit.units() as i64 - spent.units() as i64)
            };

            rows.push(LimitRow {
                category: category.clone(),
                limit,
                spent,
                remaining,
            });
        }

        Ok(Self { month, rows })
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

    #[test]
    fn test_rows_follow_configured_category_order() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        let overview = LimitOverview::generate(&storage, MonthKey::new(2025, 1)).unwrap();
        let names: Vec<&str> = overview.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            names,
            vec!["Salary", "Food", "Transportation", "Entertainment", "Other"]
        );
    }

    #[test]
    fn test_no_limit_rows_have_no_remaining() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        let overview = LimitOverview::generate(&storage, MonthKey::new(2025, 1)).unwrap();
        assert!(overview.rows.iter().all(|r| !r.has_limit()));
        assert!(overview.rows.iter().all(|r| r.remaining.is_none()));
    }

    #[test]
    fn test_remaining_math_including_overspend() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        let budget = BudgetService::new(&storage);
        budget.set_limit("Food", Amount::new(100)).unwrap();
        budget.set_limit("Transportation", Amount::new(50)).unwrap();

        for (amount, category) in [(30u64, "Food"), (80u64, "Transportation")] {
            storage
                .ledger
                .append(Transaction::new(
                    Amount::new(amount),
                    category,
                    "2025-01-10",
                    TransactionKind::Expense,
                ))
                .unwrap();
        }

        let overview = LimitOverview::generate(&storage, MonthKey::new(2025, 1)).unwrap();
        let food = overview.rows.iter().find(|r| r.category == "Food").unwrap();
        assert_eq!(food.spent, Amount::new(30));
        assert_eq!(food.remaining, Some(70));

        // Overspent categories go negative rather than clamping.
        let transport = overview
            .rows
            .iter()
            .find(|r| r.category == "Transportation")
            .unwrap();
        assert_eq!(transport.remaining, Some(-30));
    }
}
