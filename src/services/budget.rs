//! Budget accounting service
//!
//! Month-to-date sums and limit administration. The month matching rule is
//! a substring test against the raw date string: an entry counts for a month
//! when its date contains the "YYYY-MM" rendering anywhere, not only as a
//! calendar prefix. That is the historical behavior and reports, limit
//! checks, and the chart all share it.

use tracing::debug;

use crate::error::BudgetResult;
use crate::models::{Amount, MonthKey};
use crate::storage::Storage;

/// Service for budget limit accounting
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Sum of expense amounts for a category within a month
    ///
    /// Category comparison is exact; month comparison is the substring rule.
    pub fn month_to_date_expense(&self, category: &str, month: MonthKey) -> BudgetResult<Amount> {
        let key = month.to_string();
        let total = self
            .storage
            .ledger
            .all()?
            .iter()
            .filter(|t| t.is_expense() && t.category == category && t.date.contains(&key))
            .map(|t| t.amount)
            .sum();
        Ok(total)
    }

    /// Current limit for a category (0 means no limit)
    pub fn limit_for(&self, category: &str) -> BudgetResult<Amount> {
        self.storage.limits.get(category)
    }

    /// Overwrite a category's limit unconditionally and persist
    pub fn set_limit(&self, category: &str, amount: Amount) -> BudgetResult<()> {
        self.storage.limits.set(category, amount)?;
        debug!(category, limit = amount.units(), "limit set");
        Ok(())
    }

    /// Reset a category's limit to 0 and persist
    ///
    /// Confirmation gating happens in the presentation layer.
    pub fn reset_limit(&self, category: &str) -> BudgetResult<()> {
        self.storage.limits.set(category, Amount::zero())?;
        debug!(category, "limit reset");
        Ok(())
    }
}
