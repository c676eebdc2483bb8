//! Transaction service
//!
//! Recording and deleting ledger entries. Expense recording consults the
//! category's monthly limit before appending: the check always runs against
//! the wall-clock current month, never the month of the entry's own date,
//! so back-dated entries are measured against today's spending.

use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, MonthKey, Transaction, TransactionKind};
use crate::storage::Storage;

use super::BudgetService;

/// Service for recording and deleting transactions
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an income entry; no limit logic applies
    pub fn record_income(
        &self,
        amount: Amount,
        category: &str,
        date: &str,
    ) -> BudgetResult<Transaction> {
        let txn = Transaction::new(amount, category, date, TransactionKind::Income);
        self.storage.ledger.append(txn.clone())?;
        debug!(%amount, category, date, "income recorded");
        Ok(txn)
    }

    /// Record an expense entry, enforcing the category's monthly limit
    ///
    /// With a limit L > 0 and month-to-date spending S, an amount A is
    /// rejected when S + A > L; reaching the limit exactly is allowed.
    /// A limit of 0 means no limit.
    pub fn record_expense(
        &self,
        amount: Amount,
        category: &str,
        date: &str,
    ) -> BudgetResult<Transaction> {
        let budget = BudgetService::new(self.storage);
        let limit = budget.limit_for(category)?;

        if !limit.is_zero() {
            let spent = budget.month_to_date_expense(category, MonthKey::current())?;
            if spent + amount > limit {
                return Err(BudgetError::LimitExceeded {
                    category: category.to_string(),
                    limit,
                    spent,
                    attempted: amount,
                });
            }
        }

        let txn = Transaction::new(amount, category, date, TransactionKind::Expense);
        self.storage.ledger.append(txn.clone())?;
        debug!(%amount, category, date, "expense recorded");
        Ok(txn)
    }

    /// Delete entries by ordinal position; returns how many were removed
    pub fn delete_at(&self, indices: &[usize]) -> BudgetResult<usize> {
        let removed = self.storage.ledger.remove_at(indices)?;
        debug!(removed, "transactions deleted");
        Ok(removed)
    }

    /// Full ledger in insertion order
    pub fn history(&self) -> BudgetResult<Vec<Transaction>> {
        self.storage.ledger.all()
    }
}
