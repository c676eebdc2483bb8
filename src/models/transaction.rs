//! Transaction model
//!
//! The ledger entry type. The on-disk shape matches the historical file
//! format: `amount` as a bare integer, `type` as a capitalized variant name,
//! and `date` kept verbatim as the string the user entered (month matching
//! operates on that raw string, so it is never parsed into a calendar type).
//! Rows persisted before ids existed deserialize with a fresh one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Amount, TransactionId};

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "Income"),
            TransactionKind::Expense => write!(f, "Expense"),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable identifier, assigned at creation
    #[serde(default)]
    pub id: TransactionId,

    /// Whole-unit amount, always non-negative
    pub amount: Amount,

    /// Category label, e.g. "Food"
    pub category: String,

    /// Date string as entered, "YYYY-MM-DD" by convention
    pub date: String,

    /// Income or Expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        amount: Amount,
        category: impl Into<String>,
        date: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            category: category.into(),
            date: date.into(),
            kind,
        }
    }

    /// Check if this is an income entry
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense entry
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_id() {
        let a = Transaction::new(
            Amount::new(100),
            "Food",
            "2025-01-15",
            TransactionKind::Expense,
        );
        let b = Transaction::new(
            Amount::new(100),
            "Food",
            "2025-01-15",
            TransactionKind::Expense,
        );
        assert_ne!(a.id, b.id);
        assert!(a.is_expense());
        assert!(!a.is_income());
    }

    #[test]
    fn test_serialization_uses_legacy_keys() {
        let txn = Transaction::new(
            Amount::new(500),
            "Salary",
            "2025-02-01",
            TransactionKind::Income,
        );
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"type\":\"Income\""));
        assert!(json.contains("\"amount\":500"));
        assert!(!json.contains("\"kind\""));
    }

    #[test]
    fn test_deserializes_rows_without_id() {
        let json = r#"{"amount": 120, "category": "Food", "date": "2025-01-15", "type": "Expense"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.amount, Amount::new(120));
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.date, "2025-01-15");
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert!(!txn.id.as_uuid().is_nil());
    }

    #[test]
    fn test_round_trip() {
        let txn = Transaction::new(
            Amount::new(75),
            "Entertainment",
            "2025-03-09",
            TransactionKind::Expense,
        );
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TransactionKind::Income.to_string(), "Income");
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
    }
}
