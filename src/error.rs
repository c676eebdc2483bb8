//! Custom error types for budgetbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Amount;

/// The main error type for budgetbook operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV export errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Export file errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// An expense would push a category past its monthly limit
    #[error("Budget limit exceeded! {category}: {limit} limit, already spent {spent}, trying to add {attempted}")]
    LimitExceeded {
        category: String,
        limit: Amount,
        spent: Amount,
        attempted: Amount,
    },

    /// Storage errors (lock poisoning and other internal failures)
    #[error("Storage error: {0}")]
    Storage(String),
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for budgetbook operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Validation("amount must be a number".into());
        assert_eq!(
            err.to_string(),
            "Validation error: amount must be a number"
        );
    }

    #[test]
    fn test_limit_exceeded_message_carries_figures() {
        let err = BudgetError::LimitExceeded {
            category: "Food".into(),
            limit: Amount::new(100),
            spent: Amount::new(90),
            attempted: Amount::new(11),
        };
        assert_eq!(
            err.to_string(),
            "Budget limit exceeded! Food: $100 limit, already spent $90, trying to add $11"
        );
    }

    #[test]
    fn test_limit_exceeded_groups_thousands() {
        let err = BudgetError::LimitExceeded {
            category: "Transportation".into(),
            limit: Amount::new(2500),
            spent: Amount::new(1900),
            attempted: Amount::new(700),
        };
        let text = err.to_string();
        assert!(text.contains("$2,500"));
        assert!(text.contains("$1,900"));
        assert!(text.contains("$700"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
    }
}
