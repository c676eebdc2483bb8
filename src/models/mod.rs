//! Core data models for budgetbook
//!
//! This module contains the data structures that represent the tracking
//! domain: ledger transactions, amounts, identifiers, and month keys.

pub mod amount;
pub mod ids;
pub mod month;
pub mod transaction;

pub use amount::{format_signed, Amount, AmountParseError};
pub use ids::TransactionId;
pub use month::{MonthKey, MonthParseError};
pub use transaction::{Transaction, TransactionKind};
