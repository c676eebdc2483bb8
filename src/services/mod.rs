//! Service layer for budgetbook
//!
//! The service layer provides business logic on top of the storage layer:
//! limit accounting and transaction recording.

pub mod budget;
pub mod transaction;

pub use budget::BudgetService;
pub use transaction::TransactionService;
