//! Display formatting for terminal output
//!
//! Table rendering for the CLI surface: transaction history and the budget
//! limit overview.

pub mod limits;
pub mod transaction;

pub use limits::format_limits_table;
pub use transaction::format_history_table;
