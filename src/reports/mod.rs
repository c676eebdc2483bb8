//! Reporting for budgetbook
//!
//! Read-only folds over the ledger: all-time totals, the monthly expense
//! breakdown behind the chart, and the per-category limit overview.

pub mod breakdown;
pub mod limits;
pub mod totals;

pub use breakdown::{CategoryExpense, MonthlyBreakdown};
pub use limits::{LimitOverview, LimitRow};
pub use totals::TotalsReport;
