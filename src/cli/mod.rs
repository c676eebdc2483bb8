//! Command-line interface
//!
//! Subcommand definitions and handlers for the non-interactive surface.
//! Each submodule owns one command family and exposes a `handle_*_command`
//! entry point that takes loaded storage.

pub mod budget;
pub mod export;
pub mod report;
pub mod transaction;

pub use budget::{handle_limit_command, LimitCommands};
pub use export::handle_export_command;
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
