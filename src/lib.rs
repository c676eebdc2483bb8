//! Budget Book - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the Budget Book
//! application. It keeps a ledger of income and expense entries with
//! per-category monthly budget limits, designed for terminal users who
//! prefer CLI and TUI interfaces.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, amounts, months)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Statistics, limit, and analysis reports
//! - `display`: Terminal table and chart formatting
//! - `export`: CSV workbook export
//! - `cli`: Command-line subcommands
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetbook::config::BudgetPaths;
//! use budgetbook::storage::Storage;
//!
//! let paths = BudgetPaths::resolve(None);
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::BudgetError;
