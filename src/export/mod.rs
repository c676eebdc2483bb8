//! Export module for budgetbook
//!
//! Spreadsheet-compatible CSV export of the ledger plus a statistics
//! summary, written on explicit user request and never read back.

pub mod csv;

pub use csv::{export_statistics_csv, export_transactions_csv};

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};
use crate::models::MonthKey;
use crate::storage::Storage;

/// File name for the ledger dump
pub const TRANSACTIONS_EXPORT_FILE: &str = "budget_data_transactions.csv";

/// File name for the statistics summary
pub const STATISTICS_EXPORT_FILE: &str = "budget_data_statistics.csv";

/// Write both export files into a directory
///
/// The statistics summary always covers the wall-clock current month.
/// Returns the paths written, transactions first.
pub fn export_workbook(storage: &Storage, dir: &Path) -> BudgetResult<Vec<PathBuf>> {
    let transactions_path = dir.join(TRANSACTIONS_EXPORT_FILE);
    let statistics_path = dir.join(STATISTICS_EXPORT_FILE);

    let file = File::create(&transactions_path).map_err(|e| create_failed(&transactions_path, e))?;
    export_transactions_csv(storage, BufWriter::new(file))?;

    let file = File::create(&statistics_path).map_err(|e| create_failed(&statistics_path, e))?;
    export_statistics_csv(storage, MonthKey::current(), BufWriter::new(file))?;

    Ok(vec![transactions_path, statistics_path])
}

fn create_failed(path: &Path, err: std::io::Error) -> BudgetError {
    BudgetError::Export(format!("Failed to create file {}: {}", path.display(), err))
}
