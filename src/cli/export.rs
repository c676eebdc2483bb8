//! CLI command for data export
//!
//! Writes the transaction ledger and statistics summary as CSV files.

use std::path::PathBuf;

use crate::error::BudgetResult;
use crate::export::export_workbook;
use crate::storage::Storage;

/// Handle the export command
pub fn handle_export_command(storage: &Storage, dir: Option<PathBuf>) -> BudgetResult<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    let written = export_workbook(storage, &dir)?;

    for path in &written {
        println!("Data exported to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_both_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        handle_export_command(&storage, Some(temp_dir.path().to_path_buf())).unwrap();

        assert!(temp_dir.path().join("budget_data_transactions.csv").exists());
        assert!(temp_dir.path().join("budget_data_statistics.csv").exists());
    }
}
