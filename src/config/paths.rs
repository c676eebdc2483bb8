//! Path management for budgetbook
//!
//! Data files live in the current working directory, next to where the tool
//! is run, matching the historical file layout.
//!
//! ## Path Resolution Order
//!
//! 1. Explicit directory (the `--data-dir` flag)
//! 2. `BUDGETBOOK_DATA_DIR` environment variable (if set)
//! 3. Current working directory

use std::path::{Path, PathBuf};

use crate::error::BudgetError;

/// Manages all paths used by budgetbook
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Directory holding the data files
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve the data directory
    ///
    /// `override_dir` wins when given; otherwise `BUDGETBOOK_DATA_DIR` is
    /// consulted, and the working directory is the default.
    pub fn resolve(override_dir: Option<PathBuf>) -> Self {
        let base_dir = override_dir
            .or_else(|| std::env::var("BUDGETBOOK_DATA_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        Self { base_dir }
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the data directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.base_dir.join("transactions.json")
    }

    /// Get the path to budget_limits.json
    pub fn limits_file(&self) -> PathBuf {
        self.base_dir.join("budget_limits.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("budgetbook.json")
    }

    /// Ensure the data directory exists
    ///
    /// A no-op for the working-directory default; matters when `--data-dir`
    /// or the environment points somewhere that has not been created yet.
    pub fn ensure_base_dir(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("transactions.json")
        );
        assert_eq!(
            paths.limits_file(),
            temp_dir.path().join("budget_limits.json")
        );
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("budgetbook.json")
        );
    }

    #[test]
    fn test_explicit_override_beats_env() {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("BUDGETBOOK_DATA_DIR", "/elsewhere");

        let paths = BudgetPaths::resolve(Some(temp_dir.path().to_path_buf()));
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("BUDGETBOOK_DATA_DIR");
    }

    #[test]
    fn test_defaults_to_working_directory() {
        // Another test in this binary briefly sets the variable; skip if so.
        if env::var("BUDGETBOOK_DATA_DIR").is_err() {
            let paths = BudgetPaths::resolve(None);
            assert_eq!(paths.base_dir(), Path::new("."));
        }
    }

    #[test]
    fn test_ensure_base_dir_creates_missing() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("deep").join("dir");
        let paths = BudgetPaths::with_base_dir(nested.clone());

        paths.ensure_base_dir().unwrap();
        assert!(nested.exists());
    }
}
