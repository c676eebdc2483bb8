//! Budget limit repository for JSON storage
//!
//! Manages the category -> monthly-limit mapping in budget_limits.json.
//! On first run (or when the file is unparsable) every known category is
//! seeded at limit 0 and the seeded mapping is written out immediately.
//! A limit of 0, or an absent entry, means "no limit".

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::warn;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Amount;

use super::file_io::write_json_atomic;

/// Repository for per-category monthly limits
pub struct LimitRepository {
    path: PathBuf,
    limits: RwLock<BTreeMap<String, Amount>>,
}

impl LimitRepository {
    /// Create a new limit repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            limits: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load the mapping, seeding defaults when the file is missing or broken
    ///
    /// A file that parses keeps exactly its own entries, even if some known
    /// categories are absent; lookups treat absent as 0.
    pub fn load_or_init(&self, categories: &[String]) -> BudgetResult<()> {
        match self.read_from_disk() {
            Some(mapping) => {
                let mut limits = self.limits.write().map_err(|e| {
                    BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
                })?;
                *limits = mapping;
                Ok(())
            }
            None => {
                {
                    let mut limits = self.limits.write().map_err(|e| {
                        BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
                    })?;
                    *limits = categories
                        .iter()
                        .map(|c| (c.clone(), Amount::zero()))
                        .collect();
                }
                self.save()
            }
        }
    }

    /// Save the full mapping to disk, overwriting the file
    pub fn save(&self) -> BudgetResult<()> {
        let limits = self
            .limits
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*limits)
    }

    /// Get the limit for a category (0 when absent)
    pub fn get(&self, category: &str) -> BudgetResult<Amount> {
        let limits = self
            .limits
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(limits.get(category).copied().unwrap_or_default())
    }

    /// Set the limit for a category and persist
    pub fn set(&self, category: &str, amount: Amount) -> BudgetResult<()> {
        {
            let mut limits = self.limits.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            limits.insert(category.to_string(), amount);
        }
        self.save()
    }

    /// Get a snapshot of the full mapping
    pub fn all(&self) -> BudgetResult<BTreeMap<String, Amount>> {
        let limits = self
            .limits
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(limits.clone())
    }

    fn read_from_disk(&self) -> Option<BTreeMap<String, Amount>> {
        if !self.path.exists() {
            return None;
        }

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to open limits, reseeding");
                return None;
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(mapping) => Some(mapping),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to parse limits, reseeding");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn categories() -> Vec<String> {
        vec!["Salary".into(), "Food".into(), "Other".into()]
    }

    #[test]
    fn test_first_run_seeds_and_persists_zeros() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget_limits.json");

        let repo = LimitRepository::new(path.clone());
        repo.load_or_init(&categories()).unwrap();

        assert!(path.exists());
        assert_eq!(repo.get("Food").unwrap(), Amount::zero());

        let on_disk: BTreeMap<String, u64> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.len(), 3);
        assert!(on_disk.values().all(|&v| v == 0));
    }

    #[test]
    fn test_malformed_file_is_reseeded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget_limits.json");
        std::fs::write(&path, "broken").unwrap();

        let repo = LimitRepository::new(path.clone());
        repo.load_or_init(&categories()).unwrap();

        assert_eq!(repo.get("Salary").unwrap(), Amount::zero());
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Salary"));
    }

    #[test]
    fn test_valid_file_loads_as_is() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget_limits.json");
        std::fs::write(&path, r#"{"Food": 250}"#).unwrap();

        let repo = LimitRepository::new(path.clone());
        repo.load_or_init(&categories()).unwrap();

        assert_eq!(repo.get("Food").unwrap(), Amount::new(250));
        // Absent categories read as 0 without being written back.
        assert_eq!(repo.get("Salary").unwrap(), Amount::zero());
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(!on_disk.contains("Salary"));
    }

    #[test]
    fn test_set_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget_limits.json");

        let repo = LimitRepository::new(path.clone());
        repo.load_or_init(&categories()).unwrap();
        repo.set("Food", Amount::new(400)).unwrap();

        let fresh = LimitRepository::new(path);
        fresh.load_or_init(&categories()).unwrap();
        assert_eq!(fresh.get("Food").unwrap(), Amount::new(400));
    }

    #[test]
    fn test_snapshot_contains_all_entries() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LimitRepository::new(temp_dir.path().join("budget_limits.json"));
        repo.load_or_init(&categories()).unwrap();
        repo.set("Other", Amount::new(50)).unwrap();

        let all = repo.all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all["Other"], Amount::new(50));
    }
}
