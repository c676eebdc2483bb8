//! Ledger repository for JSON storage
//!
//! Manages loading and saving the transaction list to transactions.json.
//! The on-disk format is a bare JSON array in insertion order; ordinal
//! positions are meaningful and deletion works on them.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Transaction;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for the ordered transaction ledger
pub struct LedgerRepository {
    path: PathBuf,
    entries: RwLock<Vec<Transaction>>,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Load the ledger from disk
    ///
    /// A missing or malformed file yields an empty ledger.
    pub fn load(&self) -> BudgetResult<()> {
        let from_disk: Vec<Transaction> = read_json_or_default(&self.path);

        let mut entries = self
            .entries
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *entries = from_disk;
        Ok(())
    }

    /// Save the full ledger to disk, overwriting the file
    pub fn save(&self) -> BudgetResult<()> {
        let entries = self
            .entries
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*entries)
    }

    /// Append a transaction and persist
    pub fn append(&self, transaction: Transaction) -> BudgetResult<()> {
        {
            let mut entries = self.entries.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            entries.push(transaction);
        }
        self.save()
    }

    /// Remove entries at the given ordinal positions and persist
    ///
    /// Indices are deduplicated and removed highest-first so lower positions
    /// never shift under the removal. Out-of-range indices are ignored.
    /// Returns the number of entries removed.
    pub fn remove_at(&self, indices: &[usize]) -> BudgetResult<usize> {
        let removed = {
            let mut entries = self.entries.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let mut ordered: Vec<usize> = indices.to_vec();
            ordered.sort_unstable_by(|a, b| b.cmp(a));
            ordered.dedup();

            let mut removed = 0;
            for idx in ordered {
                if idx < entries.len() {
                    entries.remove(idx);
                    removed += 1;
                }
            }
            removed
        };

        self.save()?;
        Ok(removed)
    }

    /// Get a snapshot of all entries in insertion order
    pub fn all(&self) -> BudgetResult<Vec<Transaction>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.clone())
    }

    /// Number of entries in the ledger
    pub fn len(&self) -> BudgetResult<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.len())
    }

    /// Check whether the ledger is empty
    pub fn is_empty(&self) -> BudgetResult<bool> {
        Ok(self.len()? == 0)
    }
}
