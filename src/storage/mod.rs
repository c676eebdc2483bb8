//! Storage layer for budgetbook
//!
//! Provides JSON file storage with atomic whole-file rewrites. The `Storage`
//! coordinator owns both collections (ledger and limits) plus the settings,
//! and is passed by reference to the service and presentation layers.

pub mod file_io;
pub mod ledger;
pub mod limits;

pub use file_io::{read_json_or_default, write_json_atomic};
pub use ledger::LedgerRepository;
pub use limits::LimitRepository;

use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: BudgetPaths,
    settings: Settings,
    pub ledger: LedgerRepository,
    pub limits: LimitRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_base_dir()?;
        let settings = Settings::load_or_create(&paths)?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.transactions_file()),
            limits: LimitRepository::new(paths.limits_file()),
            settings,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Get the loaded settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Known categories in display order
    pub fn categories(&self) -> &[String] {
        &self.settings.categories
    }

    /// Load both collections from disk
    ///
    /// Seeds the limits file with zeros on first run.
    pub fn load_all(&self) -> BudgetResult<()> {
        self.ledger.load()?;
        self.limits.load_or_init(&self.settings.categories)?;
        Ok(())
    }
}
