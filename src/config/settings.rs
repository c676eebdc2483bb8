//! User settings for budgetbook
//!
//! A small hand-editable JSON file next to the data files. The category list
//! lives here: it drives the entry forms, the limit table, and the seeding of
//! `budget_limits.json`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// User settings for budgetbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Known categories, in display order
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_categories() -> Vec<String> {
    ["Salary", "Food", "Transportation", "Entertainment", "Other"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            categories: default_categories(),
        }
    }
}

impl Settings {
    /// Check whether a category is one of the known set
    pub fn knows_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Load settings from disk, writing defaults on first run
    ///
    /// A malformed file is left untouched and defaults are used for the
    /// session.
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            match serde_json::from_str(&contents) {
                Ok(settings) => Ok(settings),
                Err(e) => {
                    warn!(path = %settings_path.display(), error = %e, "settings file unparsable, using defaults");
                    Ok(Settings::default())
                }
            }
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_base_dir()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Json(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
