//! Budget limit CLI commands
//!
//! Implements CLI commands for setting, inspecting, and resetting monthly
//! budget limits.

use clap::Subcommand;

use crate::display::format_limits_table;
use crate::error::BudgetResult;
use crate::models::MonthKey;
use crate::reports::LimitOverview;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::transaction::{parse_amount, resolve_category};

/// Budget limit subcommands
#[derive(Subcommand)]
pub enum LimitCommands {
    /// Set the monthly budget limit for a category
    Set {
        /// Category name
        category: String,
        /// Limit in whole currency units ("0" removes the limit)
        amount: String,
    },

    /// Show all limits with this month's spending
    Show,

    /// Remove the limit for a category
    Reset {
        /// Category name
        category: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a budget limit command
pub fn handle_limit_command(storage: &Storage, cmd: LimitCommands) -> BudgetResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        LimitCommands::Set { category, amount } => {
            let category = resolve_category(storage, &category)?;
            let amount = parse_amount(&amount)?;

            service.set_limit(&category, amount)?;
            println!("Budget limit set for {}: {}", category, amount);
        }

        LimitCommands::Show => {
            let overview = LimitOverview::generate(storage, MonthKey::current())?;
            print!("{}", format_limits_table(&overview));
        }

        LimitCommands::Reset { category, yes } => {
            let category = resolve_category(storage, &category)?;

            if !yes {
                print!(
                    "Are you sure you want to reset budget for {}? (yes/no): ",
                    category
                );
                std::io::Write::flush(&mut std::io::stdout())?;

                let mut confirm = String::new();
                std::io::stdin().read_line(&mut confirm)?;

                if confirm.trim().to_lowercase() != "yes" {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            service.reset_limit(&category)?;
            println!("Budget for {} has been reset.", category);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use crate::models::Amount;
    use tempfile::TempDir;

    fn storage(temp_dir: &TempDir) -> Storage {
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        storage
    }

    #[test]
    fn test_set_command_persists_limit() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        handle_limit_command(
            &storage,
            LimitCommands::Set {
                category: "Food".to_string(),
                amount: "250".to_string(),
            },
        )
        .unwrap();

        assert_eq!(
            BudgetService::new(&storage).limit_for("Food").unwrap(),
            Amount::new(250)
        );
    }

    #[test]
    fn test_reset_with_yes_flag_clears_limit() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        let service = BudgetService::new(&storage);
        service.set_limit("Food", Amount::new(250)).unwrap();

        handle_limit_command(
            &storage,
            LimitCommands::Reset {
                category: "Food".to_string(),
                yes: true,
            },
        )
        .unwrap();

        assert!(service.limit_for("Food").unwrap().is_zero());
    }

    #[test]
    fn test_set_rejects_unknown_category() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        let result = handle_limit_command(
            &storage,
            LimitCommands::Set {
                category: "Gadgets".to_string(),
                amount: "100".to_string(),
            },
        );
        assert!(result.is_err());
    }
}
