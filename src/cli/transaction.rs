//! Transaction CLI commands
//!
//! Implements CLI commands for recording income and expenses, listing
//! history, and deleting entries.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::format_history_table;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Amount;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income
    Income {
        /// Amount in whole currency units (e.g., "2500")
        amount: String,
        /// Category name
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Record an expense (checked against the monthly budget limit)
    Expense {
        /// Amount in whole currency units (e.g., "45")
        amount: String,
        /// Category name
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all recorded transactions
    History,

    /// Delete transactions by their history numbers
    Delete {
        /// Transaction numbers as shown by 'history' (1-based)
        #[arg(required = true)]
        numbers: Vec<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> BudgetResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Income {
            amount,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let category = resolve_category(storage, &category)?;
            let date = resolve_date(date)?;

            service.record_income(amount, &category, &date)?;
            println!("✓ Income recorded successfully.");
        }

        TransactionCommands::Expense {
            amount,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let category = resolve_category(storage, &category)?;
            let date = resolve_date(date)?;

            service.record_expense(amount, &category, &date)?;
            println!("✓ Expense recorded successfully.");
        }

        TransactionCommands::History => {
            let transactions = service.history()?;
            print!("{}", format_history_table(&transactions));
        }

        TransactionCommands::Delete { numbers } => {
            let count = service.history()?.len();
            let mut indices = Vec::with_capacity(numbers.len());
            for number in numbers {
                if number == 0 || number > count {
                    return Err(BudgetError::Validation(format!(
                        "No transaction numbered {}. Run 'history' to see valid numbers.",
                        number
                    )));
                }
                indices.push(number - 1);
            }

            let deleted = service.delete_at(&indices)?;
            if deleted == 0 {
                println!("Nothing to delete.");
            } else {
                println!("Transaction(s) deleted successfully.");
            }
        }
    }

    Ok(())
}

/// Parse a CLI amount argument
pub(crate) fn parse_amount(raw: &str) -> BudgetResult<Amount> {
    Amount::parse(raw)
        .map_err(|_| BudgetError::Validation("Please enter amount as a number.".to_string()))
}

/// Validate a category name against the configured category list
pub(crate) fn resolve_category(storage: &Storage, name: &str) -> BudgetResult<String> {
    if storage.settings().knows_category(name) {
        Ok(name.to_string())
    } else {
        Err(BudgetError::Validation(format!(
            "Unknown category: '{}'. Available: {}",
            name,
            storage.categories().join(", ")
        )))
    }
}

/// Parse a CLI date argument, defaulting to today
fn resolve_date(date: Option<String>) -> BudgetResult<String> {
    match date {
        Some(date_str) => {
            NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
                BudgetError::Validation(format!(
                    "Invalid date format: '{}'. Use YYYY-MM-DD",
                    date_str
                ))
            })?;
            Ok(date_str)
        }
        None => Ok(chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()),
    }
}
