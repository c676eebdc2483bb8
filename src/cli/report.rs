//! CLI commands for reports
//!
//! Provides commands for the statistics summary and the monthly expense
//! analysis.

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::models::MonthKey;
use crate::reports::{MonthlyBreakdown, TotalsReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show income, expense, and balance totals
    Stats {
        /// Restrict to one month (YYYY-MM); defaults to all time
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the expense breakdown by category for a month
    Analysis {
        /// Month to analyze (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> BudgetResult<()> {
    match cmd {
        ReportCommands::Stats { month } => {
            let report = match month {
                Some(raw) => TotalsReport::generate_for_month(storage, parse_month(&raw)?)?,
                None => TotalsReport::generate(storage)?,
            };
            println!("{}", report.format_terminal());
        }

        ReportCommands::Analysis { month } => {
            let month = match month {
                Some(raw) => parse_month(&raw)?,
                None => MonthKey::current(),
            };
            let report = MonthlyBreakdown::generate(storage, month)?;
            println!("{}", report.format_terminal());
        }
    }

    Ok(())
}

fn parse_month(raw: &str) -> BudgetResult<MonthKey> {
    MonthKey::parse(raw).map_err(|e| {
        BudgetError::Validation(format!(
            "Invalid month format: {}. Use YYYY-MM (e.g., 2025-01)",
            e
        ))
    })
}
