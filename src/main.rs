use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budgetbook::cli::{
    handle_export_command, handle_limit_command, handle_report_command,
    handle_transaction_command, LimitCommands, ReportCommands, TransactionCommands,
};
use budgetbook::config::BudgetPaths;
use budgetbook::storage::Storage;
use budgetbook::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "budgetbook",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "Budget Book is a terminal-based personal finance tracker. It keeps \
                  a ledger of income and expense entries, warns when a category's \
                  monthly budget limit is crossed, and reports statistics from the \
                  command line or an interactive TUI."
)]
struct Cli {
    /// Directory holding the data files (defaults to the working directory)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Budget limit commands
    #[command(subcommand)]
    Limit(LimitCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Export the ledger and statistics as CSV files
    Export {
        /// Directory to write the CSV files into
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize storage
    let paths = BudgetPaths::resolve(cli.data_dir);
    let storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) | None => {
            run_tui(&storage)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, cmd)?;
        }
        Some(Commands::Limit(cmd)) => {
            handle_limit_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Export { dir }) => {
            handle_export_command(&storage, dir)?;
        }
    }

    Ok(())
}
