use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use outlay::cli::{
    handle_add, handle_budget_command, handle_delete, handle_edit, handle_export_command,
    handle_list, handle_report_command, AddArgs, BudgetCommands, EditArgs, ListArgs,
    ReportCommands,
};
use outlay::config::{paths::OutlayPaths, settings::Settings};
use outlay::storage::Storage;

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Command-line personal expense tracker",
    long_about = "outlay records day-to-day expenses, lets you browse and filter \
                  them, breaks spending down by category and by day, and tracks \
                  per-category budgets."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// Edit an existing expense (unset fields are kept)
    Edit(EditArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense id (full or abbreviated, as shown by `outlay list`)
        id: String,
    },

    /// List expenses with optional filters
    #[command(alias = "ls")]
    List(ListArgs),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export all expenses as CSV
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = OutlayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_or_recover()?;

    if !paths.is_initialized() {
        settings.save(&paths)?;
    }

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&storage, &settings, args)?,
        Some(Commands::Edit(args)) => handle_edit(&storage, &settings, args)?,
        Some(Commands::Delete { id }) => handle_delete(&storage, &id)?,
        Some(Commands::List(args)) => handle_list(&storage, &settings, args)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export { output }) => handle_export_command(&storage, output)?,
        Some(Commands::Config) => {
            println!("outlay configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Trend window days: {}", settings.trend_window_days);
        }
        None => {
            println!("outlay - command-line expense tracker");
            println!();
            println!("Run 'outlay --help' for usage information.");
            println!("Run 'outlay add 12.50 \"Lunch\" --category food' to record an expense.");
        }
    }

    Ok(())
}
