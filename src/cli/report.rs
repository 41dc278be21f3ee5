//! Report CLI commands
//!
//! Terminal stand-ins for the original dashboard: headline summary, category
//! breakdown, and daily trend. Each accepts an optional date range that is
//! applied before aggregation.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_breakdown, format_daily_totals, format_summary};
use crate::error::OutlayResult;
use crate::models::Expense;
use crate::reports::{totals_by_category, trailing_daily_totals, SpendingSummary};
use crate::services::ExpenseFilter;
use crate::storage::Storage;

use super::expense::parse_date;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Totals, count and daily average
    Summary {
        /// Include only expenses on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Include only expenses on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Spending per category with share of total
    Categories {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },

    /// Spending per day over a trailing window
    Daily {
        /// Number of most recent distinct dates to show
        #[arg(long)]
        days: Option<usize>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> OutlayResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        ReportCommands::Summary { from, to } => {
            let records = in_range(storage, from.as_deref(), to.as_deref())?;
            let summary = SpendingSummary::compute(&records);
            print!("{}", format_summary(&summary, symbol));
        }

        ReportCommands::Categories { from, to } => {
            let records = in_range(storage, from.as_deref(), to.as_deref())?;
            let totals = totals_by_category(&records);
            print!("{}", format_category_breakdown(&totals, symbol));
        }

        ReportCommands::Daily { days, from, to } => {
            let records = in_range(storage, from.as_deref(), to.as_deref())?;
            let window = days.unwrap_or(settings.trend_window_days);
            let totals = trailing_daily_totals(&records, window);
            print!("{}", format_daily_totals(&totals, symbol));
        }
    }

    Ok(())
}

/// Load the expense snapshot restricted to an optional date range
fn in_range(
    storage: &Storage,
    from: Option<&str>,
    to: Option<&str>,
) -> OutlayResult<Vec<Expense>> {
    let filter = ExpenseFilter {
        date_from: from.map(parse_date).transpose()?,
        date_to: to.map(parse_date).transpose()?,
        ..Default::default()
    };

    let records = storage.expenses.get_all()?;
    Ok(filter.apply(&records))
}
