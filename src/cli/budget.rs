//! Budget CLI commands
//!
//! Implements budget threshold management and the status overview. Status
//! always evaluates against the full expense history, not a filtered view.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_statuses;
use crate::error::OutlayResult;
use crate::models::Category;
use crate::reports::{totals_by_category, BudgetStatus};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::expense::parse_amount;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the spending ceiling for a category (0 removes it)
    Set {
        /// Category to budget
        #[arg(value_enum)]
        category: Category,
        /// Threshold amount (e.g. "100" or "100.00")
        amount: String,
    },

    /// Remove the spending ceiling for a category
    Remove {
        /// Category to unbudget
        #[arg(value_enum)]
        category: Category,
    },

    /// List configured budgets
    List,

    /// Show spending against each configured budget
    Status,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> OutlayResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let amount = parse_amount(&amount)?;
            service.set(category, amount)?;

            if amount.is_positive() {
                println!(
                    "Budget for {} set to {}{}",
                    category, settings.currency_symbol, amount
                );
            } else {
                println!("Budget for {} removed", category);
            }
        }

        BudgetCommands::Remove { category } => {
            service.remove(category)?;
            println!("Budget for {} removed", category);
        }

        BudgetCommands::List => {
            let book = service.book()?;
            if book.is_empty() {
                println!("No budgets configured.");
            } else {
                for (category, amount) in book.iter() {
                    println!(
                        "{:<15} {}{}",
                        category.to_string(),
                        settings.currency_symbol,
                        amount
                    );
                }
            }
        }

        BudgetCommands::Status => {
            let records = storage.expenses.get_all()?;
            let spending = totals_by_category(&records);
            let statuses = BudgetStatus::evaluate(&spending, &service.book()?);

            print!(
                "{}",
                format_budget_statuses(&statuses, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
