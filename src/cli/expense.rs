//! Expense CLI commands
//!
//! Implements add/edit/delete/list, bridging clap argument parsing with the
//! expense service. Amounts and dates arrive as strings and are parsed here,
//! at the boundary, so the core only ever sees validated values.

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::{OutlayError, OutlayResult};
use crate::models::{Category, ExpenseUpdate, Money};
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService, SortSpec};
use crate::storage::Storage;

/// Arguments for `outlay add`
#[derive(Args)]
pub struct AddArgs {
    /// Amount spent (e.g. "12.50")
    pub amount: String,

    /// What the money was spent on
    pub description: String,

    /// Spending category
    #[arg(short, long, value_enum, default_value = "other")]
    pub category: Category,

    /// Expense date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `outlay edit`
#[derive(Args)]
pub struct EditArgs {
    /// Expense id (full or abbreviated, as shown by `outlay list`)
    pub id: String,

    /// New amount
    #[arg(short, long)]
    pub amount: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New category
    #[arg(short, long, value_enum)]
    pub category: Option<Category>,

    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `outlay list`
#[derive(Args)]
pub struct ListArgs {
    /// Show only this category
    #[arg(short, long, value_enum)]
    pub category: Option<Category>,

    /// Show only descriptions containing this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show only expenses on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Show only expenses on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Sort order: date-asc, date-desc, amount-asc or amount-desc
    #[arg(long, default_value = "date-desc")]
    pub sort: String,
}

/// Handle `outlay add`
pub fn handle_add(storage: &Storage, settings: &Settings, args: AddArgs) -> OutlayResult<()> {
    let service = ExpenseService::new(storage);

    let expense = service.create(CreateExpenseInput {
        amount: parse_amount(&args.amount)?,
        description: args.description,
        category: args.category,
        date: args.date.as_deref().map(parse_date).transpose()?,
    })?;

    println!(
        "Recorded {} {}{} ({}, {})",
        expense.id, settings.currency_symbol, expense.amount, expense.category, expense.date
    );
    Ok(())
}

/// Handle `outlay edit`
pub fn handle_edit(storage: &Storage, settings: &Settings, args: EditArgs) -> OutlayResult<()> {
    let service = ExpenseService::new(storage);

    let expense = service
        .find(&args.id)?
        .ok_or_else(|| OutlayError::expense_not_found(&args.id))?;

    let patch = ExpenseUpdate {
        amount: args.amount.as_deref().map(parse_amount).transpose()?,
        description: args.description,
        category: args.category,
        date: args.date.as_deref().map(parse_date).transpose()?,
    };

    let updated = service.update(expense.id, &patch)?;
    println!(
        "Updated {}: {} {}{} ({}, {})",
        updated.id,
        updated.description,
        settings.currency_symbol,
        updated.amount,
        updated.category,
        updated.date
    );
    Ok(())
}

/// Handle `outlay delete`
pub fn handle_delete(storage: &Storage, id: &str) -> OutlayResult<()> {
    let service = ExpenseService::new(storage);

    let expense = service
        .find(id)?
        .ok_or_else(|| OutlayError::expense_not_found(id))?;

    service.delete(expense.id)?;
    println!("Deleted {} ({})", expense.id, expense.description);
    Ok(())
}

/// Handle `outlay list`
pub fn handle_list(storage: &Storage, settings: &Settings, args: ListArgs) -> OutlayResult<()> {
    let service = ExpenseService::new(storage);

    let filter = ExpenseFilter {
        category: args.category,
        search: args.search,
        date_from: args.from.as_deref().map(parse_date).transpose()?,
        date_to: args.to.as_deref().map(parse_date).transpose()?,
        sort: Some(args.sort.parse::<SortSpec>()?),
    };

    let expenses = service.list(&filter)?;
    print!("{}", format_expense_list(&expenses, &settings.currency_symbol));
    Ok(())
}

/// Parse an amount string at the CLI boundary
pub(crate) fn parse_amount(s: &str) -> OutlayResult<Money> {
    Money::parse(s).map_err(|e| OutlayError::InvalidRecord(e.to_string()))
}

/// Parse a YYYY-MM-DD date string at the CLI boundary
pub(crate) fn parse_date(s: &str) -> OutlayResult<NaiveDate> {
    s.parse()
        .map_err(|_| OutlayError::InvalidRecord(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}
