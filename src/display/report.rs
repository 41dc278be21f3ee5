//! Report display formatting
//!
//! Terminal renditions of the summary, breakdown, and budget reports. The
//! category and daily breakdowns stand in for the original charts; budgets
//! get a text progress bar.

use chrono::NaiveDate;

use crate::models::{Category, Money};
use crate::reports::{BudgetHealth, BudgetStatus, SpendingSummary};

const BAR_WIDTH: usize = 24;

/// Format the headline summary
pub fn format_summary(summary: &SpendingSummary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Total spent:    {}{}\n", symbol, summary.total));
    output.push_str(&format!("Expenses:       {}\n", summary.count));
    output.push_str(&format!(
        "Daily average:  {}{}\n",
        symbol, summary.average_daily
    ));
    output
}

/// Format category totals with share-of-total percentages
pub fn format_category_breakdown(totals: &[(Category, Money)], symbol: &str) -> String {
    if totals.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let grand_total: Money = totals.iter().map(|(_, m)| *m).sum();

    let mut output = String::new();
    output.push_str(&format!(
        "{:<15} {:>12} {:>7}\n",
        "Category", "Amount", "%"
    ));
    output.push_str(&"-".repeat(36));
    output.push('\n');

    for (category, amount) in totals {
        output.push_str(&format!(
            "{:<15} {:>12} {:>6.1}%\n",
            category.to_string(),
            format!("{}{}", symbol, amount),
            amount.percent_of(grand_total)
        ));
    }

    output.push_str(&"-".repeat(36));
    output.push('\n');
    output.push_str(&format!(
        "{:<15} {:>12}\n",
        "Total",
        format!("{}{}", symbol, grand_total)
    ));

    output
}

/// Format daily totals, one row per date
pub fn format_daily_totals(totals: &[(NaiveDate, Money)], symbol: &str) -> String {
    if totals.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<10} {:>12}\n", "Date", "Amount"));
    output.push_str(&"-".repeat(23));
    output.push('\n');

    for (date, amount) in totals {
        output.push_str(&format!(
            "{:<10} {:>12}\n",
            date.format("%Y-%m-%d").to_string(),
            format!("{}{}", symbol, amount)
        ));
    }

    output
}

/// Format budget statuses with progress bars
pub fn format_budget_statuses(statuses: &[BudgetStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No budgets configured. Set one with `outlay budget set <category> <amount>`.\n"
            .to_string();
    }

    let mut output = String::new();

    for status in statuses {
        let marker = match status.health {
            BudgetHealth::Ok => " ",
            BudgetHealth::Warning => "!",
            BudgetHealth::Exceeded => "✗",
        };

        output.push_str(&format!(
            "{} {:<15} {} {:>5.1}%  {}{} / {}{}  (remaining {}{})\n",
            marker,
            status.category.to_string(),
            progress_bar(status.percentage),
            status.percentage,
            symbol,
            status.spent_amount,
            symbol,
            status.budget_amount,
            symbol,
            status.remaining_amount
        ));
    }

    output
}

/// Render a fixed-width progress bar, capped at full
fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0 * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
