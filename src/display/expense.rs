//! Expense display formatting
//!
//! Formats expense records for terminal listings.

use crate::models::Expense;

/// Format a single expense for display (listing row)
pub fn format_expense_row(expense: &Expense, symbol: &str) -> String {
    format!(
        "{} {} {:<15} {:<30} {:>12}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        expense.category.to_string(),
        truncate(&expense.description, 30),
        format!("{}{}", symbol, expense.amount)
    )
}

/// Format a list of expenses with a header row
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:<10} {:<15} {:<30} {:>12}\n",
        "Id", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(79));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol));
        output.push('\n');
    }

    output
}

/// Truncate a string to `max` characters, marking the cut with an ellipsis
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
