//! Display formatting for terminal output

pub mod expense;
pub mod report;

pub use expense::{format_expense_list, format_expense_row};
pub use report::{
    format_budget_statuses, format_category_breakdown, format_daily_totals, format_summary,
};
