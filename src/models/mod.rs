//! Core data models for outlay
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expense records, categories, money amounts, and budget
//! thresholds.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::BudgetBook;
pub use category::Category;
pub use expense::{Expense, ExpenseUpdate};
pub use ids::ExpenseId;
pub use money::Money;
