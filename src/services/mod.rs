//! Service layer for outlay
//!
//! The service layer provides business logic on top of the storage layer:
//! validation before persistence, id resolution, and the filter/sort
//! pipeline behind listings.

pub mod budget;
pub mod expense;

pub use budget::BudgetService;
pub use expense::{
    CreateExpenseInput, ExpenseFilter, ExpenseService, SortDirection, SortKey, SortSpec,
};
