//! Expense record model
//!
//! An expense is a single dated, categorized purchase. Records are owned by
//! the storage layer; the query and report engines only ever see read-only
//! snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique, stable identifier
    pub id: ExpenseId,

    /// Amount spent; strictly positive at rest
    pub amount: Money,

    /// What the money was spent on; non-empty at rest
    pub description: String,

    /// Spending category; records stored without one default to Other
    #[serde(default)]
    pub category: Category,

    /// Calendar date of the expense
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            description: description.into().trim().to_string(),
            category,
            date,
        }
    }

    /// Validate the record against the store invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        Ok(())
    }

    /// Apply a partial update; fields not supplied are retained
    pub fn apply(&mut self, patch: &ExpenseUpdate) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(ref description) = patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// A partial edit to an existing expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
}

impl ExpenseUpdate {
    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero, got {}", amount)
            }
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
