//! Budget service
//!
//! Storage coordination for budget thresholds. Evaluation of spending
//! against thresholds lives in `reports::budget_status`; this service only
//! manages the configured amounts.

use log::debug;

use crate::error::{OutlayError, OutlayResult};
use crate::models::{BudgetBook, Category, Money};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the threshold for a category
    ///
    /// A zero amount removes the budget, matching the data model where zero
    /// and absent are the same state.
    pub fn set(&self, category: Category, amount: Money) -> OutlayResult<()> {
        self.storage.budgets.set(category, amount)?;
        self.storage.budgets.save()?;

        debug!("set budget {} = {}", category, amount);
        Ok(())
    }

    /// Remove the threshold for a category
    pub fn remove(&self, category: Category) -> OutlayResult<()> {
        if !self.storage.budgets.remove(category)? {
            return Err(OutlayError::budget_not_found(category.to_string()));
        }
        self.storage.budgets.save()?;

        debug!("removed budget for {}", category);
        Ok(())
    }

    /// Get the threshold for a category
    pub fn get(&self, category: Category) -> OutlayResult<Option<Money>> {
        self.storage.budgets.get(category)
    }

    /// Snapshot of all configured budgets
    pub fn book(&self) -> OutlayResult<BudgetBook> {
        self.storage.budgets.book()
    }
}
