//! Per-category budget thresholds
//!
//! A budget book maps categories to spending ceilings over the full expense
//! history. A category without an entry has no budget; setting a zero amount
//! removes the entry, so zero and absent are the same observable state and
//! the book never stores a non-positive threshold.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::money::Money;

/// Mapping from category to budget threshold
///
/// Backed by a BTreeMap so iteration follows the fixed category order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetBook(BTreeMap<Category, Money>);

impl BudgetBook {
    /// Create an empty budget book
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the threshold for a category, if one is configured
    pub fn get(&self, category: Category) -> Option<Money> {
        self.0.get(&category).copied()
    }

    /// Set the threshold for a category
    ///
    /// A zero amount removes the entry instead of storing it.
    pub fn set(&mut self, category: Category, amount: Money) {
        if amount.is_positive() {
            self.0.insert(category, amount);
        } else {
            self.0.remove(&category);
        }
    }

    /// Remove the threshold for a category; returns whether one existed
    pub fn remove(&mut self, category: Category) -> bool {
        self.0.remove(&category).is_some()
    }

    /// Iterate configured budgets in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.0.iter().map(|(c, m)| (*c, *m))
    }

    /// Number of configured budgets
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no budget is configured
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
