//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense collection to expenses.json. The
//! collection is held as an ordered sequence: listing without an explicit
//! sort returns records in the order they were recorded, which is also the
//! order the stable sort ties break on.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{OutlayError, OutlayResult};
use crate::models::{Expense, ExpenseId, ExpenseUpdate};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense collection
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk, replacing the in-memory collection
    pub fn load(&self) -> OutlayResult<()> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.write_lock()?;
        *data = file_data.expenses;
        Ok(())
    }

    /// Reset the in-memory collection to empty without touching disk
    ///
    /// Used by the recovery path when the stored document is corrupt.
    pub fn reset(&self) -> OutlayResult<()> {
        let mut data = self.write_lock()?;
        data.clear();
        Ok(())
    }

    /// Save the full collection to disk
    pub fn save(&self) -> OutlayResult<()> {
        let data = self.read_lock()?;

        let file_data = ExpenseData {
            expenses: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> OutlayResult<Option<Expense>> {
        let data = self.read_lock()?;
        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get all expenses in recorded order
    pub fn get_all(&self) -> OutlayResult<Vec<Expense>> {
        let data = self.read_lock()?;
        Ok(data.clone())
    }

    /// Append a new expense
    pub fn add(&self, expense: Expense) -> OutlayResult<()> {
        let mut data = self.write_lock()?;

        if data.iter().any(|e| e.id == expense.id) {
            return Err(OutlayError::Duplicate {
                entity_type: "Expense",
                identifier: expense.id.to_string(),
            });
        }

        data.push(expense);
        Ok(())
    }

    /// Apply a partial update to an existing expense
    ///
    /// The patched record is validated before it replaces the stored one, so
    /// a rejected patch leaves the collection untouched.
    pub fn update(&self, id: ExpenseId, patch: &ExpenseUpdate) -> OutlayResult<Expense> {
        let mut data = self.write_lock()?;

        let pos = data
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| OutlayError::expense_not_found(id.to_string()))?;

        let mut updated = data[pos].clone();
        updated.apply(patch);
        updated
            .validate()
            .map_err(|e| OutlayError::InvalidRecord(e.to_string()))?;

        data[pos] = updated.clone();
        Ok(updated)
    }

    /// Delete an expense; returns whether it existed
    pub fn delete(&self, id: ExpenseId) -> OutlayResult<bool> {
        let mut data = self.write_lock()?;
        let before = data.len();
        data.retain(|e| e.id != id);
        Ok(data.len() < before)
    }

    /// Count expenses
    pub fn count(&self) -> OutlayResult<usize> {
        let data = self.read_lock()?;
        Ok(data.len())
    }

    fn read_lock(&self) -> OutlayResult<std::sync::RwLockReadGuard<'_, Vec<Expense>>> {
        self.data.read().map_err(|e| {
            OutlayError::InvalidStoreState(format!("Failed to acquire read lock: {}", e))
        })
    }

    fn write_lock(&self) -> OutlayResult<std::sync::RwLockWriteGuard<'_, Vec<Expense>>> {
        self.data.write().map_err(|e| {
            OutlayError::InvalidStoreState(format!("Failed to acquire write lock: {}", e))
        })
    }
}
