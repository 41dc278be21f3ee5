//! Budget repository for JSON storage
//!
//! Manages loading and saving the per-category budget thresholds to
//! budgets.json. Budgets have a lifecycle independent from expenses.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{OutlayError, OutlayResult};
use crate::models::{BudgetBook, Category, Money};

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget document
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    budgets: BudgetBook,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<BudgetBook>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BudgetBook::new()),
        }
    }

    /// Load budgets from disk, replacing the in-memory book
    pub fn load(&self) -> OutlayResult<()> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut data = self.write_lock()?;
        *data = file_data.budgets;
        Ok(())
    }

    /// Reset the in-memory book to empty without touching disk
    pub fn reset(&self) -> OutlayResult<()> {
        let mut data = self.write_lock()?;
        *data = BudgetBook::new();
        Ok(())
    }

    /// Save the full book to disk
    pub fn save(&self) -> OutlayResult<()> {
        let data = self.read_lock()?;

        let file_data = BudgetData {
            budgets: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get the configured threshold for a category
    pub fn get(&self, category: Category) -> OutlayResult<Option<Money>> {
        let data = self.read_lock()?;
        Ok(data.get(category))
    }

    /// Get a snapshot of the whole book
    pub fn book(&self) -> OutlayResult<BudgetBook> {
        let data = self.read_lock()?;
        Ok(data.clone())
    }

    /// Set the threshold for a category (zero removes it)
    pub fn set(&self, category: Category, amount: Money) -> OutlayResult<()> {
        let mut data = self.write_lock()?;
        data.set(category, amount);
        Ok(())
    }

    /// Remove the threshold for a category; returns whether one existed
    pub fn remove(&self, category: Category) -> OutlayResult<bool> {
        let mut data = self.write_lock()?;
        Ok(data.remove(category))
    }

    fn read_lock(&self) -> OutlayResult<std::sync::RwLockReadGuard<'_, BudgetBook>> {
        self.data.read().map_err(|e| {
            OutlayError::InvalidStoreState(format!("Failed to acquire read lock: {}", e))
        })
    }

    fn write_lock(&self) -> OutlayResult<std::sync::RwLockWriteGuard<'_, BudgetBook>> {
        self.data.write().map_err(|e| {
            OutlayError::InvalidStoreState(format!("Failed to acquire write lock: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        let repo = BudgetRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.book().unwrap().is_empty());
    }

    #[test]
    fn test_set_get_remove() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.set(Category::Food, Money::from_cents(10000)).unwrap();
        assert_eq!(
            repo.get(Category::Food).unwrap(),
            Some(Money::from_cents(10000))
        );

        assert!(repo.remove(Category::Food).unwrap());
        assert_eq!(repo.get(Category::Food).unwrap(), None);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.set(Category::Food, Money::from_cents(10000)).unwrap();
        repo.set(Category::Bills, Money::from_cents(50000)).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("budgets.json");
        let repo2 = BudgetRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.book().unwrap(), repo.book().unwrap());
    }

    #[test]
    fn test_corrupt_store_surfaces_invalid_state() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("budgets.json"), "[1, 2").unwrap();

        assert!(matches!(
            repo.load(),
            Err(OutlayError::InvalidStoreState(_))
        ));
    }
}
