//! Storage layer for outlay
//!
//! Provides JSON file storage with atomic whole-document writes. All state
//! lives in two independent collections: the expense list and the budget
//! book.

pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use log::warn;

use crate::config::paths::OutlayPaths;
use crate::error::{OutlayError, OutlayResult};

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: OutlayPaths,
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: OutlayPaths) -> OutlayResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &OutlayPaths {
        &self.paths
    }

    /// Load both collections from disk, propagating corruption errors
    pub fn load_all(&self) -> OutlayResult<()> {
        self.expenses.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Load both collections, falling back to empty on a corrupt document
    ///
    /// The fallback is logged; the corrupt file is left on disk untouched
    /// until the next save replaces it.
    pub fn load_or_recover(&self) -> OutlayResult<()> {
        if let Err(e) = self.expenses.load() {
            match e {
                OutlayError::InvalidStoreState(_) => {
                    warn!("expense store unreadable, starting empty: {}", e);
                    self.expenses.reset()?;
                }
                other => return Err(other),
            }
        }

        if let Err(e) = self.budgets.load() {
            match e {
                OutlayError::InvalidStoreState(_) => {
                    warn!("budget store unreadable, starting empty: {}", e);
                    self.budgets.reset()?;
                }
                other => return Err(other),
            }
        }

        Ok(())
    }

    /// Save both collections to disk
    pub fn save_all(&self) -> OutlayResult<()> {
        self.expenses.save()?;
        self.budgets.save()?;
        Ok(())
    }
}
