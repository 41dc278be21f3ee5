//! Expense categories
//!
//! Categories form a fixed, enumerated set rather than free-form strings, so
//! typos and unknown labels are caught at the parse boundary instead of
//! silently producing new buckets.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending category
///
/// The variant order is the display and evaluation order used by reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transportation,
    Shopping,
    Bills,
    Entertainment,
    /// Catch-all; records stored without a category land here
    #[default]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transportation,
        Category::Shopping,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    /// The label shown in listings and reports
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| UnknownCategoryError(s.to_string()))
    }
}

/// Error for a category label outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategoryError(pub String);

impl fmt::Display for UnknownCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategoryError {}
