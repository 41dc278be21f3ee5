//! Expense service
//!
//! Provides business logic for expense management: validated CRUD operations
//! plus the filter/sort pipeline behind `outlay list`. Filtering and sorting
//! are pure functions over record snapshots; the service only adds storage
//! coordination around them.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDate;
use log::debug;

use crate::error::{OutlayError, OutlayResult};
use crate::models::{Category, Expense, ExpenseId, ExpenseUpdate, Money};
use crate::storage::Storage;

/// Sort key for expense listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Amount,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A parsed sort specification, e.g. "date-desc" or "amount-asc"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Compare two expenses under this spec
    ///
    /// Equal keys compare equal, so a stable sort keeps their recorded order.
    fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        let ordering = match self.key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.cmp(&b.amount),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortSpec {
    type Err = OutlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, direction) = s
            .split_once('-')
            .ok_or_else(|| OutlayError::InvalidSortSpec(s.to_string()))?;

        let key = match key {
            "date" => SortKey::Date,
            "amount" => SortKey::Amount,
            _ => return Err(OutlayError::InvalidSortSpec(s.to_string())),
        };

        let direction = match direction {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            _ => return Err(OutlayError::InvalidSortSpec(s.to_string())),
        };

        Ok(Self { key, direction })
    }
}

impl std::fmt::Display for SortSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self.key {
            SortKey::Date => "date",
            SortKey::Amount => "amount",
        };
        let direction = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{}-{}", key, direction)
    }
}

/// Options for filtering and ordering expense listings
///
/// All predicates are conjunctive; an absent predicate passes everything.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Keep only this category
    pub category: Option<Category>,
    /// Keep only descriptions containing this text (case-insensitive)
    pub search: Option<String>,
    /// Keep only expenses on or after this date
    pub date_from: Option<NaiveDate>,
    /// Keep only expenses on or before this date
    pub date_to: Option<NaiveDate>,
    /// Ordering of the surviving records; None keeps the recorded order
    pub sort: Option<SortSpec>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by description substring
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Filter by inclusive date range
    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Order the result
    pub fn sort(mut self, spec: SortSpec) -> Self {
        self.sort = Some(spec);
        self
    }

    fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }

        if let Some(ref search) = self.search {
            let needle = search.to_lowercase();
            if !expense.description.to_lowercase().contains(&needle) {
                return false;
            }
        }

        if let Some(from) = self.date_from {
            if expense.date < from {
                return false;
            }
        }

        if let Some(to) = self.date_to {
            if expense.date > to {
                return false;
            }
        }

        true
    }

    /// Apply the filter and sort to a record snapshot
    ///
    /// Pure: the input is never mutated. The sort is stable, so records with
    /// equal keys keep their relative input order.
    pub fn apply(&self, records: &[Expense]) -> Vec<Expense> {
        let mut result: Vec<Expense> = records
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();

        if let Some(spec) = self.sort {
            result.sort_by(|a, b| spec.compare(a, b));
        }

        result
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub description: String,
    pub category: Category,
    /// Defaults to today when not supplied
    pub date: Option<NaiveDate>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new expense
    pub fn create(&self, input: CreateExpenseInput) -> OutlayResult<Expense> {
        let date = input
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let expense = Expense::new(input.amount, input.description, input.category, date);
        expense
            .validate()
            .map_err(|e| OutlayError::InvalidRecord(e.to_string()))?;

        self.storage.expenses.add(expense.clone())?;
        self.storage.expenses.save()?;

        debug!("recorded expense {} ({})", expense.id, expense.description);
        Ok(expense)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> OutlayResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Find an expense by full or abbreviated id string
    pub fn find(&self, identifier: &str) -> OutlayResult<Option<Expense>> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return self.storage.expenses.get(id);
        }

        // Abbreviated hex prefix as shown by `outlay list`
        let mut matches: Vec<Expense> = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| e.id.matches_prefix(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            _ => Err(OutlayError::InvalidRecord(format!(
                "Ambiguous expense id prefix: {}",
                identifier
            ))),
        }
    }

    /// List expenses through a filter
    pub fn list(&self, filter: &ExpenseFilter) -> OutlayResult<Vec<Expense>> {
        let records = self.storage.expenses.get_all()?;
        Ok(filter.apply(&records))
    }

    /// Apply a partial update to an expense
    pub fn update(&self, id: ExpenseId, patch: &ExpenseUpdate) -> OutlayResult<Expense> {
        if patch.is_empty() {
            return Err(OutlayError::InvalidRecord(
                "Nothing to update: no fields supplied".into(),
            ));
        }

        let updated = self.storage.expenses.update(id, patch)?;
        self.storage.expenses.save()?;

        debug!("updated expense {}", updated.id);
        Ok(updated)
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> OutlayResult<()> {
        if !self.storage.expenses.delete(id)? {
            return Err(OutlayError::expense_not_found(id.to_string()));
        }
        self.storage.expenses.save()?;

        debug!("deleted expense {}", id);
        Ok(())
    }

    /// Count stored expenses
    pub fn count(&self) -> OutlayResult<usize> {
        self.storage.expenses.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::OutlayPaths;
    use tempfile::TempDir;

    fn expense(cents: i64, description: &str, category: Category, date: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            description,
            category,
            date.parse().unwrap(),
        )
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_sort_spec_parsing() {
        assert_eq!(
            "date-asc".parse::<SortSpec>().unwrap(),
            SortSpec::new(SortKey::Date, SortDirection::Ascending)
        );
        assert_eq!(
            "amount-desc".parse::<SortSpec>().unwrap(),
            SortSpec::new(SortKey::Amount, SortDirection::Descending)
        );
    }

    #[test]
    fn test_sort_spec_unknown_key_is_error() {
        assert!(matches!(
            "price-asc".parse::<SortSpec>(),
            Err(OutlayError::InvalidSortSpec(_))
        ));
        assert!(matches!(
            "date-up".parse::<SortSpec>(),
            Err(OutlayError::InvalidSortSpec(_))
        ));
        assert!(matches!(
            "date".parse::<SortSpec>(),
            Err(OutlayError::InvalidSortSpec(_))
        ));
    }

    #[test]
    fn test_filter_category_equality() {
        let records = vec![
            expense(100, "lunch", Category::Food, "2024-01-01"),
            expense(200, "bus", Category::Transportation, "2024-01-02"),
            expense(300, "dinner", Category::Food, "2024-01-03"),
        ];

        let result = ExpenseFilter::new().category(Category::Food).apply(&records);

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.category == Category::Food));
    }

    #[test]
    fn test_filter_search_case_insensitive() {
        let records = vec![
            expense(100, "Morning Coffee", Category::Food, "2024-01-01"),
            expense(200, "lunch", Category::Food, "2024-01-02"),
        ];

        let result = ExpenseFilter::new().search("COFFEE").apply(&records);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "Morning Coffee");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        // No Food record mentions coffee: conjunction yields nothing
        let records = vec![
            expense(100, "lunch", Category::Food, "2024-01-01"),
            expense(200, "coffee", Category::Shopping, "2024-01-02"),
        ];

        let result = ExpenseFilter::new()
            .category(Category::Food)
            .search("coffee")
            .apply(&records);

        assert!(result.is_empty());
    }

    #[test]
    fn test_date_range_bounds_inclusive() {
        let records = vec![
            expense(100, "before", Category::Food, "2024-01-09"),
            expense(200, "on from", Category::Food, "2024-01-10"),
            expense(300, "inside", Category::Food, "2024-01-15"),
            expense(400, "on to", Category::Food, "2024-01-20"),
            expense(500, "after", Category::Food, "2024-01-21"),
        ];

        let result = ExpenseFilter::new()
            .date_range("2024-01-10".parse().unwrap(), "2024-01-20".parse().unwrap())
            .apply(&records);

        let descriptions: Vec<&str> = result.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["on from", "inside", "on to"]);
    }

    #[test]
    fn test_sort_by_amount_descending() {
        let records = vec![
            expense(200, "b", Category::Food, "2024-01-01"),
            expense(300, "c", Category::Food, "2024-01-02"),
            expense(100, "a", Category::Food, "2024-01-03"),
        ];

        let result = ExpenseFilter::new()
            .sort("amount-desc".parse().unwrap())
            .apply(&records);

        let amounts: Vec<i64> = result.iter().map(|e| e.amount.cents()).collect();
        assert_eq!(amounts, vec![300, 200, 100]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        // Same date everywhere: order must match the input order either way
        let records = vec![
            expense(300, "first", Category::Food, "2024-01-01"),
            expense(100, "second", Category::Food, "2024-01-01"),
            expense(200, "third", Category::Food, "2024-01-01"),
        ];

        for spec in ["date-asc", "date-desc"] {
            let result = ExpenseFilter::new()
                .sort(spec.parse().unwrap())
                .apply(&records);
            let descriptions: Vec<&str> =
                result.iter().map(|e| e.description.as_str()).collect();
            assert_eq!(descriptions, vec!["first", "second", "third"], "{}", spec);
        }
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let records = vec![
            expense(200, "b", Category::Food, "2024-01-02"),
            expense(100, "a", Category::Food, "2024-01-01"),
        ];
        let snapshot = records.clone();

        let _ = ExpenseFilter::new()
            .sort("date-asc".parse().unwrap())
            .apply(&records);

        assert_eq!(records, snapshot);
    }

    #[test]
    fn test_create_validates_and_persists() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let created = service
            .create(CreateExpenseInput {
                amount: Money::from_cents(1250),
                description: "Lunch".into(),
                category: Category::Food,
                date: Some("2024-01-15".parse().unwrap()),
            })
            .unwrap();

        assert_eq!(service.get(created.id).unwrap().unwrap().description, "Lunch");
        // Persisted, not just in memory
        storage.expenses.load().unwrap();
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_create_rejects_zero_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let result = service.create(CreateExpenseInput {
            amount: Money::zero(),
            description: "Lunch".into(),
            category: Category::Food,
            date: Some("2024-01-15".parse().unwrap()),
        });

        assert!(matches!(result, Err(OutlayError::InvalidRecord(_))));
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_find_by_prefix() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let created = service
            .create(CreateExpenseInput {
                amount: Money::from_cents(1250),
                description: "Lunch".into(),
                category: Category::Food,
                date: Some("2024-01-15".parse().unwrap()),
            })
            .unwrap();

        let found = service.find(&created.id.short()).unwrap().unwrap();
        assert_eq!(found.id, created.id);

        assert!(service.find("zzzzzzzz").unwrap().is_none());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let result = service.delete(ExpenseId::new());
        assert!(matches!(result, Err(OutlayError::NotFound { .. })));
    }

    #[test]
    fn test_update_empty_patch_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let result = service.update(ExpenseId::new(), &ExpenseUpdate::default());
        assert!(matches!(result, Err(OutlayError::InvalidRecord(_))));
    }
}
