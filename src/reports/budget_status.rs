//! Budget status evaluation
//!
//! Compares aggregated category spending against configured thresholds.
//! Only categories with a configured budget produce an entry; a category
//! without one is simply unbudgeted, not "ok with a zero ceiling".

use std::fmt;

use crate::models::{BudgetBook, Category, Money};

/// Health classification for a budgeted category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetHealth {
    /// Under 80% spent
    Ok,
    /// At or above 80% spent
    Warning,
    /// At or above 100% spent
    Exceeded,
}

impl BudgetHealth {
    /// Classify a spent percentage
    ///
    /// Thresholds are inclusive: exactly 80% is a warning, exactly 100% is
    /// exceeded.
    pub fn classify(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Exceeded
        } else if percentage >= 80.0 {
            Self::Warning
        } else {
            Self::Ok
        }
    }
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warning => write!(f, "warning"),
            Self::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// Evaluation result for one budgeted category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category: Category,
    pub budget_amount: Money,
    pub spent_amount: Money,
    /// Budget minus spending, never negative
    pub remaining_amount: Money,
    /// Spending as a percentage of the budget
    pub percentage: f64,
    pub health: BudgetHealth,
}

impl BudgetStatus {
    /// Evaluate category spending against the budget book
    ///
    /// `spending` is the output of
    /// [`totals_by_category`](super::spending::totals_by_category); categories
    /// absent from it count as zero spending. Results follow the fixed
    /// category order. Pure: nothing is persisted here.
    pub fn evaluate(spending: &[(Category, Money)], budgets: &BudgetBook) -> Vec<BudgetStatus> {
        budgets
            .iter()
            .map(|(category, budget_amount)| {
                let spent_amount = spending
                    .iter()
                    .find(|(c, _)| *c == category)
                    .map(|(_, m)| *m)
                    .unwrap_or_default();

                let percentage = spent_amount.percent_of(budget_amount);

                BudgetStatus {
                    category,
                    budget_amount,
                    spent_amount,
                    remaining_amount: budget_amount.saturating_sub(spent_amount),
                    percentage,
                    health: BudgetHealth::classify(percentage),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spending(entries: &[(Category, i64)]) -> Vec<(Category, Money)> {
        entries
            .iter()
            .map(|(c, cents)| (*c, Money::from_cents(*cents)))
            .collect()
    }

    fn book(entries: &[(Category, i64)]) -> BudgetBook {
        let mut book = BudgetBook::new();
        for (category, cents) in entries {
            book.set(*category, Money::from_cents(*cents));
        }
        book
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(BudgetHealth::classify(79.99), BudgetHealth::Ok);
        assert_eq!(BudgetHealth::classify(80.0), BudgetHealth::Warning);
        assert_eq!(BudgetHealth::classify(99.99), BudgetHealth::Warning);
        assert_eq!(BudgetHealth::classify(100.0), BudgetHealth::Exceeded);
        assert_eq!(BudgetHealth::classify(150.0), BudgetHealth::Exceeded);
    }

    #[test]
    fn test_food_at_eighty_percent_warns() {
        // 50 + 30 spent against a 100 budget
        let statuses = BudgetStatus::evaluate(
            &spending(&[(Category::Food, 8000)]),
            &book(&[(Category::Food, 10000)]),
        );

        assert_eq!(statuses.len(), 1);
        let status = &statuses[0];
        assert_eq!(status.category, Category::Food);
        assert_eq!(status.spent_amount.cents(), 8000);
        assert_eq!(status.percentage, 80.0);
        assert_eq!(status.health, BudgetHealth::Warning);
        assert_eq!(status.remaining_amount.cents(), 2000);
    }

    #[test]
    fn test_unbudgeted_categories_excluded() {
        let statuses = BudgetStatus::evaluate(
            &spending(&[(Category::Food, 5000), (Category::Bills, 2000)]),
            &book(&[(Category::Food, 10000)]),
        );

        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].category, Category::Food);
    }

    #[test]
    fn test_no_spending_defaults_to_zero() {
        let statuses =
            BudgetStatus::evaluate(&spending(&[]), &book(&[(Category::Bills, 10000)]));

        assert_eq!(statuses[0].spent_amount, Money::zero());
        assert_eq!(statuses[0].percentage, 0.0);
        assert_eq!(statuses[0].health, BudgetHealth::Ok);
        assert_eq!(statuses[0].remaining_amount.cents(), 10000);
    }

    #[test]
    fn test_remaining_never_negative() {
        let statuses = BudgetStatus::evaluate(
            &spending(&[(Category::Food, 15000)]),
            &book(&[(Category::Food, 10000)]),
        );

        assert_eq!(statuses[0].health, BudgetHealth::Exceeded);
        assert_eq!(statuses[0].percentage, 150.0);
        assert_eq!(statuses[0].remaining_amount, Money::zero());
    }

    #[test]
    fn test_results_follow_category_order() {
        let statuses = BudgetStatus::evaluate(
            &spending(&[]),
            &book(&[
                (Category::Other, 100),
                (Category::Food, 200),
                (Category::Entertainment, 300),
            ]),
        );

        let categories: Vec<Category> = statuses.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![Category::Food, Category::Entertainment, Category::Other]
        );
    }
}
