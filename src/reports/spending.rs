//! Spending aggregation
//!
//! Pure grouping and summary computations over expense snapshots. Groupings
//! preserve first-occurrence order; callers that want chronological output
//! (the daily trend) sort and window explicitly via
//! [`trailing_daily_totals`].

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Category, Expense, Money};

/// Headline statistics over a record set
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    /// Sum of all amounts
    pub total: Money,
    /// Number of records
    pub count: usize,
    /// Total divided by the number of distinct dates; zero for no records
    pub average_daily: Money,
}

impl SpendingSummary {
    /// Compute the summary for a record snapshot
    pub fn compute(records: &[Expense]) -> Self {
        let total: Money = records.iter().map(|e| e.amount).sum();
        let count = records.len();

        let mut dates: Vec<NaiveDate> = records.iter().map(|e| e.date).collect();
        dates.sort();
        dates.dedup();

        let average_daily = if dates.is_empty() {
            Money::zero()
        } else {
            Money::from_cents(
                (total.cents() as f64 / dates.len() as f64).round() as i64
            )
        };

        Self {
            total,
            count,
            average_daily,
        }
    }
}

/// Sum amounts per category, in first-occurrence order
pub fn totals_by_category(records: &[Expense]) -> Vec<(Category, Money)> {
    let mut totals: Vec<(Category, Money)> = Vec::new();
    let mut index: HashMap<Category, usize> = HashMap::new();

    for expense in records {
        match index.get(&expense.category) {
            Some(&i) => totals[i].1 += expense.amount,
            None => {
                index.insert(expense.category, totals.len());
                totals.push((expense.category, expense.amount));
            }
        }
    }

    totals
}

/// Sum amounts per exact date, in first-occurrence order
///
/// Returns the full, unbounded grouping; windowing is the caller's job.
pub fn totals_by_date(records: &[Expense]) -> Vec<(NaiveDate, Money)> {
    let mut totals: Vec<(NaiveDate, Money)> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for expense in records {
        match index.get(&expense.date) {
            Some(&i) => totals[i].1 += expense.amount,
            None => {
                index.insert(expense.date, totals.len());
                totals.push((expense.date, expense.amount));
            }
        }
    }

    totals
}

/// Daily totals for the most recent `days` distinct dates, ascending
pub fn trailing_daily_totals(records: &[Expense], days: usize) -> Vec<(NaiveDate, Money)> {
    let mut totals = totals_by_date(records);
    totals.sort_by_key(|(date, _)| *date);

    let skip = totals.len().saturating_sub(days);
    totals.split_off(skip)
}
