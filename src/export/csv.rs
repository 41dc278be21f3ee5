//! CSV export functionality
//!
//! Exports the full expense collection as CSV with columns
//! `Date,Category,Description,Amount`. The description is user text and is
//! always quoted, with internal quotes doubled.

use std::io::Write;

use crate::error::{OutlayError, OutlayResult};
use crate::models::Expense;

/// Write all expenses to `writer` as CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> OutlayResult<()> {
    writeln!(writer, "Date,Category,Description,Amount")
        .map_err(|e| OutlayError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{},{}",
            expense.date.format("%Y-%m-%d"),
            expense.category,
            quote_csv(&expense.description),
            expense.amount
        )
        .map_err(|e| OutlayError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Wrap a field in double quotes, doubling any internal quotes
fn quote_csv(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
