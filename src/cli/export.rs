//! Export CLI command
//!
//! Writes the full, unfiltered expense collection as CSV to a file or to
//! stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{OutlayError, OutlayResult};
use crate::export::export_expenses_csv;
use crate::storage::Storage;

/// Handle `outlay export`
pub fn handle_export_command(storage: &Storage, output: Option<PathBuf>) -> OutlayResult<()> {
    let expenses = storage.expenses.get_all()?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                OutlayError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_expenses_csv(&expenses, &mut writer)?;
            writer
                .flush()
                .map_err(|e| OutlayError::Export(e.to_string()))?;

            println!("Exported {} expenses to {}", expenses.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_expenses_csv(&expenses, &mut handle)?;
        }
    }

    Ok(())
}
