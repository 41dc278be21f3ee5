//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_add, handle_delete, handle_edit, handle_list, AddArgs, EditArgs, ListArgs};
pub use export::handle_export_command;
pub use report::{handle_report_command, ReportCommands};
