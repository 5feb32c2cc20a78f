//! Display formatting for terminal output
//!
//! Turns expenses and report results into plain text. Nothing here prints;
//! the CLI decides where the text goes.

pub mod expense;
pub mod report;

pub use expense::{format_added, format_expense_row, format_expense_table, format_totals};
pub use report::{format_budget_status, format_category_breakdown, format_percentage};
