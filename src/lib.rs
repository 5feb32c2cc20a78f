//! expense-cli - Personal expense tracking from the terminal
//!
//! Records dated, categorized expenses, keeps them in a CSV file and tracks
//! spending against a monthly budget kept in a small JSON file.
//!
//! # Architecture
//!
//! - `config`: Path management
//! - `error`: Error and load-warning types
//! - `models`: Money, expenses and the budget config
//! - `validation`: Parsing raw user input into typed values
//! - `storage`: CSV and JSON file storage
//! - `reports`: Totals, sorting, filtering and budget status
//! - `services`: The `ExpenseTracker` session
//! - `display`: Plain-text rendering
//! - `cli`: Commands, clap subcommands and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::{ExpensePaths, ExpenseTracker, Storage};
//!
//! let paths = ExpensePaths::new()?;
//! let mut tracker = ExpenseTracker::initialize(Storage::new(paths));
//! tracker.record_expense("today", "food", "12.50", "Lunch")?;
//! tracker.persist()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod validation;

pub use config::ExpensePaths;
pub use error::{ExpenseError, ExpenseResult, LoadWarning, ValidationError};
pub use models::{BudgetConfig, Expense, Money};
pub use services::{ExpenseTracker, TrackerState};
pub use storage::Storage;
