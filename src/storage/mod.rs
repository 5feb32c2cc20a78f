//! Storage layer for the expense tracker
//!
//! Expenses live in a CSV file and the budget in a JSON file. Every write
//! replaces the whole file atomically. Loads never fail: problems come back
//! as `LoadWarning`s next to the best data that could be recovered.

pub mod config;
pub mod expenses;
pub mod file_io;

pub use config::ConfigRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_atomic, write_json_atomic};

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseResult, LoadWarning};
use crate::models::{BudgetConfig, Expense};

/// A loaded value together with anything that went wrong while loading it
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub warnings: Vec<LoadWarning>,
}

impl<T> Loaded<T> {
    /// A value that loaded without problems
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(value: T, warning: LoadWarning) -> Self {
        Self {
            value,
            warnings: vec![warning],
        }
    }

    pub fn into_parts(self) -> (T, Vec<LoadWarning>) {
        (self.value, self.warnings)
    }
}

/// Main storage coordinator that provides access to both repositories
#[derive(Debug, Clone)]
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    pub config: ConfigRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Self {
        Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            config: ConfigRepository::new(paths.config_file()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    pub fn load_expenses(&self) -> Loaded<Vec<Expense>> {
        self.expenses.load()
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        self.expenses.save(expenses)
    }

    pub fn load_config(&self) -> Loaded<BudgetConfig> {
        self.config.load()
    }

    pub fn save_config(&self, config: &BudgetConfig) -> ExpenseResult<()> {
        self.config.save(config)
    }
}
