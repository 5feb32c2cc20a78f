//! Custom error types for the expense tracker
//!
//! Validation failures are plain values returned to the caller for
//! re-prompting. Storage failures are caught at the repository boundary and
//! surfaced as `ExpenseError` or as non-fatal `LoadWarning`s.

use std::path::PathBuf;

use thiserror::Error;

/// A raw user input that could not be turned into a valid field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date was neither "today" nor YYYY-MM-DD
    #[error("Invalid date '{0}': use YYYY-MM-DD or 'today'")]
    Date(String),

    /// Amount was non-numeric or out of range
    #[error("Invalid amount '{input}': {reason}")]
    Amount { input: String, reason: &'static str },

    /// Category was empty after trimming
    #[error("Category cannot be empty")]
    Category,
}

impl ValidationError {
    pub(crate) fn amount(input: impl Into<String>, reason: &'static str) -> Self {
        Self::Amount {
            input: input.into(),
            reason,
        }
    }
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// User input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The tracker has been closed after a final save
    #[error("Tracker is closed")]
    Closed,
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

/// Something went wrong while loading, but loading carried on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// One stored expense row was invalid and was skipped
    #[error("Skipping invalid expense on line {line}: {reason}")]
    SkippedRow { line: u64, reason: String },

    /// The expense file could not be read at all
    #[error("Could not read {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    /// The config file was unreadable or malformed; defaults were used
    #[error("Ignoring malformed config {}: {reason}", path.display())]
    MalformedConfig { path: PathBuf, reason: String },
}

impl LoadWarning {
    /// Check if this warning is about a single skipped row
    pub fn is_skipped_row(&self) -> bool {
        matches!(self, Self::SkippedRow { .. })
    }
}
