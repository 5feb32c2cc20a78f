//! Configuration module for the expense tracker
//!
//! Resolves where the expense and budget files live. The budget itself is
//! user data and is modeled in `models::budget`.

pub mod paths;

pub use paths::ExpensePaths;
