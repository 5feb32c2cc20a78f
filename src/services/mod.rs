//! Service layer for the expense tracker
//!
//! Business logic on top of the storage layer: validation of raw input,
//! session state and report queries.

pub mod tracker;

pub use tracker::{ExpenseTracker, TrackerState};
