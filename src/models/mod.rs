//! Core data models for the expense tracker
//!
//! This module contains the value types the rest of the crate passes around:
//! expenses, money amounts, and the monthly budget configuration.

pub mod budget;
pub mod expense;
pub mod money;

pub use budget::BudgetConfig;
pub use expense::Expense;
pub use money::{Money, MoneyParseError};
