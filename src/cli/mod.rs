//! CLI command handlers
//!
//! Bridges clap argument parsing and the interactive menu with the
//! tracker service.

pub mod budget;
pub mod command;
pub mod interactive;

pub use budget::BudgetCommands;
pub use command::{dispatch, Command, Outcome};
pub use interactive::{run_interactive, MenuChoice};
