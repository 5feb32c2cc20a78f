//! Budget CLI commands

use clap::Subcommand;

use super::command::Command;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly budget (0 clears it)
    Set {
        /// Amount (e.g., "500" or "500.00")
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Compare spending against the monthly budget
    Status,
}

impl From<BudgetCommands> for Command {
    fn from(cmd: BudgetCommands) -> Self {
        match cmd {
            BudgetCommands::Set { amount } => Command::SetBudget { amount },
            BudgetCommands::Status => Command::BudgetStatus,
        }
    }
}
