//! Tracker commands
//!
//! Every user action, whether it comes from a subcommand or the interactive
//! menu, becomes a [`Command`] and runs through [`dispatch`].

use crate::display::{
    format_added, format_budget_status, format_category_breakdown, format_expense_table,
    format_totals,
};
use crate::error::ExpenseResult;
use crate::models::{Expense, Money};
use crate::services::ExpenseTracker;
use crate::validation::title_case;

/// An action the user asked the tracker to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate and record a new expense from raw input
    AddExpense {
        date: String,
        category: String,
        amount: String,
        description: String,
    },
    /// Show all expenses in entry order
    ListAll,
    /// Show all expenses, largest first
    ListSorted,
    /// Show expenses in one category
    ListCategory { category: String },
    /// Show the categories in use
    ListCategories,
    /// Show spending per category
    Breakdown,
    /// Set the monthly budget from raw input
    SetBudget { amount: String },
    /// Compare spending against the budget
    BudgetStatus,
    /// Persist and close the tracker
    SaveAndExit,
}

/// What a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A new expense was recorded
    Recorded(Expense),
    /// The monthly budget changed
    BudgetSet(Money),
    /// A rendered report
    Report(String),
    /// Data was saved and the tracker closed
    Closed,
}

impl Outcome {
    /// Render the outcome as text for the terminal
    pub fn render(&self) -> String {
        match self {
            Self::Recorded(expense) => format!("{}\n", format_added(expense)),
            Self::BudgetSet(amount) => format!("Monthly budget set to: {}\n", amount),
            Self::Report(text) => text.clone(),
            Self::Closed => "Data saved successfully\n".to_string(),
        }
    }
}

/// Run a command against the tracker
pub fn dispatch(tracker: &mut ExpenseTracker, command: Command) -> ExpenseResult<Outcome> {
    let outcome = match command {
        Command::AddExpense {
            date,
            category,
            amount,
            description,
        } => Outcome::Recorded(tracker.record_expense(&date, &category, &amount, &description)?),
        Command::ListAll => Outcome::Report(list_all(tracker)),
        Command::ListSorted => Outcome::Report(list_sorted(tracker)),
        Command::ListCategory { category } => Outcome::Report(list_category(tracker, &category)),
        Command::ListCategories => Outcome::Report(list_categories(tracker)),
        Command::Breakdown => Outcome::Report(format_category_breakdown(
            &tracker.category_totals(),
            tracker.total(),
        )),
        Command::SetBudget { amount } => Outcome::BudgetSet(tracker.set_budget(&amount)?),
        Command::BudgetStatus => Outcome::Report(format_budget_status(&tracker.budget_status())),
        Command::SaveAndExit => {
            tracker.close()?;
            Outcome::Closed
        }
    };
    Ok(outcome)
}

fn list_all(tracker: &ExpenseTracker) -> String {
    let expenses = tracker.expenses();
    if expenses.is_empty() {
        return format_expense_table(expenses);
    }

    format!(
        "{}\n{}",
        format_expense_table(expenses),
        format_totals("Total Expenses", expenses.len(), tracker.total())
    )
}

fn list_sorted(tracker: &ExpenseTracker) -> String {
    if tracker.expenses().is_empty() {
        return format_expense_table(tracker.expenses());
    }
    format!(
        "Expenses sorted by amount (highest to lowest)\n{}",
        format_expense_table(tracker.sorted_by_amount())
    )
}

fn list_category(tracker: &ExpenseTracker, category: &str) -> String {
    let name = title_case(category.trim());
    let matching: Vec<&Expense> = tracker.by_category(category).collect();

    if matching.is_empty() {
        return format!("No expenses found for category '{}'\n", name);
    }

    let total: Money = matching.iter().map(|e| e.amount()).sum();
    format!(
        "Expenses in category: {}\n{}\n{}",
        name,
        format_expense_table(matching.iter().copied()),
        format_totals(&format!("Total for {}", name), matching.len(), total)
    )
}

fn list_categories(tracker: &ExpenseTracker) -> String {
    let categories = tracker.categories();
    if categories.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }
    format!("Available categories: {}\n", categories.join(", "))
}
