//! Expense display formatting
//!
//! Renders expenses as fixed-width rows for terminal output.

use crate::models::{Expense, Money};

use super::report::truncate;

const HEADER_WIDTH: usize = 72;

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:<12} | {:<15} | {:>10} | {}",
        expense.date().format("%Y-%m-%d").to_string(),
        truncate(expense.category(), 15),
        expense.amount(),
        truncate(&expense.description().replace('\n', " "), 25)
    )
}

/// Format a list of expenses as a table with a header
pub fn format_expense_table<'a, I>(expenses: I) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} | {:<15} | {:>10} | {}\n",
        "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(HEADER_WIDTH));
    output.push('\n');

    let mut any = false;
    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
        any = true;
    }

    if !any {
        return "No expenses recorded yet.\n".to_string();
    }

    output
}

/// Format the count and total footer shown under an expense list
pub fn format_totals(label: &str, count: usize, total: Money) -> String {
    format!("{}: {}\nNumber of expenses: {}\n", label, total, count)
}

/// Format a one-line confirmation for a newly added expense
pub fn format_added(expense: &Expense) -> String {
    format!("Expense added: {} for {}", expense.amount(), expense.category())
}
