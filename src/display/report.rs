//! Report formatting utilities for terminal output
//!
//! Provides formatting for budget status and category breakdowns.

use crate::models::Money;
use crate::reports::{BudgetStatus, CategoryTotal};

const BAR_WIDTH: usize = 20;

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let mut out: String = s.chars().take(max_len - 3).collect();
        out.push_str("...");
        out
    }
}

/// Format the budget status block
pub fn format_budget_status(status: &BudgetStatus) -> String {
    let Some(usage) = status.usage() else {
        return "No budget set. Please set a budget first.\n".to_string();
    };

    let mut output = String::new();
    output.push_str(&format!("Monthly Budget:  {:>12}\n", usage.budget));
    output.push_str(&format!("Total Expenses:  {:>12}\n", usage.spent));
    output.push_str(&format!(
        "Budget Used:     {:>12}\n",
        format_percentage(usage.percent_used)
    ));
    output.push_str(&separator(30));
    output.push('\n');

    if usage.over_budget {
        output.push_str(&format!("Over Budget:     {:>12}\n", usage.overspent()));
        output.push_str("WARNING: You have exceeded your budget!\n");
    } else {
        output.push_str(&format!("Remaining:       {:>12}\n", usage.remaining));
        if usage.is_near_limit() {
            output.push_str("Warning: You've used over 80% of your budget!\n");
        }
    }

    output
}

/// Format per-category spending with a share bar
pub fn format_category_breakdown(totals: &[CategoryTotal], overall: Money) -> String {
    if totals.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let max = totals.iter().map(|t| t.total).max().unwrap_or_default();

    let mut output = String::new();
    for row in totals {
        output.push_str(&format!(
            "{:<15} {:>12} {:>3} {} {:>6}\n",
            truncate(&row.category, 15),
            row.total,
            row.count,
            format_bar(row.total.as_f64(), max.as_f64(), BAR_WIDTH),
            format_percentage(row.percentage_of(overall))
        ));
    }
    output.push_str(&separator(15 + 1 + 12));
    output.push('\n');
    output.push_str(&format!("{:<15} {:>12}\n", "Total", overall));
    output
}
