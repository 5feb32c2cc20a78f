//! Expense summaries
//!
//! Totals, sorted views and per-category breakdowns over a slice of expenses.
//! Nothing here mutates its input.

use std::collections::{BTreeSet, HashMap};
use std::slice;

use crate::models::{Expense, Money};

/// Sum of all expense amounts
pub fn total<'a, I>(expenses: I) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(Expense::amount).sum()
}

/// Expenses ordered by amount, largest first
///
/// The sort is stable, so equal amounts keep their entry order.
pub fn sort_by_amount_desc(expenses: &[Expense]) -> Vec<&Expense> {
    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.amount().cmp(&a.amount()));
    sorted
}

/// Lazily yields the expenses in one category, compared case-insensitively
pub fn filter_by_category<'a>(expenses: &'a [Expense], category: &str) -> CategoryFilter<'a> {
    CategoryFilter {
        iter: expenses.iter(),
        needle: category.trim().to_lowercase(),
    }
}

/// Iterator returned by [`filter_by_category`]
///
/// Cloning it restarts from the same position without copying the expenses.
#[derive(Debug, Clone)]
pub struct CategoryFilter<'a> {
    iter: slice::Iter<'a, Expense>,
    needle: String,
}

impl<'a> Iterator for CategoryFilter<'a> {
    type Item = &'a Expense;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;
        self.iter
            .by_ref()
            .find(|expense| expense.in_category(needle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Unique categories, in sorted order
pub fn distinct_categories(expenses: &[Expense]) -> BTreeSet<String> {
    expenses.iter().map(|e| e.category().to_string()).collect()
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub count: usize,
}

impl CategoryTotal {
    /// Share of `overall` spending, as a percentage
    pub fn percentage_of(&self, overall: Money) -> f64 {
        if overall.is_positive() {
            self.total.as_f64() / overall.as_f64() * 100.0
        } else {
            0.0
        }
    }
}

/// Spending per category, largest total first (ties by name)
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();
    for expense in expenses {
        let entry = by_category
            .entry(expense.category())
            .or_insert((Money::zero(), 0));
        entry.0 += expense.amount();
        entry.1 += 1;
    }

    let mut totals: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            count,
        })
        .collect();
    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    totals
}
