//! Reports module for the expense tracker
//!
//! Pure aggregation over an expense snapshot: totals, sorted and filtered
//! views, per-category breakdowns, and budget status.

pub mod budget_status;
pub mod summary;

pub use budget_status::{budget_status, BudgetStatus, BudgetUsage, NEAR_LIMIT_PERCENT};
pub use summary::{
    category_totals, distinct_categories, filter_by_category, sort_by_amount_desc, total,
    CategoryFilter, CategoryTotal,
};
