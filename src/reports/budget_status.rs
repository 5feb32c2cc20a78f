//! Budget status report
//!
//! Compares total spending against the monthly budget.

use crate::models::{BudgetConfig, Expense, Money};

use super::summary::total;

/// Usage above this percentage triggers a warning
pub const NEAR_LIMIT_PERCENT: f64 = 80.0;

/// Result of comparing spending against the budget
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetStatus {
    /// No budget has been set; percentages are meaningless
    NotSet { spent: Money },
    /// A budget is set and spending was measured against it
    Tracked(BudgetUsage),
}

impl BudgetStatus {
    pub fn usage(&self) -> Option<&BudgetUsage> {
        match self {
            Self::Tracked(usage) => Some(usage),
            Self::NotSet { .. } => None,
        }
    }
}

/// Spending measured against a non-zero budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUsage {
    pub budget: Money,
    pub spent: Money,
    pub remaining: Money,
    pub percent_used: f64,
    pub over_budget: bool,
}

impl BudgetUsage {
    /// Amount spent beyond the budget, or zero
    pub fn overspent(&self) -> Money {
        if self.over_budget {
            self.remaining.abs()
        } else {
            Money::zero()
        }
    }

    /// Still within budget but above the warning threshold
    pub fn is_near_limit(&self) -> bool {
        !self.over_budget && self.percent_used > NEAR_LIMIT_PERCENT
    }
}

/// Compute budget status for the given expenses
pub fn budget_status(expenses: &[Expense], config: &BudgetConfig) -> BudgetStatus {
    let spent = total(expenses);
    let budget = config.monthly_budget();

    if !budget.is_positive() {
        return BudgetStatus::NotSet { spent };
    }

    let remaining = budget - spent;
    BudgetStatus::Tracked(BudgetUsage {
        budget,
        spent,
        remaining,
        percent_used: spent.cents() as f64 / budget.cents() as f64 * 100.0,
        over_budget: remaining.is_negative(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(category: &str, cents: i64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            category,
            Money::from_cents(cents),
            "",
        )
        .unwrap()
    }

    fn budget(cents: i64) -> BudgetConfig {
        BudgetConfig::new(Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_over_budget() {
        let expenses = vec![
            expense("Food", 10000),
            expense("Food", 5000),
            expense("Transport", 3000),
        ];

        let status = budget_status(&expenses, &budget(12000));
        let usage = status.usage().unwrap();

        assert_eq!(usage.budget, Money::from_cents(12000));
        assert_eq!(usage.spent, Money::from_cents(18000));
        assert_eq!(usage.remaining, Money::from_cents(-6000));
        assert!(usage.over_budget);
        assert_eq!(usage.percent_used, 150.0);
        assert_eq!(usage.overspent(), Money::from_cents(6000));
        assert!(!usage.is_near_limit());
    }

    #[test]
    fn test_within_budget() {
        let status = budget_status(&[expense("Food", 4000)], &budget(10000));
        let usage = status.usage().unwrap();

        assert_eq!(usage.remaining, Money::from_cents(6000));
        assert!(!usage.over_budget);
        assert_eq!(usage.percent_used, 40.0);
        assert_eq!(usage.overspent(), Money::zero());
    }

    #[test]
    fn test_near_limit() {
        let status = budget_status(&[expense("Food", 8500)], &budget(10000));
        assert!(status.usage().unwrap().is_near_limit());

        let status = budget_status(&[expense("Food", 8000)], &budget(10000));
        assert!(!status.usage().unwrap().is_near_limit());
    }

    #[test]
    fn test_exactly_on_budget_is_not_over() {
        let status = budget_status(&[expense("Food", 10000)], &budget(10000));
        let usage = status.usage().unwrap();

        assert!(!usage.over_budget);
        assert_eq!(usage.remaining, Money::zero());
        assert_eq!(usage.percent_used, 100.0);
    }

    #[test]
    fn test_huge_spending_does_not_overflow() {
        let huge = i64::MAX / 2 + 1;
        let expenses = vec![expense("Food", huge), expense("Food", huge)];

        let status = budget_status(&expenses, &budget(Money::MAX.cents()));
        let usage = status.usage().unwrap();

        assert_eq!(usage.spent.cents(), i64::MAX);
        assert!(usage.over_budget);
        assert!(usage.remaining.is_negative());
    }

    #[test]
    fn test_no_budget_set() {
        let expenses = vec![expense("Food", 2500)];
        let status = budget_status(&expenses, &BudgetConfig::default());

        assert_eq!(
            status,
            BudgetStatus::NotSet {
                spent: Money::from_cents(2500)
            }
        );
        assert!(status.usage().is_none());

        let status = budget_status(&[], &BudgetConfig::default());
        assert!(status.usage().is_none());
    }
}
