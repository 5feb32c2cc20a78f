//! Expense model
//!
//! A single recorded spending transaction. Fields are private so that an
//! `Expense` can only come out of the validated constructor.

use std::fmt;

use chrono::NaiveDate;

use super::money::Money;
use crate::error::ValidationError;
use crate::validation;

/// One dated, categorized expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    date: NaiveDate,
    category: String,
    amount: Money,
    description: String,
}

impl Expense {
    /// Create a new expense
    ///
    /// The category is trimmed and title-cased. Fails if the category is
    /// empty or the amount is not strictly positive.
    pub fn new(
        date: NaiveDate,
        category: &str,
        amount: Money,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let category = validation::parse_category(category)?;

        if !amount.is_positive() {
            return Err(ValidationError::amount(
                amount.to_decimal_string(),
                validation::MIN_AMOUNT_REASON,
            ));
        }

        Ok(Self {
            date,
            category,
            amount,
            description: description.into(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Case-insensitive category comparison
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.trim().to_lowercase()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(date(), "food", Money::from_cents(1299), "Lunch").unwrap();
        assert_eq!(expense.date(), date());
        assert_eq!(expense.category(), "Food");
        assert_eq!(expense.amount().cents(), 1299);
        assert_eq!(expense.description(), "Lunch");
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(Expense::new(date(), "Food", Money::zero(), "").is_err());
        assert!(Expense::new(date(), "Food", Money::from_cents(-100), "").is_err());
    }

    #[test]
    fn test_rejects_empty_category() {
        assert_eq!(
            Expense::new(date(), "  ", Money::from_cents(100), ""),
            Err(ValidationError::Category)
        );
    }

    #[test]
    fn test_in_category() {
        let expense = Expense::new(date(), "Food", Money::from_cents(100), "").unwrap();
        assert!(expense.in_category("food"));
        assert!(expense.in_category(" FOOD "));
        assert!(!expense.in_category("Transport"));
    }

    #[test]
    fn test_display() {
        let expense = Expense::new(date(), "Food", Money::from_cents(1050), "Pizza").unwrap();
        assert_eq!(expense.to_string(), "2025-01-15 Food $10.50 (Pizza)");

        let expense = Expense::new(date(), "Bills", Money::from_cents(5000), "").unwrap();
        assert_eq!(expense.to_string(), "2025-01-15 Bills $50.00");
    }
}
