//! Input validation
//!
//! Pure functions that turn raw user text into typed values. Every failure
//! is returned as a `ValidationError` so the caller can re-prompt.

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;
use crate::models::{Expense, Money, MoneyParseError};

/// Categories offered as suggestions. Any non-empty category is accepted.
pub const COMMON_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Entertainment",
    "Shopping",
    "Bills",
    "Health",
    "Other",
];

/// Storage and input date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse "today" (any case) or a YYYY-MM-DD date
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }

    parse_iso_date(raw)
}

/// Parse a strict YYYY-MM-DD date, as written to the expense file
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    // chrono accepts unpadded or signed fields like "2024-1-5" and "+202-01-01"
    let shaped = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(ValidationError::Date(raw.to_string()));
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ValidationError::Date(raw.to_string()))
}

/// Reason given when an expense amount rounds to less than one cent
pub const MIN_AMOUNT_REASON: &str = "must be at least 0.01";

fn parse_money(raw: &str) -> Result<Money, ValidationError> {
    Money::parse(raw).map_err(|e| match e {
        MoneyParseError::InvalidFormat(_) => ValidationError::amount(raw.trim(), "not a number"),
        MoneyParseError::OutOfRange(_) => {
            ValidationError::amount(raw.trim(), "exceeds the maximum of 1000000000000")
        }
    })
}

/// Parse an expense amount of at least one cent
pub fn parse_amount(raw: &str) -> Result<Money, ValidationError> {
    let amount = parse_money(raw)?;
    if !amount.is_positive() {
        return Err(ValidationError::amount(raw.trim(), MIN_AMOUNT_REASON));
    }
    Ok(amount)
}

/// Parse a budget amount. Zero is allowed and means "no budget".
pub fn parse_budget(raw: &str) -> Result<Money, ValidationError> {
    let amount = parse_money(raw)?;
    if amount.is_negative() {
        return Err(ValidationError::amount(raw.trim(), "budget cannot be negative"));
    }
    Ok(amount)
}

/// Trim and title-case a category name
pub fn parse_category(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Category);
    }
    Ok(title_case(trimmed))
}

/// Build an expense from raw input, failing on the first invalid field
pub fn make_expense(
    date: &str,
    category: &str,
    amount: &str,
    description: &str,
) -> Result<Expense, ValidationError> {
    let date = parse_date(date)?;
    let category = parse_category(category)?;
    let amount = parse_amount(amount)?;
    Expense::new(date, &category, amount, description)
}

/// Upper-case the first letter of every run of letters, lower-case the rest
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
