//! Expense repository for CSV storage
//!
//! Manages loading and saving expenses to expenses.csv. Loading is tolerant:
//! a bad row is skipped with a warning, and an unreadable file yields an
//! empty list plus a warning.

use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Deserialize;
use tracing::{debug, warn};

use super::file_io::write_atomic;
use super::Loaded;
use crate::error::{ExpenseError, ExpenseResult, LoadWarning};
use crate::models::Expense;
use crate::validation::{self, DATE_FORMAT};

/// Column names of the expense file, in order
pub const HEADER: [&str; 4] = ["date", "category", "amount", "description"];

/// One raw row as stored on disk, before validation
#[derive(Debug, Deserialize)]
struct ExpenseRow {
    date: String,
    category: String,
    amount: String,
    description: String,
}

impl ExpenseRow {
    fn into_expense(self) -> Result<Expense, ExpenseError> {
        let date = validation::parse_iso_date(&self.date)?;
        let category = validation::parse_category(&self.category)?;
        let amount = validation::parse_amount(&self.amount)?;
        Ok(Expense::new(date, &category, amount, self.description)?)
    }
}

/// Repository for expense persistence
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all valid expenses from disk
    ///
    /// A missing file is the first-run case and returns an empty list with no
    /// warnings.
    pub fn load(&self) -> Loaded<Vec<Expense>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No expense file yet");
            return Loaded::clean(Vec::new());
        }

        match self.read_all() {
            Ok(loaded) => {
                debug!(
                    count = loaded.value.len(),
                    skipped = loaded.warnings.len(),
                    "Loaded expenses"
                );
                loaded
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read expense file");
                Loaded::with_warning(
                    Vec::new(),
                    LoadWarning::Unreadable {
                        path: self.path.clone(),
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    fn read_all(&self) -> ExpenseResult<Loaded<Vec<Expense>>> {
        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let headers = reader.headers()?.clone();

        let mut expenses = Vec::new();
        let mut warnings = Vec::new();

        for result in reader.records() {
            let parsed = match result {
                Ok(record) => {
                    let line = record.position().map_or(0, |p| p.line());
                    parse_record(&record, &headers).map_err(|reason| (line, reason))
                }
                Err(e) => {
                    // Invalid UTF-8 only spoils this record; keep reading
                    let utf8_line = match e.kind() {
                        csv::ErrorKind::Utf8 { pos, .. } => {
                            Some(pos.as_ref().map_or(0, |p| p.line()))
                        }
                        _ => None,
                    };
                    match utf8_line {
                        Some(line) => Err((line, e.to_string())),
                        None => return Err(e.into()),
                    }
                }
            };

            match parsed {
                Ok(expense) => expenses.push(expense),
                Err((line, reason)) => {
                    warn!(line, %reason, "Skipping invalid expense");
                    warnings.push(LoadWarning::SkippedRow { line, reason });
                }
            }
        }

        Ok(Loaded {
            value: expenses,
            warnings,
        })
    }

    /// Replace the expense file with the given expenses
    ///
    /// An empty list still produces a header-only file.
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_atomic(&self.path, |file| Self::write_to(expenses, file))?;

        debug!(count = expenses.len(), path = %self.path.display(), "Saved expenses");
        Ok(())
    }

    /// Write expenses as CSV, header first, to any writer
    pub fn write_to<W: Write>(expenses: &[Expense], out: W) -> ExpenseResult<()> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
        writer.write_record(HEADER)?;
        for expense in expenses {
            writer.write_record([
                expense.date().format(DATE_FORMAT).to_string(),
                expense.category().to_string(),
                expense.amount().to_decimal_string(),
                expense.description().to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn parse_record(record: &StringRecord, headers: &StringRecord) -> Result<Expense, String> {
    let row: ExpenseRow = record
        .deserialize(Some(headers))
        .map_err(|e| e.to_string())?;
    row.into_expense().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn expense(day: u32, category: &str, cents: i64, description: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            category,
            Money::from_cents(cents),
            description,
        )
        .unwrap()
    }

    fn repo(temp_dir: &TempDir) -> ExpenseRepository {
        ExpenseRepository::new(temp_dir.path().join("expenses.csv"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = repo(&temp_dir).load();

        assert!(loaded.value.is_empty());
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        let expenses = vec![
            expense(1, "Food", 1250, "Lunch, with \"friends\""),
            expense(2, "Transport", 300, "Bus\nreturn trip"),
            expense(3, "Bills", 9999, ""),
        ];

        repo.save(&expenses).unwrap();
        let loaded = repo.load();

        assert_eq!(loaded.value, expenses);
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_save_empty_writes_header() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);

        repo.save(&[]).unwrap();

        let contents = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(contents, "date,category,amount,description\n");
        assert!(repo.load().value.is_empty());
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);

        repo.save(&[expense(1, "Food", 100, ""), expense(2, "Food", 200, "")])
            .unwrap();
        repo.save(&[expense(3, "Health", 300, "")]).unwrap();

        let loaded = repo.load();
        assert_eq!(loaded.value, vec![expense(3, "Health", 300, "")]);
    }

    #[test]
    fn test_corrupted_row_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        fs::write(
            repo.path(),
            "date,category,amount,description\n\
             2025-03-01,Food,12.50,Lunch\n\
             2025-03-02,Food,abc,Broken\n\
             2025-03-03,transport,3,Bus\n",
        )
        .unwrap();

        let loaded = repo.load();

        assert_eq!(loaded.value.len(), 2);
        assert_eq!(loaded.value[1].category(), "Transport");
        assert_eq!(loaded.warnings.len(), 1);
        assert!(matches!(
            &loaded.warnings[0],
            LoadWarning::SkippedRow { line: 3, .. }
        ));
    }

    #[test]
    fn test_invalid_fields_and_short_rows_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        fs::write(
            repo.path(),
            "date,category,amount,description\n\
             2025-02-30,Food,1,Bad date\n\
             2025-03-01,,1,No category\n\
             2025-03-01,Food,-4,Negative\n\
             2025-03-01,Food\n\
             today,Food,1,Not a stored date\n\
             2025-03-05,Other,7.25,\n",
        )
        .unwrap();

        let loaded = repo.load();

        assert_eq!(loaded.value, vec![expense(5, "Other", 725, "")]);
        assert_eq!(loaded.warnings.len(), 5);
        assert!(loaded.warnings.iter().all(LoadWarning::is_skipped_row));
    }

    #[test]
    fn test_unreadable_file_yields_empty_with_warning() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as CSV
        let path = temp_dir.path().join("expenses.csv");
        fs::create_dir(&path).unwrap();

        let loaded = ExpenseRepository::new(path).load();

        assert!(loaded.value.is_empty());
        assert!(matches!(
            loaded.warnings.as_slice(),
            [LoadWarning::Unreadable { .. }]
        ));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::create_dir(&path).unwrap();

        let result = ExpenseRepository::new(path).save(&[expense(1, "Food", 100, "")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_to() {
        let mut out = Vec::new();
        ExpenseRepository::write_to(&[expense(9, "Food", 450, "Tea, biscuits")], &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "date,category,amount,description\n2025-03-09,Food,4.50,\"Tea, biscuits\"\n"
        );
    }
}
