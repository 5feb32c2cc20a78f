//! Expense tracker service
//!
//! Owns the in-memory expense list and budget config for one session and
//! mediates between validation, storage and reports. Expenses are only ever
//! appended; there is no edit or delete.

use tracing::{debug, error, info};

use crate::error::{ExpenseError, ExpenseResult, LoadWarning};
use crate::models::{BudgetConfig, Expense, Money};
use crate::reports::{self, BudgetStatus, CategoryFilter, CategoryTotal};
use crate::storage::Storage;
use crate::validation;

/// Lifecycle of a tracker session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// Accepting operations
    Active,
    /// Saved for the last time; no further operations
    Closed,
}

/// Session state for one run of the expense tracker
#[derive(Debug)]
pub struct ExpenseTracker {
    storage: Storage,
    expenses: Vec<Expense>,
    config: BudgetConfig,
    warnings: Vec<LoadWarning>,
    state: TrackerState,
    dirty: bool,
    expenses_unreadable: bool,
}

impl ExpenseTracker {
    /// Load expenses and config from storage
    ///
    /// Never fails: missing files give an empty session and problems are
    /// kept in [`warnings`](Self::warnings).
    pub fn initialize(storage: Storage) -> Self {
        let (expenses, mut warnings) = storage.load_expenses().into_parts();
        let (config, config_warnings) = storage.load_config().into_parts();
        warnings.extend(config_warnings);
        let expenses_unreadable = warnings
            .iter()
            .any(|w| matches!(w, LoadWarning::Unreadable { .. }));

        info!(
            expenses = expenses.len(),
            budget = %config.monthly_budget(),
            warnings = warnings.len(),
            "Tracker initialized"
        );

        Self {
            storage,
            expenses,
            config,
            warnings,
            state: TrackerState::Active,
            dirty: false,
            expenses_unreadable,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    /// Problems encountered while loading
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Number of stored rows that were skipped on load
    ///
    /// Saving rewrites the expense file from memory, so these rows are lost
    /// on the next save.
    pub fn dropped_rows(&self) -> usize {
        self.warnings.iter().filter(|w| w.is_skipped_row()).count()
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Check for changes not yet persisted
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    fn ensure_active(&self) -> ExpenseResult<()> {
        match self.state {
            TrackerState::Active => Ok(()),
            TrackerState::Closed => Err(ExpenseError::Closed),
        }
    }

    /// Validate raw input and append the resulting expense
    ///
    /// On a validation failure nothing is recorded.
    pub fn record_expense(
        &mut self,
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> ExpenseResult<Expense> {
        self.ensure_active()?;

        let expense = validation::make_expense(date, category, amount, description)?;
        debug!(%expense, "Recorded expense");

        self.expenses.push(expense.clone());
        self.dirty = true;
        Ok(expense)
    }

    /// Set the monthly budget; zero clears it
    pub fn set_budget(&mut self, amount: &str) -> ExpenseResult<Money> {
        self.ensure_active()?;

        let budget = validation::parse_budget(amount)?;
        self.config.set_monthly_budget(budget)?;
        self.dirty = true;

        debug!(%budget, "Monthly budget updated");
        Ok(budget)
    }

    /// Write expenses and config to storage
    ///
    /// Both writes are attempted. If either fails the first error is
    /// returned and the in-memory state is left as it was. An expense file
    /// that could not be read at startup is never overwritten.
    pub fn persist(&mut self) -> ExpenseResult<()> {
        self.ensure_active()?;

        let expenses_saved = if self.expenses_unreadable {
            Err(ExpenseError::Storage(format!(
                "refusing to overwrite {}, which could not be read at startup",
                self.storage.paths().expenses_file().display()
            )))
        } else {
            self.storage.save_expenses(&self.expenses)
        };
        let config_saved = self.storage.save_config(&self.config);

        if let Err(e) = &expenses_saved {
            error!(error = %e, "Failed to save expenses");
        }
        if let Err(e) = &config_saved {
            error!(error = %e, "Failed to save budget config");
        }
        expenses_saved.and(config_saved)?;

        self.dirty = false;
        info!(expenses = self.expenses.len(), "Data saved");
        Ok(())
    }

    /// Persist one last time and stop accepting operations
    ///
    /// The tracker stays active if the save fails.
    pub fn close(&mut self) -> ExpenseResult<()> {
        self.persist()?;
        self.state = TrackerState::Closed;
        Ok(())
    }

    pub fn total(&self) -> Money {
        reports::total(&self.expenses)
    }

    pub fn sorted_by_amount(&self) -> Vec<&Expense> {
        reports::sort_by_amount_desc(&self.expenses)
    }

    pub fn by_category(&self, category: &str) -> CategoryFilter<'_> {
        reports::filter_by_category(&self.expenses, category)
    }

    /// Unique categories present, sorted
    pub fn categories(&self) -> Vec<String> {
        reports::distinct_categories(&self.expenses)
            .into_iter()
            .collect()
    }

    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        reports::category_totals(&self.expenses)
    }

    pub fn budget_status(&self) -> BudgetStatus {
        reports::budget_status(&self.expenses, &self.config)
    }
}
