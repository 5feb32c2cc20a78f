//! Interactive menu mode
//!
//! A numbered menu over any line-based input. Field prompts repeat until the
//! value validates, so a command built here only fails for storage reasons.

use std::io::{BufRead, Write};

use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseTracker;
use crate::validation::{self, COMMON_CATEGORIES, DATE_FORMAT};

use super::command::{dispatch, Command, Outcome};

/// An entry in the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewAll,
    ViewSorted,
    ViewByCategory,
    SetBudget,
    TrackBudget,
    SaveAndExit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddExpense,
        MenuChoice::ViewAll,
        MenuChoice::ViewSorted,
        MenuChoice::ViewByCategory,
        MenuChoice::SetBudget,
        MenuChoice::TrackBudget,
        MenuChoice::SaveAndExit,
    ];

    /// Parse a menu number like "3"
    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0) + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::ViewAll => "View All Expenses",
            Self::ViewSorted => "View Expenses Sorted by Amount",
            Self::ViewByCategory => "View Expenses by Category",
            Self::SetBudget => "Set Monthly Budget",
            Self::TrackBudget => "Track Budget",
            Self::SaveAndExit => "Save and Exit",
        }
    }
}

/// Line-oriented terminal session
struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Print a prompt and read one line; `None` once input is exhausted
    fn prompt(&mut self, message: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until `parse` accepts the answer
    fn prompt_valid<T, E, F>(&mut self, message: &str, parse: F) -> ExpenseResult<Option<(String, T)>>
    where
        E: std::fmt::Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let Some(answer) = self.prompt(message)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some((answer, value))),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
    }

    fn show_menu(&mut self) -> ExpenseResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "=".repeat(40))?;
        writeln!(self.output, "Personal Expense Tracker")?;
        writeln!(self.output, "{}", "=".repeat(40))?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn read_expense(&mut self) -> ExpenseResult<Option<Command>> {
        let Some((_, date)) =
            self.prompt_valid("Enter date (YYYY-MM-DD) or 'today': ", validation::parse_date)?
        else {
            return Ok(None);
        };

        writeln!(
            self.output,
            "Common categories: {}",
            COMMON_CATEGORIES.join(", ")
        )?;
        let Some((category, _)) =
            self.prompt_valid("Enter category: ", validation::parse_category)?
        else {
            return Ok(None);
        };

        let Some((amount, _)) = self.prompt_valid("Enter amount: ", validation::parse_amount)?
        else {
            return Ok(None);
        };

        let Some(description) = self.prompt("Enter description (optional): ")? else {
            return Ok(None);
        };

        Ok(Some(Command::AddExpense {
            date: date.format(DATE_FORMAT).to_string(),
            category,
            amount,
            description,
        }))
    }

    fn read_category(&mut self, tracker: &ExpenseTracker) -> ExpenseResult<Option<Command>> {
        let categories = tracker.categories();
        if categories.is_empty() {
            return Ok(Some(Command::ListCategories));
        }

        writeln!(self.output, "Available categories: {}", categories.join(", "))?;
        Ok(self
            .prompt_valid("Enter category to filter: ", validation::parse_category)?
            .map(|(category, _)| Command::ListCategory { category }))
    }

    fn read_budget(&mut self, tracker: &ExpenseTracker) -> ExpenseResult<Option<Command>> {
        let current = tracker.config();
        if current.is_set() {
            writeln!(
                self.output,
                "Current monthly budget: {}",
                current.monthly_budget()
            )?;
        }

        Ok(self
            .prompt_valid("Enter monthly budget: ", validation::parse_budget)?
            .map(|(amount, _)| Command::SetBudget { amount }))
    }

    /// Ask whether to leave after a failed save
    fn confirm_exit(&mut self, err: &ExpenseError) -> ExpenseResult<bool> {
        writeln!(self.output, "Error saving data: {}", err)?;
        let answer = self.prompt("Save failed. Exit anyway? (y/n): ")?;
        Ok(match answer {
            Some(answer) => answer.eq_ignore_ascii_case("y"),
            None => true,
        })
    }
}

/// Run the menu loop until the user saves and exits or input ends
///
/// Closing the input without choosing "Save and Exit" discards unsaved
/// changes.
pub fn run_interactive<R, W>(tracker: &mut ExpenseTracker, input: R, output: W) -> ExpenseResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session { input, output };

    writeln!(session.output, "Welcome to Personal Expense Tracker!")?;
    if !tracker.expenses().is_empty() {
        writeln!(
            session.output,
            "Loaded {} expenses from file",
            tracker.expenses().len()
        )?;
    }
    let dropped = tracker.dropped_rows();
    if dropped > 0 {
        writeln!(
            session.output,
            "Note: {} invalid row(s) were skipped and will be removed on save",
            dropped
        )?;
    }
    if tracker.config().is_set() {
        writeln!(
            session.output,
            "Monthly budget: {}",
            tracker.config().monthly_budget()
        )?;
    }

    loop {
        session.show_menu()?;
        let Some(answer) = session.prompt("Enter your choice (1-7): ")? else {
            break;
        };
        let Some(choice) = MenuChoice::parse(&answer) else {
            writeln!(session.output, "Invalid choice. Please select 1-7.")?;
            continue;
        };

        let command = match choice {
            MenuChoice::AddExpense => session.read_expense()?,
            MenuChoice::ViewAll => Some(Command::ListAll),
            MenuChoice::ViewSorted => Some(Command::ListSorted),
            MenuChoice::ViewByCategory => session.read_category(tracker)?,
            MenuChoice::SetBudget => session.read_budget(tracker)?,
            MenuChoice::TrackBudget => Some(Command::BudgetStatus),
            MenuChoice::SaveAndExit => Some(Command::SaveAndExit),
        };
        let Some(command) = command else {
            break;
        };

        let saving = command == Command::SaveAndExit;
        match dispatch(tracker, command) {
            Ok(Outcome::Closed) => {
                write!(session.output, "{}", Outcome::Closed.render())?;
                writeln!(session.output, "Thank you for using Personal Expense Tracker!")?;
                return Ok(());
            }
            Ok(outcome) => write!(session.output, "{}", outcome.render())?,
            Err(e) if saving => {
                if session.confirm_exit(&e)? {
                    return Ok(());
                }
            }
            Err(e) => writeln!(session.output, "Error: {}", e)?,
        }
    }

    if tracker.is_dirty() {
        writeln!(session.output)?;
        writeln!(session.output, "Input closed; unsaved changes were discarded.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpensePaths;
    use crate::models::Money;
    use crate::services::TrackerState;
    use crate::storage::Storage;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn open_tracker(temp_dir: &TempDir) -> ExpenseTracker {
        ExpenseTracker::initialize(Storage::new(ExpensePaths::with_base_dir(temp_dir.path())))
    }

    fn run(tracker: &mut ExpenseTracker, script: &str) -> String {
        let mut output = Vec::new();
        run_interactive(tracker, Cursor::new(script.as_bytes()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddExpense));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::SaveAndExit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("add"), None);
        assert_eq!(MenuChoice::TrackBudget.number(), 6);
    }

    #[test]
    fn test_add_and_save() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracker = open_tracker(&temp_dir);

        let output = run(&mut tracker, "1\n2025-03-01\nfood\n12.5\nLunch\n7\n");

        assert!(output.contains("Common categories: Food, Transport"));
        assert!(output.contains("Expense added: $12.50 for Food"));
        assert!(output.contains("Data saved successfully"));
        assert_eq!(tracker.state(), TrackerState::Closed);

        let reloaded = open_tracker(&temp_dir);
        assert_eq!(reloaded.expenses().len(), 1);
        assert_eq!(reloaded.expenses()[0].description(), "Lunch");
    }

    #[test]
    fn test_reprompts_on_invalid_fields() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracker = open_tracker(&temp_dir);

        let output = run(
            &mut tracker,
            "9\n1\n2025-13-01\n2025-03-01\n  \nTransport\n-3\nabc\n3\n\n2\n7\n",
        );

        assert!(output.contains("Invalid choice. Please select 1-7."));
        assert!(output.contains("Invalid date '2025-13-01'"));
        assert!(output.contains("Category cannot be empty"));
        assert!(output.contains("must be at least 0.01"));
        assert!(output.contains("not a number"));
        assert!(output.contains("Total Expenses: $3.00"));
        assert_eq!(tracker.expenses().len(), 1);
        assert_eq!(tracker.expenses()[0].amount(), Money::from_cents(300));
    }

    #[test]
    fn test_budget_and_category_views() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracker = open_tracker(&temp_dir);
        tracker.record_expense("2025-03-01", "Food", "100", "").unwrap();
        tracker.record_expense("2025-03-02", "Bills", "50", "").unwrap();

        let output = run(&mut tracker, "4\nfood\n5\n-10\n120\n6\n7\n");

        assert!(output.contains("Available categories: Bills, Food"));
        assert!(output.contains("Expenses in category: Food"));
        assert!(output.contains("budget cannot be negative"));
        assert!(output.contains("Monthly budget set to: $120.00"));
        assert!(output.contains("125.0%"));
        assert!(output.contains("exceeded"));
    }

    #[test]
    fn test_category_view_without_expenses() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracker = open_tracker(&temp_dir);

        let output = run(&mut tracker, "4\n7\n");

        assert!(output.contains("No expenses recorded yet."));
    }

    #[test]
    fn test_failed_save_can_be_retried_or_abandoned() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("expenses.csv")).unwrap();
        let mut tracker = open_tracker(&temp_dir);

        let output = run(&mut tracker, "7\nn\n7\ny\n");

        assert_eq!(output.matches("Save failed. Exit anyway?").count(), 2);
        assert!(!output.contains("Data saved successfully"));
        assert_eq!(tracker.state(), TrackerState::Active);
    }

    #[test]
    fn test_end_of_input_discards_changes() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracker = open_tracker(&temp_dir);

        let output = run(&mut tracker, "5\n300\n");

        assert!(output.contains("unsaved changes were discarded"));
        assert!(!temp_dir.path().join("config.json").exists());
    }

    #[test]
    fn test_welcome_notes_skipped_rows() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("expenses.csv"),
            "date,category,amount,description\n2025-01-01,Food,1,ok\n2025-01-02,Food,0,bad\n",
        )
        .unwrap();
        let mut tracker = open_tracker(&temp_dir);

        let output = run(&mut tracker, "");

        assert!(output.contains("Loaded 1 expenses from file"));
        assert!(output.contains("1 invalid row(s) were skipped"));
    }

    #[test]
    fn test_welcome_shows_loaded_state() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracker = open_tracker(&temp_dir);
        tracker.record_expense("2025-03-01", "Food", "1", "").unwrap();
        tracker.set_budget("40").unwrap();
        tracker.persist().unwrap();

        let mut reopened = open_tracker(&temp_dir);
        let output = run(&mut reopened, "");

        assert!(output.contains("Loaded 1 expenses from file"));
        assert!(output.contains("Monthly budget: $40.00"));
        assert!(!output.contains("discarded"));
    }
}
