use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{dispatch, run_interactive, BudgetCommands, Command};
use expense_cli::config::paths::{ExpensePaths, DATA_DIR_ENV};
use expense_cli::logging::init_logging;
use expense_cli::services::ExpenseTracker;
use expense_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker with a monthly budget",
    long_about = "Record dated, categorized expenses from the command line, list and \
                  filter them, and see how spending compares to a monthly budget. \
                  Data is kept in a CSV file and a small JSON config."
)]
struct Cli {
    /// Directory holding expenses.csv and config.json
    #[arg(long, global = true, value_name = "DIR", env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD or "today")
        #[arg(short, long, default_value = "today")]
        date: String,
        /// Description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },

    /// List expenses
    List {
        /// Sort by amount, highest first
        #[arg(short, long, conflicts_with = "category")]
        sorted: bool,
        /// Only show expenses in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the categories in use
    Categories,

    /// Show spending per category
    Breakdown,

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Launch the interactive menu
    #[command(alias = "ui")]
    Interactive,

    /// Show current configuration and paths
    Config,
}

impl Commands {
    /// Map a one-shot subcommand to a tracker command
    fn into_command(self) -> Option<Command> {
        let command = match self {
            Commands::Add {
                amount,
                category,
                date,
                description,
            } => Command::AddExpense {
                date,
                category,
                amount,
                description,
            },
            Commands::List { category: Some(category), .. } => Command::ListCategory { category },
            Commands::List { sorted: true, .. } => Command::ListSorted,
            Commands::List { .. } => Command::ListAll,
            Commands::Categories => Command::ListCategories,
            Commands::Breakdown => Command::Breakdown,
            Commands::Budget(cmd) => cmd.into(),
            Commands::Interactive | Commands::Config => return None,
        };
        Some(command)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };

    match cli.command {
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Config file:    {}", paths.config_file().display());
            println!();
            println!("Override with --data-dir or the {} variable.", DATA_DIR_ENV);
        }
        Some(Commands::Interactive) => {
            paths.ensure_directories()?;
            let mut tracker = open_tracker(paths);
            let stdin = io::stdin();
            run_interactive(&mut tracker, stdin.lock(), io::stdout())?;
        }
        Some(cmd) => {
            if let Some(command) = cmd.into_command() {
                let mut tracker = open_tracker(paths);
                run_command(&mut tracker, command)?;
            }
        }
        None => {
            println!("expense - Personal expense tracker");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense interactive' to launch the menu.");
        }
    }

    Ok(())
}

/// Load the tracker and report anything that could not be loaded
fn open_tracker(paths: ExpensePaths) -> ExpenseTracker {
    let tracker = ExpenseTracker::initialize(Storage::new(paths));
    for warning in tracker.warnings() {
        eprintln!("warning: {}", warning);
    }
    tracker
}

/// Run one command and persist if it changed anything
fn run_command(tracker: &mut ExpenseTracker, command: Command) -> Result<()> {
    let outcome = dispatch(tracker, command)?;
    print!("{}", outcome.render());

    if tracker.is_dirty() {
        let dropped = tracker.dropped_rows();
        if dropped > 0 {
            eprintln!(
                "warning: {} invalid row(s) will be removed from {}",
                dropped,
                tracker.storage().paths().expenses_file().display()
            );
        }
        tracker.storage().paths().ensure_directories()?;
        tracker.persist()?;
    }
    Ok(())
}
