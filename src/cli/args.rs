//! These structs provide the command line interface for the money manager.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use crate::{database_id::TransactionId, db::Database};

/// Money Manager: record income and expenses, check your balance and chart
/// where the money goes.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File path to the application SQLite database.
    #[arg(long, env = "MONEY_MANAGER_DB", default_value = Database::DEFAULT_PATH)]
    pub db_path: PathBuf,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// New transactions are dated with today's date in this timezone.
    #[arg(long, env = "MONEY_MANAGER_TIMEZONE", default_value = "Etc/UTC")]
    pub timezone: String,

    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    pub log_level: LevelFilter,

    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// The money manager commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Record money earned today.
    AddIncome(AddArgs),
    /// Record money spent today.
    AddExpense(AddArgs),
    /// Show the transaction log.
    List(ListArgs),
    /// Change the name, amount or category of a transaction.
    Edit(EditArgs),
    /// Delete a transaction.
    Delete(DeleteArgs),
    /// Show the current balance.
    Balance,
    /// Write an HTML report with expense charts and print the totals.
    Report(ReportArgs),
}

/// Args for the `add-income` and `add-expense` commands.
#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct AddArgs {
    /// What the money was for, e.g. "Groceries".
    #[arg(long)]
    pub name: String,

    /// The amount of money, a number greater than zero.
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// A label used to group expenses, e.g. "Food".
    #[arg(long)]
    pub category: Option<String>,
}

/// Args for the `list` command.
#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct ListArgs {
    /// Sort by calendar date instead of the stored date text.
    #[arg(long)]
    pub chronological: bool,

    /// Print the transactions as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Args for the `edit` command.
#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct EditArgs {
    /// The ID of the transaction, as shown by `list`.
    pub id: TransactionId,

    /// The new name.
    #[arg(long)]
    pub name: Option<String>,

    /// The new amount, a number greater than zero.
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// The new category.
    #[arg(long)]
    pub category: Option<String>,
}

/// Args for the `delete` command.
#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct DeleteArgs {
    /// The ID of the transaction, as shown by `list`.
    pub id: TransactionId,

    /// Delete without asking for confirmation.
    #[arg(long, short)]
    pub yes: bool,
}

/// Args for the `report` command.
#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Where to write the HTML report.
    #[arg(long, short, default_value = "report.html")]
    pub output: PathBuf,
}
