//! The command line front end: parses commands and prints the results.

mod args;

use std::io::Write;

use dialoguer::Confirm;

pub use args::{AddArgs, Args, Command, DeleteArgs, EditArgs, ListArgs, ReportArgs};

use crate::{
    Error,
    clock::{Clock, SystemClock},
    db::Database,
    html::format_currency,
    input::{TransactionForm, validate_edit},
    manager::MoneyManager,
    report::{ReportData, write_report},
    stores::{SQLiteTransactionStore, TransactionStore},
    transaction::{Transaction, TransactionType},
};

/// Open the database named in `args` and run its command, writing the output to `out`.
///
/// # Errors
/// Returns an error if the timezone is invalid, the database cannot be
/// opened, or the command fails.
pub fn run(args: Args, out: &mut impl Write) -> Result<(), Error> {
    let clock = SystemClock::new(&args.timezone)?;
    let store = SQLiteTransactionStore::new(Database::new(&args.db_path))?;
    let mut manager = MoneyManager::new(store, clock);

    execute(args.command, &mut manager, out, &mut confirm_delete)
}

/// Run a single command against `manager`.
///
/// `confirm` is asked before a transaction is deleted without `--yes`.
pub fn execute<S, C>(
    command: Command,
    manager: &mut MoneyManager<S, C>,
    out: &mut impl Write,
    confirm: &mut dyn FnMut(&Transaction) -> Result<bool, Error>,
) -> Result<(), Error>
where
    S: TransactionStore,
    C: Clock,
{
    match command {
        Command::AddIncome(add_args) => add(TransactionType::Income, add_args, manager, out),
        Command::AddExpense(add_args) => add(TransactionType::Expense, add_args, manager, out),
        Command::List(list_args) => list(list_args, manager, out),
        Command::Edit(edit_args) => edit(edit_args, manager, out),
        Command::Delete(delete_args) => delete(delete_args, manager, out, confirm),
        Command::Balance => {
            writeln!(out, "Balance: {}", format_currency(manager.get_balance()?))?;
            Ok(())
        }
        Command::Report(report_args) => report(report_args, manager, out),
    }
}

fn add<S, C>(
    transaction_type: TransactionType,
    add_args: AddArgs,
    manager: &mut MoneyManager<S, C>,
    out: &mut impl Write,
) -> Result<(), Error>
where
    S: TransactionStore,
    C: Clock,
{
    let form = TransactionForm::validate(
        &add_args.name,
        &add_args.amount,
        add_args.category.as_deref(),
    )?;
    let transaction = manager.add_transaction(
        transaction_type,
        form.amount,
        &form.name,
        form.category.as_deref(),
    )?;

    writeln!(
        out,
        "Added {} #{}: {} for {}",
        transaction.transaction_type,
        transaction.id,
        transaction.name,
        format_currency(transaction.amount)
    )?;

    Ok(())
}

fn list<S, C>(
    list_args: ListArgs,
    manager: &MoneyManager<S, C>,
    out: &mut impl Write,
) -> Result<(), Error>
where
    S: TransactionStore,
    C: Clock,
{
    let transactions = if list_args.chronological {
        manager.get_transactions_chronological()?
    } else {
        manager.get_transactions()?
    };

    if list_args.json {
        serde_json::to_writer_pretty(&mut *out, &transactions)?;
        writeln!(out)?;
        return Ok(());
    }

    if transactions.is_empty() {
        writeln!(out, "No transactions recorded yet.")?;
        return Ok(());
    }

    write_table(&transactions, out)?;

    Ok(())
}

fn write_table(transactions: &[Transaction], out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<6}{:<20}{:<9}{:<24}{:>12}  {}",
        "ID", "Date", "Type", "Name", "Amount", "Category"
    )?;
    writeln!(out, "{}", "-".repeat(83))?;

    for transaction in transactions {
        writeln!(
            out,
            "{:<6}{:<20}{:<9}{:<24}{:>12}  {}",
            transaction.id,
            transaction.date.as_str(),
            transaction.transaction_type.as_str(),
            transaction.name,
            format_currency(transaction.amount),
            transaction.category.as_deref().unwrap_or("")
        )?;
    }

    Ok(())
}

fn edit<S, C>(
    edit_args: EditArgs,
    manager: &mut MoneyManager<S, C>,
    out: &mut impl Write,
) -> Result<(), Error>
where
    S: TransactionStore,
    C: Clock,
{
    let update = validate_edit(
        edit_args.name.as_deref(),
        edit_args.amount.as_deref(),
        edit_args.category.as_deref(),
    )?;

    if update.is_empty() {
        writeln!(
            out,
            "Nothing to update, pass at least one of --name, --amount or --category."
        )?;
        return Ok(());
    }

    if !manager.edit_transaction(edit_args.id, &update)? {
        return Err(Error::NotFound);
    }

    let transaction = manager.get_transaction(edit_args.id)?;
    writeln!(out, "Updated transaction #{}:", transaction.id)?;
    write_table(std::slice::from_ref(&transaction), out)?;

    Ok(())
}

fn delete<S, C>(
    delete_args: DeleteArgs,
    manager: &mut MoneyManager<S, C>,
    out: &mut impl Write,
    confirm: &mut dyn FnMut(&Transaction) -> Result<bool, Error>,
) -> Result<(), Error>
where
    S: TransactionStore,
    C: Clock,
{
    let transaction = manager.get_transaction(delete_args.id)?;

    if !delete_args.yes && !confirm(&transaction)? {
        writeln!(out, "Cancelled.")?;
        return Ok(());
    }

    if !manager.delete_transaction(transaction.id)? {
        return Err(Error::NotFound);
    }

    writeln!(
        out,
        "Deleted transaction #{}: {}",
        transaction.id, transaction.name
    )?;

    Ok(())
}

fn report<S, C>(
    report_args: ReportArgs,
    manager: &MoneyManager<S, C>,
    out: &mut impl Write,
) -> Result<(), Error>
where
    S: TransactionStore,
    C: Clock,
{
    let data = ReportData {
        balance: manager.get_balance()?,
        expenses_by_category: manager.get_expense_by_category()?,
        monthly_expenses: manager.get_monthly_expenses()?,
    };

    write_report(&report_args.output, &data)?;

    writeln!(out, "Balance: {}", format_currency(data.balance))?;
    writeln!(out)?;
    writeln!(out, "Expenses by category:")?;
    if data.expenses_by_category.is_empty() {
        writeln!(out, "  No expense data")?;
    }
    for (category, total) in &data.expenses_by_category {
        writeln!(out, "  {:<24}{:>12}", category, format_currency(*total))?;
    }
    writeln!(out)?;
    writeln!(out, "Monthly expenses:")?;
    if data.monthly_expenses.is_empty() {
        writeln!(out, "  No monthly data")?;
    }
    for (month, total) in &data.monthly_expenses {
        writeln!(out, "  {:<24}{:>12}", month, format_currency(*total))?;
    }
    writeln!(out)?;
    writeln!(out, "Wrote report to {}", report_args.output.display())?;

    Ok(())
}

/// Ask on the terminal whether `transaction` should be deleted.
fn confirm_delete(transaction: &Transaction) -> Result<bool, Error> {
    Confirm::new()
        .with_prompt(format!(
            "Are you sure you want to delete '{}' for {}?",
            transaction.name,
            format_currency(transaction.amount)
        ))
        .default(false)
        .interact()
        .map_err(|error| Error::IoError(error.to_string()))
}
