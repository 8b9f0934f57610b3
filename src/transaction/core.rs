//! Defines the core data models and database queries for transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Connection, Row, params,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, database_id::TransactionId, transaction::date::TransactionDate};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The text stored in the `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidTransactionType(other.to_owned())),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database.
    pub id: TransactionId,
    /// Whether this is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The amount of money spent or earned. Always greater than zero.
    pub amount: f64,
    /// What the transaction was for.
    pub name: String,
    /// A free-text label used to group expenses.
    pub category: Option<String>,
    /// When the transaction was recorded.
    pub date: TransactionDate,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [NewTransaction] for discoverability.
    pub fn build(
        transaction_type: TransactionType,
        amount: f64,
        name: &str,
        date: Date,
    ) -> NewTransaction {
        NewTransaction {
            transaction_type,
            amount,
            name: name.to_owned(),
            category: None,
            date: TransactionDate::from_date(date),
        }
    }
}

/// A builder for transactions that have not been saved yet.
///
/// The date is passed in explicitly rather than read from the wall clock, see
/// [crate::Clock].
#[derive(Debug, PartialEq, Clone)]
pub struct NewTransaction {
    /// Whether this is income or an expense.
    pub transaction_type: TransactionType,
    /// The amount of money, expected to be greater than zero.
    pub amount: f64,
    /// What the transaction was for.
    pub name: String,
    /// An optional label for grouping expenses.
    pub category: Option<String>,
    /// The date the transaction is recorded on.
    pub date: TransactionDate,
}

impl NewTransaction {
    /// Set the category for the transaction.
    pub fn category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(str::to_owned);
        self
    }
}

/// The fields to change on an existing transaction.
///
/// Only the name, amount and category can be edited. Blank text and amounts
/// that are not greater than zero are treated as not supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionUpdate {
    name: Option<String>,
    amount: Option<f64>,
    category: Option<String>,
}

impl TransactionUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the new name.
    pub fn name(mut self, name: &str) -> Self {
        let name = name.trim();
        self.name = (!name.is_empty()).then(|| name.to_owned());
        self
    }

    /// Set the new amount.
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = (amount.is_finite() && amount > 0.0).then_some(amount);
        self
    }

    /// Set the new category.
    pub fn category(mut self, category: &str) -> Self {
        let category = category.trim();
        self.category = (!category.is_empty()).then(|| category.to_owned());
        self
    }

    /// The new name, if one was supplied.
    pub fn new_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The new amount, if one was supplied.
    pub fn new_amount(&self) -> Option<f64> {
        self.amount
    }

    /// The new category, if one was supplied.
    pub fn new_category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether no fields were supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount.is_none() && self.category.is_none()
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// The number of rows changed by an `UPDATE` or `DELETE`.
pub type RowsAffected = usize;

/// Create a new transaction in the database from a builder.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn create_transaction(
    builder: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (type, amount, name, category, date)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, type, amount, name, category, date",
        )?
        .query_row(
            (
                builder.transaction_type,
                builder.amount,
                builder.name,
                builder.category,
                builder.date,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, type, amount, name, category, date FROM transactions WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction, ordered by the stored date text in descending order.
///
/// The date column holds text such as "May 05, 2025", so this order is
/// lexicographic rather than chronological. Rows with the same date text are
/// ordered newest ID first.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, type, amount, name, category, date FROM transactions
             ORDER BY date DESC, id DESC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Apply `update` to the transaction with `id`.
///
/// Fields that were not supplied keep their current values. An empty update
/// does not touch the database and affects zero rows.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn update_transaction(
    id: TransactionId,
    update: &TransactionUpdate,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    if update.is_empty() {
        return Ok(0);
    }

    connection
        .execute(
            "UPDATE transactions
            SET \
                name = COALESCE(?1, name), \
                amount = COALESCE(?2, amount), \
                category = COALESCE(?3, category) \
            WHERE id = ?4;",
            params![
                update.new_name(),
                update.new_amount(),
                update.new_category(),
                id
            ],
        )
        .map_err(Error::from)
}

/// Delete the transaction with `id`.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
        .map_err(Error::from)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the transaction table in the database if it does not exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                amount REAL NOT NULL,
                name TEXT NOT NULL,
                category TEXT,
                date TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let transaction_type = row.get(1)?;
    let amount = row.get(2)?;
    let name = row.get(3)?;
    let category = row.get(4)?;
    let date = row.get(5)?;

    Ok(Transaction {
        id,
        transaction_type,
        amount,
        name,
        category,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================
