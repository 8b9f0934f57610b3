//! The long-form date text stored alongside each transaction.

use std::fmt::Display;

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The stored date format, e.g. "May 05, 2025".
const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day], [year]");

/// The date a transaction was recorded, exactly as it is stored in the database.
///
/// The text is kept verbatim so that rows with a malformed date can still be
/// listed. Use [TransactionDate::parse] to get the calendar date.
///
/// Note that ordering by this text is lexicographic, not chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionDate(String);

impl TransactionDate {
    /// Format `date` in the long form used by the database.
    pub fn from_date(date: Date) -> Self {
        Self(
            date.format(DATE_FORMAT)
                .unwrap_or_else(|_| date.to_string()),
        )
    }

    /// Wrap date text without checking that it can be parsed.
    pub fn new_unchecked(text: &str) -> Self {
        Self(text.to_owned())
    }

    /// Parse the stored text back into a calendar date.
    ///
    /// # Errors
    /// Returns a [time::error::Parse] if the text is not in the
    /// "Month DD, YYYY" format.
    pub fn parse(&self) -> Result<Date, time::error::Parse> {
        Date::parse(&self.0, DATE_FORMAT)
    }

    /// The stored text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Date> for TransactionDate {
    fn from(date: Date) -> Self {
        Self::from_date(date)
    }
}

impl Display for TransactionDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToSql for TransactionDate {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.as_str()))
    }
}

impl FromSql for TransactionDate {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        String::column_result(value).map(Self)
    }
}

/// The key used to group transactions by month, e.g. "05-2025".
pub fn month_key(date: Date) -> String {
    format!("{:02}-{:04}", u8::from(date.month()), date.year())
}
