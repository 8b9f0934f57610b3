//! Money Manager is a personal finance tracker.
//!
//! Income and expenses are recorded in a local SQLite database. The library
//! computes the running balance, expense totals per category and per month,
//! and renders those totals as an HTML report with charts.

#![warn(missing_docs)]

pub mod cli;
mod clock;
mod database_id;
mod db;
mod error;
mod html;
pub mod input;
mod logging;
mod manager;
pub mod report;
pub mod stores;
mod timezone;
pub mod transaction;

pub use clock::{Clock, FixedClock, SystemClock};
pub use database_id::TransactionId;
pub use db::{Database, initialize as initialize_db};
pub use error::Error;
pub use html::format_currency;
pub use logging::init_logging;
pub use manager::MoneyManager;
