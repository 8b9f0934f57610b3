//! The narrow storage interface the rest of the application talks to, and its
//! SQLite implementation.

/// SQLite backed stores.
pub mod sqlite;
mod transaction;

pub use sqlite::SQLiteTransactionStore;
pub use transaction::TransactionStore;
