//! Store implementations backed by a SQLite database file.

/// The SQLite transaction store.
pub mod transaction;

pub use transaction::SQLiteTransactionStore;
