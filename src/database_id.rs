//! Database ID type definition.

/// Alias for the integer type SQLite assigns to new transaction rows.
pub type TransactionId = i64;
