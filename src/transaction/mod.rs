//! Transaction management for the money manager.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` builder for creating transactions
//! - The long-form stored date and the month keys derived from it
//! - Database functions for storing, querying, and managing transactions

mod core;
mod date;

pub use core::{
    NewTransaction, RowsAffected, Transaction, TransactionType, TransactionUpdate,
    count_transactions, create_transaction, create_transaction_table, delete_transaction,
    get_all_transactions, get_transaction, map_transaction_row, update_transaction,
};
pub use date::{TransactionDate, month_key};
