//! Defines the transaction store trait.

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{NewTransaction, Transaction, TransactionUpdate},
};

/// Handles the creation, retrieval, editing and removal of transactions.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    fn create(&mut self, builder: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve a transaction from the store.
    ///
    /// Implementers should return [Error::NotFound] if `id` does not exist.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Retrieve every transaction, newest stored date text first.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Change the supplied fields of a transaction.
    ///
    /// Returns `false` if the update was empty or `id` does not exist.
    fn update(&mut self, id: TransactionId, update: &TransactionUpdate) -> Result<bool, Error>;

    /// Remove a transaction.
    ///
    /// Returns `false` if `id` does not exist.
    fn delete(&mut self, id: TransactionId) -> Result<bool, Error>;
}
