//! Implements a SQLite backed transaction store.

use crate::{
    Error,
    database_id::TransactionId,
    db::Database,
    stores::TransactionStore,
    transaction::{
        NewTransaction, Transaction, TransactionUpdate, create_transaction, delete_transaction,
        get_all_transactions, get_transaction, update_transaction,
    },
};

/// Stores transactions in a SQLite database file.
///
/// Each operation opens its own connection and closes it before returning.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    database: Database,
}

impl SQLiteTransactionStore {
    /// Create a new store for `database`, creating the transaction table if
    /// it does not exist.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the database cannot be opened or the
    /// table cannot be created.
    pub fn new(database: Database) -> Result<Self, Error> {
        database.initialize()?;

        Ok(Self { database })
    }

    /// The database this store reads and writes.
    pub fn database(&self) -> &Database {
        &self.database
    }
}

impl TransactionStore for SQLiteTransactionStore {
    fn create(&mut self, builder: NewTransaction) -> Result<Transaction, Error> {
        let connection = self.database.connect()?;
        let transaction = create_transaction(builder, &connection)?;
        tracing::debug!("Created transaction {}", transaction.id);

        Ok(transaction)
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        let connection = self.database.connect()?;
        get_transaction(id, &connection)
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = self.database.connect()?;
        get_all_transactions(&connection)
    }

    fn update(&mut self, id: TransactionId, update: &TransactionUpdate) -> Result<bool, Error> {
        if update.is_empty() {
            tracing::debug!("Ignoring empty update for transaction {id}");
            return Ok(false);
        }

        let connection = self.database.connect()?;

        match update_transaction(id, update, &connection)? {
            0 => {
                tracing::debug!("Could not update transaction {id}: zero rows affected");
                Ok(false)
            }
            _ => Ok(true),
        }
    }

    fn delete(&mut self, id: TransactionId) -> Result<bool, Error> {
        let connection = self.database.connect()?;

        match delete_transaction(id, &connection)? {
            0 => {
                tracing::debug!("Could not delete transaction {id}: zero rows affected");
                Ok(false)
            }
            _ => Ok(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use time::macros::date;

    use crate::{
        Error,
        db::Database,
        stores::{SQLiteTransactionStore, TransactionStore},
        transaction::{Transaction, TransactionType, TransactionUpdate, count_transactions},
    };

    #[track_caller]
    fn must_create_store() -> (TempDir, SQLiteTransactionStore) {
        let dir = tempfile::tempdir().expect("could not create temp dir");
        let store = SQLiteTransactionStore::new(Database::new(dir.path().join("test.db")))
            .expect("could not create store");

        (dir, store)
    }

    #[test]
    fn created_transaction_is_persisted_across_connections() {
        let (_dir, mut store) = must_create_store();

        let created = store
            .create(
                Transaction::build(
                    TransactionType::Expense,
                    200.0,
                    "Groceries",
                    date!(2025 - 05 - 05),
                )
                .category(Some("Food")),
            )
            .unwrap();

        assert_eq!(store.get_all(), Ok(vec![created.clone()]));
        assert_eq!(store.get(created.id), Ok(created));
    }

    #[test]
    fn reopening_the_store_keeps_data() {
        let (dir, mut store) = must_create_store();
        let created = store
            .create(Transaction::build(
                TransactionType::Income,
                1000.0,
                "Salary",
                date!(2025 - 05 - 05),
            ))
            .unwrap();

        let reopened =
            SQLiteTransactionStore::new(Database::new(dir.path().join("test.db"))).unwrap();

        assert_eq!(reopened.database(), store.database());
        assert_eq!(reopened.get_all(), Ok(vec![created]));
        let connection = reopened.database().connect().unwrap();
        assert_eq!(count_transactions(&connection), Ok(1));
    }

    #[test]
    fn get_missing_returns_not_found() {
        let (_dir, store) = must_create_store();

        assert_eq!(store.get(1), Err(Error::NotFound));
    }

    #[test]
    fn update_returns_true_when_row_changes() {
        let (_dir, mut store) = must_create_store();
        let created = store
            .create(Transaction::build(
                TransactionType::Expense,
                5.0,
                "Coffee",
                date!(2025 - 05 - 05),
            ))
            .unwrap();

        let updated = store
            .update(created.id, &TransactionUpdate::new().category("Drinks"))
            .unwrap();

        assert!(updated);
        assert_eq!(
            store.get(created.id).unwrap().category.as_deref(),
            Some("Drinks")
        );
    }

    #[test]
    fn empty_update_returns_false_and_keeps_record() {
        let (_dir, mut store) = must_create_store();
        let created = store
            .create(Transaction::build(
                TransactionType::Expense,
                5.0,
                "Coffee",
                date!(2025 - 05 - 05),
            ))
            .unwrap();

        let updated = store.update(created.id, &TransactionUpdate::new()).unwrap();

        assert!(!updated);
        assert_eq!(store.get(created.id), Ok(created));
    }

    #[test]
    fn update_missing_returns_false() {
        let (_dir, mut store) = must_create_store();

        let updated = store
            .update(99, &TransactionUpdate::new().name("foo"))
            .unwrap();

        assert!(!updated);
    }

    #[test]
    fn delete_returns_whether_row_was_removed() {
        let (_dir, mut store) = must_create_store();
        let created = store
            .create(Transaction::build(
                TransactionType::Expense,
                5.0,
                "Coffee",
                date!(2025 - 05 - 05),
            ))
            .unwrap();

        assert_eq!(store.delete(created.id), Ok(true));
        assert_eq!(store.delete(created.id), Ok(false));
        assert_eq!(store.get_all(), Ok(vec![]));
    }
}
