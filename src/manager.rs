//! The money manager: records transactions and computes the balance and
//! expense reports on top of a [TransactionStore].

use std::{cmp::Reverse, collections::BTreeMap};

use crate::{
    Error,
    clock::Clock,
    database_id::TransactionId,
    report::aggregation::{balance, expenses_by_category, monthly_expenses},
    stores::TransactionStore,
    transaction::{Transaction, TransactionType, TransactionUpdate},
};

/// Records income and expenses and reports on them.
///
/// Every query re-reads the full transaction list from the store.
#[derive(Debug, Clone)]
pub struct MoneyManager<S, C> {
    store: S,
    clock: C,
}

impl<S, C> MoneyManager<S, C>
where
    S: TransactionStore,
    C: Clock,
{
    /// Create a manager that stamps new transactions with `clock`'s date.
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Record money earned today.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the transaction could not be stored.
    pub fn add_income(
        &mut self,
        amount: f64,
        name: &str,
        category: Option<&str>,
    ) -> Result<Transaction, Error> {
        self.add_transaction(TransactionType::Income, amount, name, category)
    }

    /// Record money spent today.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the transaction could not be stored.
    pub fn add_expense(
        &mut self,
        amount: f64,
        name: &str,
        category: Option<&str>,
    ) -> Result<Transaction, Error> {
        self.add_transaction(TransactionType::Expense, amount, name, category)
    }

    /// Record a transaction of `transaction_type` dated today.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the transaction could not be stored.
    pub fn add_transaction(
        &mut self,
        transaction_type: TransactionType,
        amount: f64,
        name: &str,
        category: Option<&str>,
    ) -> Result<Transaction, Error> {
        let today = self.clock.today();
        let transaction = self.store.create(
            Transaction::build(transaction_type, amount, name, today).category(category),
        )?;
        tracing::info!(
            "Added {} \"{}\" for {:.2}",
            transaction.transaction_type,
            transaction.name,
            transaction.amount
        );

        Ok(transaction)
    }

    /// All transactions in stored order, see [TransactionStore::get_all].
    pub fn get_transactions(&self) -> Result<Vec<Transaction>, Error> {
        self.store.get_all()
    }

    /// All transactions, newest calendar date first.
    ///
    /// Transactions with the same date keep their stored order. Transactions
    /// whose date cannot be parsed are listed last.
    pub fn get_transactions_chronological(&self) -> Result<Vec<Transaction>, Error> {
        let mut transactions = self.store.get_all()?;
        transactions.sort_by_key(|transaction| Reverse(transaction.date.parse().ok()));

        Ok(transactions)
    }

    /// A single transaction by its ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no transaction with `id`.
    pub fn get_transaction(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.store.get(id)
    }

    /// Total income minus total expenses.
    pub fn get_balance(&self) -> Result<f64, Error> {
        Ok(balance(&self.store.get_all()?))
    }

    /// Total expenses per category.
    pub fn get_expense_by_category(&self) -> Result<BTreeMap<String, f64>, Error> {
        Ok(expenses_by_category(&self.store.get_all()?))
    }

    /// Total expenses per "MM-YYYY" month, keys in ascending order.
    pub fn get_monthly_expenses(&self) -> Result<BTreeMap<String, f64>, Error> {
        Ok(monthly_expenses(&self.store.get_all()?))
    }

    /// Change the supplied fields of a transaction.
    ///
    /// Returns `false` if nothing was supplied or the transaction does not exist.
    pub fn edit_transaction(
        &mut self,
        id: TransactionId,
        update: &TransactionUpdate,
    ) -> Result<bool, Error> {
        self.store.update(id, update)
    }

    /// Delete a transaction.
    ///
    /// Returns `false` if the transaction does not exist.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Result<bool, Error> {
        self.store.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tempfile::TempDir;
    use time::macros::date;

    use crate::{
        clock::FixedClock,
        db::Database,
        manager::MoneyManager,
        stores::SQLiteTransactionStore,
        transaction::{TransactionDate, TransactionType, TransactionUpdate},
    };

    type TestManager = MoneyManager<SQLiteTransactionStore, FixedClock>;

    #[track_caller]
    fn must_create_manager(clock: FixedClock) -> (TempDir, TestManager) {
        let dir = tempfile::tempdir().expect("could not create temp dir");
        let store = SQLiteTransactionStore::new(Database::new(dir.path().join("test.db")))
            .expect("could not create store");

        (dir, MoneyManager::new(store, clock))
    }

    #[test]
    fn salary_and_groceries_example() {
        let (_dir, mut manager) = must_create_manager(FixedClock(date!(2025 - 05 - 05)));

        manager.add_income(1000.0, "Salary", Some("Job")).unwrap();
        manager
            .add_expense(200.0, "Groceries", Some("Food"))
            .unwrap();

        assert_eq!(manager.get_balance(), Ok(800.0));
        assert_eq!(
            manager.get_expense_by_category(),
            Ok(BTreeMap::from([("Food".to_owned(), 200.0)]))
        );
        assert_eq!(
            manager.get_monthly_expenses(),
            Ok(BTreeMap::from([("05-2025".to_owned(), 200.0)]))
        );
    }

    #[test]
    fn empty_manager_has_zero_balance() {
        let (_dir, manager) = must_create_manager(FixedClock(date!(2025 - 05 - 05)));

        assert_eq!(manager.get_balance(), Ok(0.0));
        assert_eq!(manager.get_expense_by_category(), Ok(BTreeMap::new()));
        assert_eq!(manager.get_monthly_expenses(), Ok(BTreeMap::new()));
    }

    #[test]
    fn added_transaction_uses_clock_date() {
        let (_dir, mut manager) = must_create_manager(FixedClock(date!(2024 - 12 - 24)));

        let transaction = manager.add_expense(45.0, "Gifts", None).unwrap();

        assert_eq!(
            transaction.date,
            TransactionDate::new_unchecked("December 24, 2024")
        );
        assert_eq!(transaction.transaction_type, TransactionType::Expense);
        assert_eq!(manager.get_transactions(), Ok(vec![transaction]));
    }

    #[test]
    fn insert_adds_exactly_one_record() {
        let (_dir, mut manager) = must_create_manager(FixedClock(date!(2025 - 05 - 05)));
        manager.add_income(10.0, "Gift", Some("Family")).unwrap();
        let before = manager.get_transactions().unwrap();

        let created = manager.add_expense(3.5, "Bus", Some("Transport")).unwrap();

        let after = manager.get_transactions().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert!(before.iter().all(|transaction| transaction.id != created.id));
        let matching: Vec<_> = after
            .iter()
            .filter(|transaction| {
                transaction.name == "Bus"
                    && transaction.amount == 3.5
                    && transaction.category.as_deref() == Some("Transport")
                    && transaction.transaction_type == TransactionType::Expense
            })
            .collect();
        assert_eq!(matching, vec![&created]);
    }

    #[test]
    fn chronological_order_sorts_by_calendar_date() {
        let (dir, mut manager) = must_create_manager(FixedClock(date!(2025 - 05 - 01)));
        let may = manager.add_expense(1.0, "may", None).unwrap();
        let store = SQLiteTransactionStore::new(Database::new(dir.path().join("test.db"))).unwrap();
        let mut june_manager = MoneyManager::new(store.clone(), FixedClock(date!(2025 - 06 - 01)));
        let june = june_manager.add_expense(1.0, "june", None).unwrap();
        let mut april_manager = MoneyManager::new(store, FixedClock(date!(2025 - 04 - 01)));
        let april = april_manager.add_expense(1.0, "april", None).unwrap();

        let ids: Vec<_> = manager
            .get_transactions_chronological()
            .unwrap()
            .into_iter()
            .map(|transaction| transaction.id)
            .collect();

        assert_eq!(ids, vec![june.id, may.id, april.id]);
    }

    #[test]
    fn chronological_order_puts_unparsable_dates_last() {
        let (dir, mut manager) = must_create_manager(FixedClock(date!(2025 - 05 - 01)));
        let may = manager.add_expense(1.0, "may", None).unwrap();
        let connection = Database::new(dir.path().join("test.db")).connect().unwrap();
        connection
            .execute(
                "INSERT INTO transactions (type, amount, name, category, date)
                 VALUES ('expense', 1.0, 'broken', NULL, 'Zzz')",
                (),
            )
            .unwrap();

        let names: Vec<_> = manager
            .get_transactions_chronological()
            .unwrap()
            .into_iter()
            .map(|transaction| transaction.name)
            .collect();

        assert_eq!(names, vec![may.name, "broken".to_owned()]);
    }

    #[test]
    fn monthly_report_skips_malformed_rows() {
        let (dir, mut manager) = must_create_manager(FixedClock(date!(2025 - 05 - 01)));
        manager.add_expense(20.0, "lunch", Some("Food")).unwrap();
        let connection = Database::new(dir.path().join("test.db")).connect().unwrap();
        connection
            .execute(
                "INSERT INTO transactions (type, amount, name, category, date)
                 VALUES ('expense', 5.0, 'legacy', 'Food', '2025-05-02')",
                (),
            )
            .unwrap();

        assert_eq!(
            manager.get_monthly_expenses(),
            Ok(BTreeMap::from([("05-2025".to_owned(), 20.0)]))
        );
        assert_eq!(
            manager.get_expense_by_category(),
            Ok(BTreeMap::from([("Food".to_owned(), 25.0)]))
        );
    }

    #[test]
    fn edit_changes_balance() {
        let (_dir, mut manager) = must_create_manager(FixedClock(date!(2025 - 05 - 05)));
        manager.add_income(1000.0, "Salary", Some("Job")).unwrap();
        let groceries = manager
            .add_expense(200.0, "Groceries", Some("Food"))
            .unwrap();

        let edited = manager
            .edit_transaction(groceries.id, &TransactionUpdate::new().amount(250.0))
            .unwrap();

        assert!(edited);
        assert_eq!(manager.get_balance(), Ok(750.0));
    }

    #[test]
    fn edit_without_fields_returns_false() {
        let (_dir, mut manager) = must_create_manager(FixedClock(date!(2025 - 05 - 05)));
        let groceries = manager
            .add_expense(200.0, "Groceries", Some("Food"))
            .unwrap();

        let edited = manager
            .edit_transaction(groceries.id, &TransactionUpdate::new())
            .unwrap();

        assert!(!edited);
        assert_eq!(manager.get_transaction(groceries.id), Ok(groceries));
    }

    #[test]
    fn edit_missing_transaction_returns_false() {
        let (_dir, mut manager) = must_create_manager(FixedClock(date!(2025 - 05 - 05)));

        let edited = manager
            .edit_transaction(7, &TransactionUpdate::new().name("foo"))
            .unwrap();

        assert!(!edited);
    }

    #[test]
    fn delete_removes_transaction_from_reports() {
        let (_dir, mut manager) = must_create_manager(FixedClock(date!(2025 - 05 - 05)));
        manager.add_income(1000.0, "Salary", Some("Job")).unwrap();
        let groceries = manager
            .add_expense(200.0, "Groceries", Some("Food"))
            .unwrap();

        assert_eq!(manager.delete_transaction(groceries.id), Ok(true));
        assert_eq!(manager.delete_transaction(groceries.id), Ok(false));
        assert_eq!(manager.get_balance(), Ok(1000.0));
        assert_eq!(manager.get_expense_by_category(), Ok(BTreeMap::new()));
    }
}
