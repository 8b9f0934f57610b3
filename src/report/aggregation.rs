//! Transaction data aggregation for the balance and expense reports.
//!
//! These are pure functions over a slice of transactions. Callers re-read the
//! table for every report, nothing is cached between calls.

use std::collections::BTreeMap;

use crate::transaction::{Transaction, TransactionType, month_key};

/// The category label for expenses that were recorded without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Total income minus total expenses.
///
/// Returns zero for an empty slice.
pub fn balance(transactions: &[Transaction]) -> f64 {
    let income = sum_of_type(transactions, TransactionType::Income);
    let expenses = sum_of_type(transactions, TransactionType::Expense);

    income - expenses
}

fn sum_of_type(transactions: &[Transaction], transaction_type: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == transaction_type)
        .map(|transaction| transaction.amount)
        .sum()
}

fn expenses(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == TransactionType::Expense)
}

/// Sums expense amounts per category. Income is ignored.
///
/// Expenses without a category are summed under [UNCATEGORIZED_LABEL].
pub fn expenses_by_category(transactions: &[Transaction]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();

    for transaction in expenses(transactions) {
        let category = transaction
            .category
            .as_deref()
            .unwrap_or(UNCATEGORIZED_LABEL);
        *totals.entry(category.to_owned()).or_insert(0.0) += transaction.amount;
    }

    totals
}

/// Sums expense amounts per month. Income is ignored.
///
/// Keys are "MM-YYYY" strings and the map iterates them in ascending string
/// order, so "12-2024" comes after "01-2025". Expenses whose stored date
/// cannot be parsed are skipped with a warning.
pub fn monthly_expenses(transactions: &[Transaction]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();

    for transaction in expenses(transactions) {
        let date = match transaction.date.parse() {
            Ok(date) => date,
            Err(error) => {
                tracing::warn!(
                    "Skipping invalid date \"{}\" on transaction {}: {error}",
                    transaction.date,
                    transaction.id
                );
                continue;
            }
        };

        *totals.entry(month_key(date)).or_insert(0.0) += transaction.amount;
    }

    totals
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::{
        report::aggregation::{UNCATEGORIZED_LABEL, balance, expenses_by_category, monthly_expenses},
        transaction::{Transaction, TransactionDate, TransactionType},
    };

    fn create_test_transaction(
        id: i64,
        transaction_type: TransactionType,
        amount: f64,
        category: Option<&str>,
        date: &str,
    ) -> Transaction {
        Transaction {
            id,
            transaction_type,
            amount,
            name: format!("transaction {id}"),
            category: category.map(str::to_owned),
            date: TransactionDate::new_unchecked(date),
        }
    }

    fn income(id: i64, amount: f64, date: &str) -> Transaction {
        create_test_transaction(id, TransactionType::Income, amount, Some("Job"), date)
    }

    fn expense(id: i64, amount: f64, category: Option<&str>, date: &str) -> Transaction {
        create_test_transaction(id, TransactionType::Expense, amount, category, date)
    }

    #[test]
    fn balance_of_nothing_is_zero() {
        assert_eq!(balance(&[]), 0.0);
    }

    #[test]
    fn balance_is_income_minus_expenses() {
        let transactions = vec![
            income(1, 1000.0, "May 05, 2025"),
            expense(2, 200.0, Some("Food"), "May 05, 2025"),
        ];

        assert_eq!(balance(&transactions), 800.0);
    }

    #[test]
    fn balance_matches_manual_totals() {
        let mut transactions = Vec::new();
        let mut want_income = 0.0;
        let mut want_expenses = 0.0;
        for i in 1..=50 {
            let amount = (i * 7 % 13) as f64 + 0.25;
            if i % 3 == 0 {
                want_income += amount;
                transactions.push(income(i, amount, "May 05, 2025"));
            } else {
                want_expenses += amount;
                transactions.push(expense(i, amount, Some("Misc"), "May 05, 2025"));
            }
        }

        assert_eq!(balance(&transactions), want_income - want_expenses);
    }

    #[test]
    fn balance_can_be_negative() {
        let transactions = vec![
            income(1, 10.0, "May 05, 2025"),
            expense(2, 25.0, None, "May 05, 2025"),
        ];

        assert_eq!(balance(&transactions), -15.0);
    }

    #[test]
    fn expenses_by_category_ignores_income() {
        let transactions = vec![
            income(1, 1000.0, "May 05, 2025"),
            expense(2, 200.0, Some("Food"), "May 05, 2025"),
        ];

        let want = BTreeMap::from([("Food".to_owned(), 200.0)]);
        assert_eq!(expenses_by_category(&transactions), want);
    }

    #[test]
    fn expenses_by_category_sums_each_category() {
        let transactions = vec![
            expense(1, 20.0, Some("Food"), "May 05, 2025"),
            expense(2, 5.5, Some("Transport"), "May 06, 2025"),
            expense(3, 30.0, Some("Food"), "June 01, 2025"),
            expense(4, 4.5, Some("Transport"), "June 02, 2025"),
        ];

        let want = BTreeMap::from([("Food".to_owned(), 50.0), ("Transport".to_owned(), 10.0)]);
        assert_eq!(expenses_by_category(&transactions), want);
    }

    #[test]
    fn expenses_without_category_are_uncategorized() {
        let transactions = vec![
            expense(1, 12.0, None, "May 05, 2025"),
            expense(2, 3.0, None, "May 06, 2025"),
        ];

        let want = BTreeMap::from([(UNCATEGORIZED_LABEL.to_owned(), 15.0)]);
        assert_eq!(expenses_by_category(&transactions), want);
    }

    #[test]
    fn expenses_by_category_of_income_only_is_empty() {
        let transactions = vec![income(1, 1000.0, "May 05, 2025")];

        assert!(expenses_by_category(&transactions).is_empty());
    }

    #[test]
    fn monthly_expenses_groups_by_month_and_year() {
        let transactions = vec![
            expense(1, 100.0, Some("Food"), "January 15, 2024"),
            expense(2, 50.0, Some("Transport"), "January 20, 2024"),
            expense(3, 30.0, Some("Food"), "February 10, 2024"),
            expense(4, 7.0, Some("Food"), "January 03, 2025"),
            income(5, 500.0, "January 01, 2024"),
        ];

        let want = BTreeMap::from([
            ("01-2024".to_owned(), 150.0),
            ("01-2025".to_owned(), 7.0),
            ("02-2024".to_owned(), 30.0),
        ]);
        assert_eq!(monthly_expenses(&transactions), want);
    }

    #[test]
    fn monthly_expense_keys_are_sorted_as_strings() {
        let transactions = vec![
            expense(1, 1.0, None, "December 01, 2024"),
            expense(2, 1.0, None, "January 01, 2025"),
            expense(3, 1.0, None, "March 01, 2024"),
        ];

        let keys: Vec<_> = monthly_expenses(&transactions).into_keys().collect();

        assert_eq!(keys, vec!["01-2025", "03-2024", "12-2024"]);
    }

    #[test]
    fn monthly_expenses_skips_unparsable_dates() {
        let transactions = vec![
            expense(1, 10.0, None, "May 05, 2025"),
            expense(2, 99.0, None, "2025-05-05"),
            expense(3, 99.0, None, ""),
        ];

        let want = BTreeMap::from([("05-2025".to_owned(), 10.0)]);
        assert_eq!(monthly_expenses(&transactions), want);
    }

    #[test]
    fn monthly_expenses_of_nothing_is_empty() {
        assert!(monthly_expenses(&[]).is_empty());
    }
}
