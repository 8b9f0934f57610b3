//! Validates the text a user types in before it reaches the manager.

use crate::{Error, transaction::TransactionUpdate};

/// A validated request to record a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    /// The trimmed, non-empty name.
    pub name: String,
    /// An amount greater than zero.
    pub amount: f64,
    /// The trimmed category, `None` if left blank.
    pub category: Option<String>,
}

impl TransactionForm {
    /// Check the raw user input for a new transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyName] if `name` is blank,
    /// - or [Error::InvalidAmount] if `amount` is not a number greater than zero.
    pub fn validate(name: &str, amount: &str, category: Option<&str>) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        Ok(Self {
            name: name.to_owned(),
            amount: parse_amount(amount)?,
            category: category
                .map(str::trim)
                .filter(|category| !category.is_empty())
                .map(str::to_owned),
        })
    }
}

/// Validate the raw user input for an edit.
///
/// Fields that are `None` are left unchanged. Fields that are supplied must
/// be valid.
///
/// # Errors
/// This function will return a:
/// - [Error::EmptyName] if `name` is supplied but blank,
/// - [Error::EmptyCategory] if `category` is supplied but blank,
/// - or [Error::InvalidAmount] if `amount` is supplied but is not a number
///   greater than zero.
pub fn validate_edit(
    name: Option<&str>,
    amount: Option<&str>,
    category: Option<&str>,
) -> Result<TransactionUpdate, Error> {
    let mut update = TransactionUpdate::new();

    if let Some(name) = name {
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        update = update.name(name);
    }

    if let Some(amount) = amount {
        update = update.amount(parse_amount(amount)?);
    }

    if let Some(category) = category {
        if category.trim().is_empty() {
            return Err(Error::EmptyCategory);
        }
        update = update.category(category);
    }

    Ok(update)
}

/// Parse a positive amount, e.g. "12.50".
///
/// # Errors
/// Returns [Error::InvalidAmount] if `text` is not a finite number greater than zero.
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    let text = text.trim();

    match text.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}
