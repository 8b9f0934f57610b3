//! Locates the application's SQLite database and sets up its schema.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::{Error, transaction::create_transaction_table};

/// Create the tables for the domain models if they do not already exist.
///
/// # Errors
/// Returns an [Error::SqlError] if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_transaction_table(connection)?;

    Ok(())
}

/// A SQLite database file.
///
/// No connection is held between calls. Every call to [Database::connect]
/// opens a fresh connection which is closed when it is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// The file name used when no path is configured.
    pub const DEFAULT_PATH: &'static str = "money_manager.db";

    /// Refer to the database file at `path`. The file is created on first connect.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The path to the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a new connection to the database file.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the file cannot be opened.
    pub fn connect(&self) -> Result<Connection, Error> {
        tracing::trace!("Opening database connection to {}", self.path.display());
        Connection::open(&self.path).map_err(Error::from)
    }

    /// Open a connection and make sure the schema exists.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the file cannot be opened or the
    /// tables cannot be created.
    pub fn initialize(&self) -> Result<(), Error> {
        let connection = self.connect()?;
        initialize(&connection)
    }
}
