//! Error types for the construction database.

use std::io;

/// Result type alias for construction database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum.
///
/// Engine failures are passed through untouched in [`Error::Db`]; the
/// repository layer never catches or retries them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database error (schema, constraint, locked or unwritable file).
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Table name not part of the schema.
    #[error("Unknown table: {0}. Expected one of: {tables}", tables = known_tables())]
    UnknownTable(String),
}

impl Error {
    /// Whether this is an SQLite constraint failure (foreign key, NOT NULL, ...).
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Error::Db(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

fn known_tables() -> String {
    crate::db::Table::ALL
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}
