//! Scoped database connections.
//!
//! Every unit of work gets its own connection. The connection opens a
//! transaction on acquisition and, however the work ends, commits it and
//! closes the handle. There is no rollback path: when a statement fails,
//! whatever the engine already applied in the transaction is committed.

use crate::config::Config;
use crate::error::{Error, Result};
use rusqlite::{Connection as SqliteConnection, Params, Row};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Path to the construction database file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbPath {
    path: PathBuf,
}

impl DbPath {
    /// File name used when no path is configured.
    pub const DEFAULT_FILE: &'static str = "ConstructionDB";

    /// Create a DbPath pointing at `ConstructionDB` in the working directory.
    pub fn default_path() -> Self {
        Self::new(Self::DEFAULT_FILE)
    }

    /// Create a DbPath from any path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path as a reference.
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Check if the database file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Default for DbPath {
    fn default() -> Self {
        Self::default_path()
    }
}

impl fmt::Display for DbPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// A connection that commits and closes when its scope ends.
///
/// Call [`ScopedConnection::release`] to observe commit failures. A guard
/// that is simply dropped (early return, unwinding) still commits, logging
/// any failure instead.
pub struct ScopedConnection {
    conn: SqliteConnection,
    path: DbPath,
    released: bool,
}

impl ScopedConnection {
    /// Open (or create) the configured database file and begin a transaction.
    pub fn open(config: &Config) -> Result<Self> {
        let path = config.db_path().clone();
        let conn = SqliteConnection::open(path.as_path())?;
        conn.busy_timeout(config.busy_timeout())?;

        // Has no effect inside a transaction, so it goes first.
        let fk = if config.enforce_foreign_keys() { "ON" } else { "OFF" };
        conn.pragma_update(None, "foreign_keys", fk)?;

        conn.execute_batch("BEGIN")?;
        trace!(path = %path, foreign_keys = fk, "acquired connection");

        Ok(Self {
            conn,
            path,
            released: false,
        })
    }

    /// Execute a statement and return the number of rows affected.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        self.conn.execute(sql, params).map_err(Error::from)
    }

    /// Query multiple rows.
    pub fn query<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, f)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Get the last inserted row id.
    pub fn last_insert_rowid(&self) -> i64 {
        self.conn.last_insert_rowid()
    }

    /// Check if a table exists.
    pub fn table_exists(&self, table_name: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?")?;
        Ok(stmt.exists([table_name])?)
    }

    /// Commit pending work and close the connection.
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        self.commit()
        // the handle closes when `self` drops here
    }

    fn commit(&self) -> Result<()> {
        // Some failures (disk full, I/O) end the transaction themselves.
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("COMMIT")?;
        }
        trace!(path = %self.path, "committed");
        Ok(())
    }
}

impl Drop for ScopedConnection {
    fn drop(&mut self) {
        if !self.released {
            if let Err(e) = self.commit() {
                warn!(path = %self.path, error = %e, "commit on scope exit failed");
            }
        }
        trace!(path = %self.path, "closed connection");
    }
}

/// Run `f` inside a [`ScopedConnection`] for `config`.
///
/// The connection is committed and closed whether or not `f` succeeds. When
/// `f` fails its error is returned even if the commit also fails.
pub fn with_connection<T, F>(config: &Config, f: F) -> Result<T>
where
    F: FnOnce(&ScopedConnection) -> Result<T>,
{
    let conn = ScopedConnection::open(config)?;
    let outcome = f(&conn);
    if let Err(e) = &outcome {
        debug!(path = %config.db_path(), error = %e, "statement failed, committing anyway");
    }
    let released = conn.release();
    match outcome {
        Ok(value) => released.map(|()| value),
        Err(e) => Err(e),
    }
}
