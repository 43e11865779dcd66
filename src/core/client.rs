//! Clients.

use crate::config::Config;
use crate::core::record::{opt_text, Record};
use crate::db::with_connection;
use crate::error::Result;
use rusqlite::types::Value;
use rusqlite::Row;
use tracing::debug;

/// A client commissioning construction sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
}

impl Client {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("client_id")?,
            name: row.get("client_name")?,
            address: row.get("client_address")?,
        })
    }
}

impl Record for Client {
    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            opt_text(&self.name),
            opt_text(&self.address),
        ]
    }
}

/// Operations on the Clients table.
pub struct Clients<'a> {
    config: &'a Config,
}

impl<'a> Clients<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Insert a client and return its id.
    pub fn create(&self, name: &str, address: &str) -> Result<i64> {
        let id = with_connection(self.config, |conn| {
            conn.execute(
                "INSERT INTO Clients (client_name, client_address) VALUES (?1, ?2)",
                (name, address),
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        debug!(id, name, "created client");
        Ok(id)
    }

    pub fn list(&self) -> Result<Vec<Client>> {
        with_connection(self.config, |conn| {
            conn.query(
                "SELECT client_id, client_name, client_address FROM Clients ORDER BY client_id",
                [],
                Client::from_row,
            )
        })
    }

    /// Move every client at `old_address` to `new_address`.
    ///
    /// Matches on the old address, not the id: all clients sharing it are
    /// updated. Returns the number of rows changed.
    pub fn update_address(&self, old_address: &str, new_address: &str) -> Result<usize> {
        let changed = with_connection(self.config, |conn| {
            conn.execute(
                "UPDATE Clients SET client_address = ?1 WHERE client_address = ?2",
                (new_address, old_address),
            )
        })?;
        debug!(old_address, new_address, changed, "updated client address");
        Ok(changed)
    }

    /// Delete a client. Unknown ids are a no-op.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let deleted = with_connection(self.config, |conn| {
            conn.execute("DELETE FROM Clients WHERE client_id = ?1", [id])
        })?;
        debug!(id, deleted, "deleted client");
        Ok(deleted)
    }
}
