//! Companies.

use crate::config::Config;
use crate::core::record::{opt_int, opt_text, Record};
use crate::db::with_connection;
use crate::error::Result;
use rusqlite::types::Value;
use rusqlite::Row;
use tracing::debug;

/// A contractor working on construction sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: i64,
    pub name: Option<String>,
    pub area_of_expertise: Option<String>,
    pub address: Option<String>,
    pub employee_count: Option<i64>,
}

impl Company {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("company_id")?,
            name: row.get("company_name")?,
            area_of_expertise: row.get("area_of_expertise")?,
            address: row.get("company_address")?,
            employee_count: row.get("number_of_employees")?,
        })
    }
}

impl Record for Company {
    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            opt_text(&self.name),
            opt_text(&self.area_of_expertise),
            opt_text(&self.address),
            opt_int(self.employee_count),
        ]
    }
}

/// Operations on the Companies table.
pub struct Companies<'a> {
    config: &'a Config,
}

impl<'a> Companies<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Insert a company and return its id.
    pub fn create(
        &self,
        name: &str,
        area_of_expertise: &str,
        address: &str,
        employee_count: i64,
    ) -> Result<i64> {
        let id = with_connection(self.config, |conn| {
            conn.execute(
                "INSERT INTO Companies (company_name, area_of_expertise, company_address, number_of_employees)
                 VALUES (?1, ?2, ?3, ?4)",
                (name, area_of_expertise, address, employee_count),
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        debug!(id, name, "created company");
        Ok(id)
    }

    pub fn list(&self) -> Result<Vec<Company>> {
        with_connection(self.config, |conn| {
            conn.query(
                "SELECT company_id, company_name, area_of_expertise, company_address, number_of_employees
                 FROM Companies
                 ORDER BY company_id",
                [],
                Company::from_row,
            )
        })
    }

    /// Set the employee count of every company currently at `old_count`.
    ///
    /// Like [`Clients::update_address`](crate::core::Clients::update_address)
    /// this matches on the old value, so several companies may change.
    pub fn update_employee_count(&self, old_count: i64, new_count: i64) -> Result<usize> {
        let changed = with_connection(self.config, |conn| {
            conn.execute(
                "UPDATE Companies SET number_of_employees = ?1 WHERE number_of_employees = ?2",
                (new_count, old_count),
            )
        })?;
        debug!(old_count, new_count, changed, "updated company employee count");
        Ok(changed)
    }

    /// Delete a company. Unknown ids are a no-op.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let deleted = with_connection(self.config, |conn| {
            conn.execute("DELETE FROM Companies WHERE company_id = ?1", [id])
        })?;
        debug!(id, deleted, "deleted company");
        Ok(deleted)
    }
}
