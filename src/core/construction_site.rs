//! Construction sites.

use crate::config::Config;
use crate::core::record::{opt_int, opt_text, Record};
use crate::db::with_connection;
use crate::error::Result;
use rusqlite::types::Value;
use rusqlite::Row;
use tracing::debug;

/// A project run for a client by a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionSite {
    pub id: i64,
    pub client_id: Option<i64>,
    pub company_id: Option<i64>,
    pub project_name: Option<String>,
    pub address: Option<String>,
    pub budget: Option<i64>,
}

impl ConstructionSite {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("construction_site_id")?,
            client_id: row.get("client_id")?,
            company_id: row.get("company_id")?,
            project_name: row.get("name_of_project")?,
            address: row.get("construction_site_address")?,
            budget: row.get("construction_site_budget")?,
        })
    }
}

impl Record for ConstructionSite {
    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            opt_int(self.client_id),
            opt_int(self.company_id),
            opt_text(&self.project_name),
            opt_text(&self.address),
            opt_int(self.budget),
        ]
    }
}

/// Operations on the ConstructionSites table.
pub struct ConstructionSites<'a> {
    config: &'a Config,
}

impl<'a> ConstructionSites<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Insert a construction site and return its id.
    pub fn create(
        &self,
        client_id: Option<i64>,
        company_id: Option<i64>,
        project_name: &str,
        address: &str,
        budget: i64,
    ) -> Result<i64> {
        let id = with_connection(self.config, |conn| {
            conn.execute(
                "INSERT INTO ConstructionSites (client_id, company_id, name_of_project,
                     construction_site_address, construction_site_budget)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                (client_id, company_id, project_name, address, budget),
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        debug!(id, ?client_id, ?company_id, project_name, "created construction site");
        Ok(id)
    }

    pub fn list(&self) -> Result<Vec<ConstructionSite>> {
        with_connection(self.config, |conn| {
            conn.query(
                "SELECT construction_site_id, client_id, company_id, name_of_project,
                        construction_site_address, construction_site_budget
                 FROM ConstructionSites
                 ORDER BY construction_site_id",
                [],
                ConstructionSite::from_row,
            )
        })
    }

    pub fn update_budget(&self, id: i64, budget: i64) -> Result<usize> {
        let changed = with_connection(self.config, |conn| {
            conn.execute(
                "UPDATE ConstructionSites SET construction_site_budget = ?1
                 WHERE construction_site_id = ?2",
                (budget, id),
            )
        })?;
        debug!(id, budget, changed, "updated construction site budget");
        Ok(changed)
    }

    /// Delete a construction site. Unknown ids are a no-op.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let deleted = with_connection(self.config, |conn| {
            conn.execute(
                "DELETE FROM ConstructionSites WHERE construction_site_id = ?1",
                [id],
            )
        })?;
        debug!(id, deleted, "deleted construction site");
        Ok(deleted)
    }
}
