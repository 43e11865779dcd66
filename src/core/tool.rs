//! Tools issued to employees.

use crate::config::Config;
use crate::core::record::{opt_bool, opt_int, opt_text, Record};
use crate::db::with_connection;
use crate::error::Result;
use rusqlite::types::Value;
use rusqlite::Row;
use tracing::debug;

/// A tool issued to an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub id: i64,
    pub employee_id: Option<i64>,
    pub name: Option<String>,
    pub battery_powered: Option<bool>,
    pub battery_count: Option<i64>,
    pub voltage: Option<i64>,
}

impl Tool {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("tool_id")?,
            employee_id: row.get("employee_id")?,
            name: row.get("tool_name")?,
            battery_powered: row.get("is_battery_powered")?,
            battery_count: row.get("number_of_batteries")?,
            voltage: row.get("tool_voltage")?,
        })
    }
}

impl Record for Tool {
    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            opt_int(self.employee_id),
            opt_text(&self.name),
            opt_bool(self.battery_powered),
            opt_int(self.battery_count),
            opt_int(self.voltage),
        ]
    }
}

/// Operations on the Tools table.
pub struct Tools<'a> {
    config: &'a Config,
}

impl<'a> Tools<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Insert a tool and return its id.
    pub fn create(
        &self,
        employee_id: Option<i64>,
        name: &str,
        battery_powered: bool,
        battery_count: i64,
        voltage: i64,
    ) -> Result<i64> {
        let id = with_connection(self.config, |conn| {
            conn.execute(
                "INSERT INTO Tools (employee_id, tool_name, is_battery_powered, number_of_batteries, tool_voltage)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                (employee_id, name, battery_powered, battery_count, voltage),
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        debug!(id, ?employee_id, name, "created tool");
        Ok(id)
    }

    pub fn list(&self) -> Result<Vec<Tool>> {
        with_connection(self.config, |conn| {
            conn.query(
                "SELECT tool_id, employee_id, tool_name, is_battery_powered, number_of_batteries, tool_voltage
                 FROM Tools
                 ORDER BY tool_id",
                [],
                Tool::from_row,
            )
        })
    }

    pub fn update_battery_count(&self, id: i64, battery_count: i64) -> Result<usize> {
        let changed = with_connection(self.config, |conn| {
            conn.execute(
                "UPDATE Tools SET number_of_batteries = ?1 WHERE tool_id = ?2",
                (battery_count, id),
            )
        })?;
        debug!(id, battery_count, changed, "updated tool battery count");
        Ok(changed)
    }

    /// Delete a tool. Unknown ids are a no-op.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let deleted = with_connection(self.config, |conn| {
            conn.execute("DELETE FROM Tools WHERE tool_id = ?1", [id])
        })?;
        debug!(id, deleted, "deleted tool");
        Ok(deleted)
    }
}
