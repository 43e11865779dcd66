//! Jobs carried out on construction sites.

use crate::config::Config;
use crate::core::record::{opt_int, opt_text, Record};
use crate::db::with_connection;
use crate::error::Result;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Row;
use tracing::debug;

/// A job on a construction site, keyed by its job number.
///
/// Dates are the text stored in the row. [`Jobs::create`] always writes
/// `YYYY-MM-DD`, but other writers of the same file may not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub job_number: i64,
    pub construction_site_id: Option<i64>,
    pub start_date: Option<String>,
    pub finish_date: Option<String>,
    pub worker_count: Option<i64>,
}

impl Job {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            job_number: row.get("job_number")?,
            construction_site_id: row.get("construction_site_id")?,
            start_date: row.get("job_start_date")?,
            finish_date: row.get("job_finish_date")?,
            worker_count: row.get("number_of_workers")?,
        })
    }
}

impl Record for Job {
    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.job_number),
            opt_int(self.construction_site_id),
            opt_text(&self.start_date),
            opt_text(&self.finish_date),
            opt_int(self.worker_count),
        ]
    }
}

/// Operations on the Jobs table.
pub struct Jobs<'a> {
    config: &'a Config,
}

impl<'a> Jobs<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Insert a job and return its job number.
    ///
    /// Dates are stored as `YYYY-MM-DD` text.
    pub fn create(
        &self,
        construction_site_id: Option<i64>,
        start_date: NaiveDate,
        finish_date: NaiveDate,
        worker_count: i64,
    ) -> Result<i64> {
        let job_number = with_connection(self.config, |conn| {
            conn.execute(
                "INSERT INTO Jobs (construction_site_id, job_start_date, job_finish_date, number_of_workers)
                 VALUES (?1, ?2, ?3, ?4)",
                (construction_site_id, start_date, finish_date, worker_count),
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        debug!(job_number, ?construction_site_id, %start_date, %finish_date, "created job");
        Ok(job_number)
    }

    pub fn list(&self) -> Result<Vec<Job>> {
        with_connection(self.config, |conn| {
            conn.query(
                "SELECT job_number, construction_site_id, job_start_date, job_finish_date, number_of_workers
                 FROM Jobs
                 ORDER BY job_number",
                [],
                Job::from_row,
            )
        })
    }

    pub fn update_worker_count(&self, job_number: i64, worker_count: i64) -> Result<usize> {
        let changed = with_connection(self.config, |conn| {
            conn.execute(
                "UPDATE Jobs SET number_of_workers = ?1 WHERE job_number = ?2",
                (worker_count, job_number),
            )
        })?;
        debug!(job_number, worker_count, changed, "updated job worker count");
        Ok(changed)
    }

    /// Delete a job. Unknown job numbers are a no-op.
    pub fn delete(&self, job_number: i64) -> Result<usize> {
        let deleted = with_connection(self.config, |conn| {
            conn.execute("DELETE FROM Jobs WHERE job_number = ?1", [job_number])
        })?;
        debug!(job_number, deleted, "deleted job");
        Ok(deleted)
    }
}
