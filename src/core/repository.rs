//! Repository - entry point for every table operation.

use crate::config::Config;
use crate::core::{Clients, Companies, ConstructionSites, Employees, Jobs, Tools};
use crate::db::{with_connection, Table};
use crate::error::Result;
use tracing::info;

/// Construction database repository.
///
/// Holds only configuration: each operation opens its own scoped
/// connection, runs one statement, commits and closes.
#[derive(Debug, Clone)]
pub struct Repository {
    config: Config,
}

impl Repository {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Create one table if it does not exist yet.
    pub fn create_table(&self, table: Table) -> Result<()> {
        with_connection(&self.config, |conn| table.create(conn))?;
        info!(table = %table, "table ready");
        Ok(())
    }

    /// Create all six tables, each in its own connection.
    pub fn init_schema(&self) -> Result<()> {
        for table in Table::ALL {
            self.create_table(table)?;
        }
        Ok(())
    }

    pub fn clients(&self) -> Clients<'_> {
        Clients::new(&self.config)
    }

    pub fn companies(&self) -> Companies<'_> {
        Companies::new(&self.config)
    }

    pub fn construction_sites(&self) -> ConstructionSites<'_> {
        ConstructionSites::new(&self.config)
    }

    pub fn jobs(&self) -> Jobs<'_> {
        Jobs::new(&self.config)
    }

    pub fn employees(&self) -> Employees<'_> {
        Employees::new(&self.config)
    }

    pub fn tools(&self) -> Tools<'_> {
        Tools::new(&self.config)
    }
}

/// Repository over a fresh, fully initialized database in a temp directory.
#[cfg(test)]
pub(crate) fn test_repo() -> (tempfile::TempDir, Repository) {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::new(crate::db::DbPath::new(dir.path().join("ConstructionDB")));
    let repo = Repository::new(config);
    repo.init_schema().unwrap();
    (dir, repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbPath;

    #[test]
    fn test_init_schema_creates_six_tables() {
        let (_dir, repo) = test_repo();

        let tables = with_connection(repo.config(), |conn| {
            conn.query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
                [],
                |r| r.get::<_, String>(0),
            )
        })
        .unwrap();
        assert_eq!(
            tables,
            vec![
                "Clients",
                "Companies",
                "ConstructionSites",
                "Employees",
                "Jobs",
                "Tools"
            ]
        );
    }

    #[test]
    fn test_init_schema_twice_keeps_data() {
        let (_dir, repo) = test_repo();
        repo.clients().create("SISK", "London").unwrap();

        repo.init_schema().unwrap();
        assert_eq!(repo.clients().list().unwrap().len(), 1);
    }

    #[test]
    fn test_create_single_table() {
        let dir = tempfile::TempDir::new().unwrap();
        let repo = Repository::new(Config::new(DbPath::new(dir.path().join("one.db"))));

        repo.create_table(Table::Companies).unwrap();
        repo.create_table(Table::Companies).unwrap();

        let exists = with_connection(repo.config(), |conn| {
            Ok((
                conn.table_exists("Companies")?,
                conn.table_exists("Clients")?,
            ))
        })
        .unwrap();
        assert_eq!(exists, (true, false));
    }

    #[test]
    fn test_operations_before_schema_fail() {
        let dir = tempfile::TempDir::new().unwrap();
        let repo = Repository::new(Config::new(DbPath::new(dir.path().join("empty.db"))));

        assert!(repo.clients().create("SISK", "London").is_err());
        assert!(repo.tools().list().is_err());
    }

    #[test]
    fn test_create_on_locked_database_fails_busy() {
        let (_dir, repo) = test_repo();
        let repo = Repository::new(
            repo.config()
                .clone()
                .with_busy_timeout(std::time::Duration::from_millis(50)),
        );

        let holder = rusqlite::Connection::open(repo.config().db_path().as_path()).unwrap();
        holder.execute_batch("BEGIN IMMEDIATE").unwrap();

        let err = repo.clients().create("SISK", "London").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Db(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::DatabaseBusy
        ));

        holder.execute_batch("COMMIT").unwrap();
        assert_eq!(repo.clients().create("SISK", "London").unwrap(), 1);
    }
}
