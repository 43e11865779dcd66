//! Table definitions.

use crate::db::ScopedConnection;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The six tables of the construction database.
///
/// Foreign keys are declared without cascade actions: deleting a parent
/// never touches its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Clients,
    Companies,
    ConstructionSites,
    Jobs,
    Employees,
    Tools,
}

impl Table {
    /// All tables, referenced tables before the tables referencing them.
    pub const ALL: [Table; 6] = [
        Table::Clients,
        Table::Companies,
        Table::ConstructionSites,
        Table::Jobs,
        Table::Employees,
        Table::Tools,
    ];

    /// SQL table name.
    pub fn name(self) -> &'static str {
        match self {
            Table::Clients => "Clients",
            Table::Companies => "Companies",
            Table::ConstructionSites => "ConstructionSites",
            Table::Jobs => "Jobs",
            Table::Employees => "Employees",
            Table::Tools => "Tools",
        }
    }

    /// Idempotent `CREATE TABLE` statement.
    pub fn create_sql(self) -> &'static str {
        match self {
            Table::Clients => {
                "CREATE TABLE IF NOT EXISTS Clients (
                    client_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    client_name VARCHAR(50),
                    client_address VARCHAR(255)
                )"
            }
            Table::Companies => {
                "CREATE TABLE IF NOT EXISTS Companies (
                    company_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    company_name VARCHAR(50),
                    area_of_expertise VARCHAR(255),
                    company_address VARCHAR(255),
                    number_of_employees INTEGER
                )"
            }
            Table::ConstructionSites => {
                "CREATE TABLE IF NOT EXISTS ConstructionSites (
                    construction_site_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    client_id INTEGER,
                    company_id INTEGER,
                    name_of_project VARCHAR(255),
                    construction_site_address VARCHAR(255),
                    construction_site_budget INTEGER,
                    FOREIGN KEY (client_id) REFERENCES Clients(client_id),
                    FOREIGN KEY (company_id) REFERENCES Companies(company_id)
                )"
            }
            Table::Jobs => {
                "CREATE TABLE IF NOT EXISTS Jobs (
                    job_number INTEGER PRIMARY KEY AUTOINCREMENT,
                    construction_site_id INTEGER,
                    job_start_date DATE,
                    job_finish_date DATE,
                    number_of_workers INTEGER,
                    FOREIGN KEY (construction_site_id)
                        REFERENCES ConstructionSites(construction_site_id)
                )"
            }
            Table::Employees => {
                "CREATE TABLE IF NOT EXISTS Employees (
                    employee_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    job_number_id INTEGER,
                    company_id INTEGER,
                    employee_name VARCHAR(50),
                    employee_surname VARCHAR(50),
                    employee_address VARCHAR(255),
                    employee_salary INTEGER,
                    FOREIGN KEY (job_number_id) REFERENCES Jobs(job_number),
                    FOREIGN KEY (company_id) REFERENCES Companies(company_id)
                )"
            }
            Table::Tools => {
                "CREATE TABLE IF NOT EXISTS Tools (
                    tool_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    employee_id INTEGER,
                    tool_name VARCHAR(255),
                    is_battery_powered BOOL,
                    number_of_batteries INTEGER,
                    tool_voltage INTEGER,
                    FOREIGN KEY (employee_id) REFERENCES Employees(employee_id)
                )"
            }
        }
    }

    /// Create this table if it does not exist yet.
    pub fn create(self, conn: &ScopedConnection) -> Result<()> {
        conn.execute(self.create_sql(), [])?;
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = Error;

    /// Accepts the SQL name in any case, plus the singular and
    /// snake_case spellings used on the command line.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.to_ascii_lowercase().replace(['_', '-'], "");
        match key.as_str() {
            "clients" | "client" => Ok(Table::Clients),
            "companies" | "company" => Ok(Table::Companies),
            "constructionsites" | "constructionsite" | "sites" | "site" => {
                Ok(Table::ConstructionSites)
            }
            "jobs" | "job" => Ok(Table::Jobs),
            "employees" | "employee" => Ok(Table::Employees),
            "tools" | "tool" => Ok(Table::Tools),
            _ => Err(Error::UnknownTable(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::{with_connection, DbPath};
    use tempfile::TempDir;

    fn temp_config() -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let config = Config::new(DbPath::new(dir.path().join("schema.db")));
        (dir, config)
    }

    fn schema_sql(config: &Config) -> Vec<(String, String)> {
        with_connection(config, |conn| {
            conn.query(
                "SELECT name, sql FROM sqlite_master WHERE type='table' ORDER BY name",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
        })
        .unwrap()
    }

    #[test]
    fn test_create_all_tables() {
        let (_dir, config) = temp_config();

        with_connection(&config, |conn| {
            for table in Table::ALL {
                table.create(conn)?;
            }
            for table in Table::ALL {
                assert!(conn.table_exists(table.name())?, "{table} missing");
            }
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_create_is_idempotent() {
        let (_dir, config) = temp_config();

        with_connection(&config, |conn| Table::Clients.create(conn)).unwrap();
        let once = schema_sql(&config);
        with_connection(&config, |conn| Table::Clients.create(conn)).unwrap();
        let twice = schema_sql(&config);

        assert_eq!(once, twice);
        let clients = once.iter().filter(|(name, _)| name == "Clients").count();
        assert_eq!(clients, 1);
    }

    #[test]
    fn test_tables_declare_no_cascade() {
        for table in Table::ALL {
            assert!(!table.create_sql().to_uppercase().contains("CASCADE"));
        }
    }

    #[test]
    fn test_table_from_str() {
        assert_eq!("Clients".parse::<Table>().unwrap(), Table::Clients);
        assert_eq!("company".parse::<Table>().unwrap(), Table::Companies);
        assert_eq!(
            "construction_sites".parse::<Table>().unwrap(),
            Table::ConstructionSites
        );
        assert_eq!("site".parse::<Table>().unwrap(), Table::ConstructionSites);
        assert_eq!("TOOLS".parse::<Table>().unwrap(), Table::Tools);
        assert!(matches!(
            "trucks".parse::<Table>(),
            Err(Error::UnknownTable(name)) if name == "trucks"
        ));
    }

    #[test]
    fn test_round_trip_names() {
        for table in Table::ALL {
            assert_eq!(table.name().parse::<Table>().unwrap(), table);
        }
    }
}
