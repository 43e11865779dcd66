//! Employees and the combined employee/company/job view.

use crate::config::Config;
use crate::core::record::{opt_int, opt_text, Record};
use crate::db::with_connection;
use crate::error::Result;
use rusqlite::types::Value;
use rusqlite::Row;
use tracing::debug;

/// An employee of a company, assigned to a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub job_number: Option<i64>,
    pub company_id: Option<i64>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub address: Option<String>,
    pub salary: Option<i64>,
}

impl Employee {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("employee_id")?,
            job_number: row.get("job_number_id")?,
            company_id: row.get("company_id")?,
            name: row.get("employee_name")?,
            surname: row.get("employee_surname")?,
            address: row.get("employee_address")?,
            salary: row.get("employee_salary")?,
        })
    }
}

impl Record for Employee {
    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            opt_int(self.job_number),
            opt_int(self.company_id),
            opt_text(&self.name),
            opt_text(&self.surname),
            opt_text(&self.address),
            opt_int(self.salary),
        ]
    }
}

/// One row of [`Employees::all_data`]: an employee joined with its company
/// and its job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub employee_id: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub address: Option<String>,
    pub salary: Option<i64>,
    pub company_name: Option<String>,
    pub area_of_expertise: Option<String>,
    pub company_address: Option<String>,
    pub company_employee_count: Option<i64>,
    pub job_start_date: Option<String>,
    pub job_finish_date: Option<String>,
}

impl EmployeeRecord {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            employee_id: row.get("employee_id")?,
            name: row.get("employee_name")?,
            surname: row.get("employee_surname")?,
            address: row.get("employee_address")?,
            salary: row.get("employee_salary")?,
            company_name: row.get("company_name")?,
            area_of_expertise: row.get("area_of_expertise")?,
            company_address: row.get("company_address")?,
            company_employee_count: row.get("number_of_employees")?,
            job_start_date: row.get("job_start_date")?,
            job_finish_date: row.get("job_finish_date")?,
        })
    }
}

impl Record for EmployeeRecord {
    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.employee_id),
            opt_text(&self.name),
            opt_text(&self.surname),
            opt_text(&self.address),
            opt_int(self.salary),
            opt_text(&self.company_name),
            opt_text(&self.area_of_expertise),
            opt_text(&self.company_address),
            opt_int(self.company_employee_count),
            opt_text(&self.job_start_date),
            opt_text(&self.job_finish_date),
        ]
    }
}

/// Operations on the Employees table.
pub struct Employees<'a> {
    config: &'a Config,
}

impl<'a> Employees<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Insert an employee and return its id.
    pub fn create(
        &self,
        job_number: Option<i64>,
        company_id: Option<i64>,
        name: &str,
        surname: &str,
        address: &str,
        salary: i64,
    ) -> Result<i64> {
        let id = with_connection(self.config, |conn| {
            conn.execute(
                "INSERT INTO Employees (job_number_id, company_id, employee_name,
                     employee_surname, employee_address, employee_salary)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                (job_number, company_id, name, surname, address, salary),
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        debug!(id, ?job_number, ?company_id, name, surname, "created employee");
        Ok(id)
    }

    pub fn list(&self) -> Result<Vec<Employee>> {
        with_connection(self.config, |conn| {
            conn.query(
                "SELECT employee_id, job_number_id, company_id, employee_name,
                        employee_surname, employee_address, employee_salary
                 FROM Employees
                 ORDER BY employee_id",
                [],
                Employee::from_row,
            )
        })
    }

    pub fn update_salary(&self, id: i64, salary: i64) -> Result<usize> {
        let changed = with_connection(self.config, |conn| {
            conn.execute(
                "UPDATE Employees SET employee_salary = ?1 WHERE employee_id = ?2",
                (salary, id),
            )
        })?;
        debug!(id, salary, changed, "updated employee salary");
        Ok(changed)
    }

    /// Delete an employee. Unknown ids are a no-op.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let deleted = with_connection(self.config, |conn| {
            conn.execute("DELETE FROM Employees WHERE employee_id = ?1", [id])
        })?;
        debug!(id, deleted, "deleted employee");
        Ok(deleted)
    }

    /// Employee `id` joined with its company and its job.
    ///
    /// Inner joins: an unknown id, or an employee whose company or job
    /// reference does not resolve, yields no rows.
    pub fn all_data(&self, id: i64) -> Result<Vec<EmployeeRecord>> {
        let records = with_connection(self.config, |conn| {
            conn.query(
                "SELECT e.employee_id, e.employee_name, e.employee_surname, e.employee_address,
                        e.employee_salary, c.company_name, c.area_of_expertise, c.company_address,
                        c.number_of_employees, j.job_start_date, j.job_finish_date
                 FROM Employees e
                 JOIN Companies c ON e.company_id = c.company_id
                 JOIN Jobs j ON e.job_number_id = j.job_number
                 WHERE e.employee_id = ?1",
                [id],
                EmployeeRecord::from_row,
            )
        })?;
        debug!(id, rows = records.len(), "loaded employee data");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::repository::test_repo;
    use crate::db::with_connection;
    use crate::Repository;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    /// Client, company, site and job, as in the sample data set.
    /// Returns (company id, job number).
    fn seed(repo: &Repository) -> (i64, i64) {
        let client = repo
            .clients()
            .create("SISK", "35 Geater London Road, London, UK")
            .unwrap();
        let company = repo
            .companies()
            .create(
                "Brogan Group",
                "Scaffolding",
                "3 Arnos Grove, Greater London, UK",
                200,
            )
            .unwrap();
        let site = repo
            .construction_sites()
            .create(
                Some(client),
                Some(company),
                "Walkie-Talkie",
                "20 Fenchurch Street, London, UK",
                350_000_000,
            )
            .unwrap();
        let job = repo
            .jobs()
            .create(Some(site), date("2012-11-30"), date("2016-04-04"), 785)
            .unwrap();
        (company, job)
    }

    #[test]
    fn test_create_and_list() {
        let (_dir, repo) = test_repo();
        let (company, job) = seed(&repo);

        let id = repo
            .employees()
            .create(
                Some(job),
                Some(company),
                "Peter",
                "Arbuckle",
                "123 Silly House, Manchester, UK",
                45300,
            )
            .unwrap();

        let employees = repo.employees().list().unwrap();
        assert_eq!(
            employees,
            vec![Employee {
                id,
                job_number: Some(job),
                company_id: Some(company),
                name: Some("Peter".to_string()),
                surname: Some("Arbuckle".to_string()),
                address: Some("123 Silly House, Manchester, UK".to_string()),
                salary: Some(45300),
            }]
        );
    }

    #[test]
    fn test_update_salary_and_delete() {
        let (_dir, repo) = test_repo();
        let employees = repo.employees();
        let a = employees.create(None, None, "A", "One", "1 Street", 100).unwrap();
        let b = employees.create(None, None, "B", "Two", "2 Street", 100).unwrap();

        assert_eq!(employees.update_salary(b, 150).unwrap(), 1);
        assert_eq!(employees.update_salary(999, 1).unwrap(), 0);
        let salaries: Vec<Option<i64>> =
            employees.list().unwrap().iter().map(|e| e.salary).collect();
        assert_eq!(salaries, vec![Some(100), Some(150)]);

        assert_eq!(employees.delete(a).unwrap(), 1);
        assert_eq!(employees.delete(a).unwrap(), 0);
        let ids: Vec<i64> = employees.list().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![b]);
    }

    #[test]
    fn test_all_data_joins_company_and_job() {
        let (_dir, repo) = test_repo();
        let (company, job) = seed(&repo);
        let id = repo
            .employees()
            .create(
                Some(job),
                Some(company),
                "Peter",
                "Arbuckle",
                "123 Silly House, Manchester, UK",
                45300,
            )
            .unwrap();
        assert_eq!(id, 1);

        let records = repo.employees().all_data(1).unwrap();
        assert_eq!(
            records,
            vec![EmployeeRecord {
                employee_id: 1,
                name: Some("Peter".to_string()),
                surname: Some("Arbuckle".to_string()),
                address: Some("123 Silly House, Manchester, UK".to_string()),
                salary: Some(45300),
                company_name: Some("Brogan Group".to_string()),
                area_of_expertise: Some("Scaffolding".to_string()),
                company_address: Some("3 Arnos Grove, Greater London, UK".to_string()),
                company_employee_count: Some(200),
                job_start_date: Some("2012-11-30".to_string()),
                job_finish_date: Some("2016-04-04".to_string()),
            }]
        );
    }

    #[test]
    fn test_all_data_unknown_employee() {
        let (_dir, repo) = test_repo();
        seed(&repo);

        assert!(repo.employees().all_data(7).unwrap().is_empty());
    }

    #[test]
    fn test_all_data_missing_reference() {
        let (_dir, repo) = test_repo();
        let (company, job) = seed(&repo);

        let no_job = repo
            .employees()
            .create(None, Some(company), "A", "One", "1 Street", 1)
            .unwrap();
        let no_company = repo
            .employees()
            .create(Some(job), None, "B", "Two", "2 Street", 1)
            .unwrap();

        assert!(repo.employees().all_data(no_job).unwrap().is_empty());
        assert!(repo.employees().all_data(no_company).unwrap().is_empty());
    }

    #[test]
    fn test_all_data_dangling_reference_when_relaxed() {
        let (_dir, repo) = test_repo();
        let (company, _job) = seed(&repo);
        let relaxed = Repository::new(repo.config().clone().with_foreign_keys(false));

        let id = relaxed
            .employees()
            .create(Some(404), Some(company), "A", "One", "1 Street", 1)
            .unwrap();

        assert_eq!(relaxed.employees().list().unwrap().len(), 1);
        assert!(relaxed.employees().all_data(id).unwrap().is_empty());
    }

    #[test]
    fn test_all_data_with_null_and_non_iso_columns() {
        let (_dir, repo) = test_repo();
        with_connection(repo.config(), |conn| {
            conn.execute("INSERT INTO Companies (company_name) VALUES ('Brogan Group')", [])?;
            conn.execute(
                "INSERT INTO Jobs (job_start_date, job_finish_date) VALUES ('30/11/2012', NULL)",
                [],
            )?;
            conn.execute(
                "INSERT INTO Employees (job_number_id, company_id, employee_name) VALUES (1, 1, 'Peter')",
                [],
            )
        })
        .unwrap();

        assert_eq!(repo.employees().list().unwrap()[0].salary, None);

        let records = repo.employees().all_data(1).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("Peter"));
        assert_eq!(records[0].company_employee_count, None);
        assert_eq!(records[0].job_start_date.as_deref(), Some("30/11/2012"));
        assert_eq!(records[0].job_finish_date, None);
    }
}
