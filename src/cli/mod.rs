//! Command-line front end.

pub mod output;

use crate::config::Config;
use crate::core::Repository;
use crate::db::{DbPath, Table};
use crate::error::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "construction-db")]
#[command(about = "Construction business database: clients, companies, sites, jobs, employees, tools")]
#[command(version)]
pub struct Cli {
    /// Database file
    #[arg(long, global = true, default_value = DbPath::DEFAULT_FILE)]
    pub db: PathBuf,

    /// Do not enforce declared foreign keys
    #[arg(long, global = true)]
    pub no_foreign_keys: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(DbPath::new(&self.db)).with_foreign_keys(!self.no_foreign_keys)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create all six tables (idempotent)
    Init,

    /// Create a single table (idempotent)
    CreateTable {
        /// Table name, e.g. Clients or construction_sites
        table: Table,
    },

    /// Manage clients
    #[command(subcommand)]
    Client(ClientCommand),

    /// Manage companies
    #[command(subcommand)]
    Company(CompanyCommand),

    /// Manage construction sites
    #[command(subcommand)]
    Site(SiteCommand),

    /// Manage jobs
    #[command(subcommand)]
    Job(JobCommand),

    /// Manage employees
    #[command(subcommand)]
    Employee(EmployeeCommand),

    /// Manage tools
    #[command(subcommand)]
    Tool(ToolCommand),
}

#[derive(Subcommand)]
pub enum ClientCommand {
    /// Add a client
    Add { name: String, address: String },
    /// List all clients
    List,
    /// Change the address of every client at OLD_ADDRESS
    Update {
        old_address: String,
        new_address: String,
    },
    /// Delete a client
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum CompanyCommand {
    /// Add a company
    Add {
        name: String,
        area_of_expertise: String,
        address: String,
        employees: i64,
    },
    /// List all companies
    List,
    /// Change the employee count of every company currently at OLD
    Update { old: i64, new: i64 },
    /// Delete a company
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum SiteCommand {
    /// Add a construction site
    Add {
        /// Client commissioning the site
        #[arg(long)]
        client: Option<i64>,
        /// Company running the site
        #[arg(long)]
        company: Option<i64>,
        project: String,
        address: String,
        budget: i64,
    },
    /// List all construction sites
    List,
    /// Set the budget of a construction site
    Update { id: i64, budget: i64 },
    /// Delete a construction site
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// Add a job
    Add {
        /// Construction site the job belongs to
        #[arg(long)]
        site: Option<i64>,
        /// Start date (YYYY-MM-DD)
        start: NaiveDate,
        /// Finish date (YYYY-MM-DD)
        finish: NaiveDate,
        workers: i64,
    },
    /// List all jobs
    List,
    /// Set the number of workers on a job
    Update { job_number: i64, workers: i64 },
    /// Delete a job
    Delete { job_number: i64 },
}

#[derive(Subcommand)]
pub enum EmployeeCommand {
    /// Add an employee
    Add {
        /// Job number the employee works on
        #[arg(long)]
        job: Option<i64>,
        /// Employing company
        #[arg(long)]
        company: Option<i64>,
        name: String,
        surname: String,
        address: String,
        salary: i64,
    },
    /// List all employees
    List,
    /// Set an employee's salary
    Update { id: i64, salary: i64 },
    /// Delete an employee
    Delete { id: i64 },
    /// Show an employee with their company and job
    Details { id: i64 },
}

#[derive(Subcommand)]
pub enum ToolCommand {
    /// Add a tool
    Add {
        /// Employee the tool is issued to
        #[arg(long)]
        employee: Option<i64>,
        #[arg(long)]
        battery_powered: bool,
        name: String,
        batteries: i64,
        voltage: i64,
    },
    /// List all tools
    List,
    /// Set the number of batteries of a tool
    Update { id: i64, batteries: i64 },
    /// Delete a tool
    Delete { id: i64 },
}

/// Run a parsed command line, writing results to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let repo = Repository::new(cli.config());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&repo, cli.command, &mut out)
}

/// Execute one command against `repo`.
pub fn execute<W: Write>(repo: &Repository, command: Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Init => {
            repo.init_schema()?;
            writeln!(out, "Initialized {}", repo.config().db_path())?;
        }
        Commands::CreateTable { table } => {
            repo.create_table(table)?;
            writeln!(out, "Created {table}")?;
        }
        Commands::Client(cmd) => client(repo, cmd, out)?,
        Commands::Company(cmd) => company(repo, cmd, out)?,
        Commands::Site(cmd) => site(repo, cmd, out)?,
        Commands::Job(cmd) => job(repo, cmd, out)?,
        Commands::Employee(cmd) => employee(repo, cmd, out)?,
        Commands::Tool(cmd) => tool(repo, cmd, out)?,
    }
    Ok(())
}

fn client<W: Write>(repo: &Repository, cmd: ClientCommand, out: &mut W) -> Result<()> {
    let clients = repo.clients();
    match cmd {
        ClientCommand::Add { name, address } => {
            writeln!(out, "{}", clients.create(&name, &address)?)?;
        }
        ClientCommand::List => output::write_rows(out, &clients.list()?)?,
        ClientCommand::Update {
            old_address,
            new_address,
        } => {
            writeln!(out, "{}", clients.update_address(&old_address, &new_address)?)?;
        }
        ClientCommand::Delete { id } => writeln!(out, "{}", clients.delete(id)?)?,
    }
    Ok(())
}

fn company<W: Write>(repo: &Repository, cmd: CompanyCommand, out: &mut W) -> Result<()> {
    let companies = repo.companies();
    match cmd {
        CompanyCommand::Add {
            name,
            area_of_expertise,
            address,
            employees,
        } => {
            let id = companies.create(&name, &area_of_expertise, &address, employees)?;
            writeln!(out, "{id}")?;
        }
        CompanyCommand::List => output::write_rows(out, &companies.list()?)?,
        CompanyCommand::Update { old, new } => {
            writeln!(out, "{}", companies.update_employee_count(old, new)?)?;
        }
        CompanyCommand::Delete { id } => writeln!(out, "{}", companies.delete(id)?)?,
    }
    Ok(())
}

fn site<W: Write>(repo: &Repository, cmd: SiteCommand, out: &mut W) -> Result<()> {
    let sites = repo.construction_sites();
    match cmd {
        SiteCommand::Add {
            client,
            company,
            project,
            address,
            budget,
        } => {
            let id = sites.create(client, company, &project, &address, budget)?;
            writeln!(out, "{id}")?;
        }
        SiteCommand::List => output::write_rows(out, &sites.list()?)?,
        SiteCommand::Update { id, budget } => {
            writeln!(out, "{}", sites.update_budget(id, budget)?)?;
        }
        SiteCommand::Delete { id } => writeln!(out, "{}", sites.delete(id)?)?,
    }
    Ok(())
}

fn job<W: Write>(repo: &Repository, cmd: JobCommand, out: &mut W) -> Result<()> {
    let jobs = repo.jobs();
    match cmd {
        JobCommand::Add {
            site,
            start,
            finish,
            workers,
        } => {
            writeln!(out, "{}", jobs.create(site, start, finish, workers)?)?;
        }
        JobCommand::List => output::write_rows(out, &jobs.list()?)?,
        JobCommand::Update {
            job_number,
            workers,
        } => {
            writeln!(out, "{}", jobs.update_worker_count(job_number, workers)?)?;
        }
        JobCommand::Delete { job_number } => writeln!(out, "{}", jobs.delete(job_number)?)?,
    }
    Ok(())
}

fn employee<W: Write>(repo: &Repository, cmd: EmployeeCommand, out: &mut W) -> Result<()> {
    let employees = repo.employees();
    match cmd {
        EmployeeCommand::Add {
            job,
            company,
            name,
            surname,
            address,
            salary,
        } => {
            let id = employees.create(job, company, &name, &surname, &address, salary)?;
            writeln!(out, "{id}")?;
        }
        EmployeeCommand::List => output::write_rows(out, &employees.list()?)?,
        EmployeeCommand::Update { id, salary } => {
            writeln!(out, "{}", employees.update_salary(id, salary)?)?;
        }
        EmployeeCommand::Delete { id } => writeln!(out, "{}", employees.delete(id)?)?,
        EmployeeCommand::Details { id } => output::write_rows(out, &employees.all_data(id)?)?,
    }
    Ok(())
}

fn tool<W: Write>(repo: &Repository, cmd: ToolCommand, out: &mut W) -> Result<()> {
    let tools = repo.tools();
    match cmd {
        ToolCommand::Add {
            employee,
            battery_powered,
            name,
            batteries,
            voltage,
        } => {
            let id = tools.create(employee, &name, battery_powered, batteries, voltage)?;
            writeln!(out, "{id}")?;
        }
        ToolCommand::List => output::write_rows(out, &tools.list()?)?,
        ToolCommand::Update { id, batteries } => {
            writeln!(out, "{}", tools.update_battery_count(id, batteries)?)?;
        }
        ToolCommand::Delete { id } => writeln!(out, "{}", tools.delete(id)?)?,
    }
    Ok(())
}
