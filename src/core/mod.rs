//! Entity models and the repository operating on them.

pub mod client;
pub mod company;
pub mod construction_site;
pub mod employee;
pub mod job;
pub mod record;
pub mod repository;
pub mod tool;

pub use client::{Client, Clients};
pub use company::{Companies, Company};
pub use construction_site::{ConstructionSite, ConstructionSites};
pub use employee::{Employee, EmployeeRecord, Employees};
pub use job::{Job, Jobs};
pub use record::Record;
pub use repository::Repository;
pub use tool::{Tool, Tools};
