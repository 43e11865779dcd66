//! # construction-db
//!
//! Data-access layer for a construction business: clients, companies,
//! construction sites, jobs, employees and tools, stored in one SQLite file.
//! Every operation opens its own connection, runs a single statement, then
//! commits and closes.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use crate::core::{Record, Repository};
pub use db::{DbPath, Table};
pub use error::{Error, Result};
