//! Database layer.
//!
//! Handles the scoped SQLite connection and the fixed table definitions.

mod connection;
pub mod schema;

pub use connection::{with_connection, DbPath, ScopedConnection};
pub use schema::Table;
