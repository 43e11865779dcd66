//! Runtime configuration threaded through the repository.

use crate::db::DbPath;
use std::time::Duration;

/// Settings shared by every database operation.
#[derive(Debug, Clone)]
pub struct Config {
    db_path: DbPath,
    enforce_foreign_keys: bool,
    busy_timeout: Duration,
}

impl Config {
    /// How long a connection waits on a locked file before failing.
    pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

    /// Configuration for the database at `path`, foreign keys enforced.
    pub fn new(db_path: DbPath) -> Self {
        Self {
            db_path,
            enforce_foreign_keys: true,
            busy_timeout: Self::DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Turn SQLite foreign key enforcement on or off for every connection.
    ///
    /// With enforcement off, declared references are not checked: a row may
    /// point at a key that does not exist and parents can be deleted from
    /// under their children.
    pub fn with_foreign_keys(mut self, enforce: bool) -> Self {
        self.enforce_foreign_keys = enforce;
        self
    }

    /// Wait at most `timeout` for another writer to release the file.
    ///
    /// After that the statement fails with SQLite's "database is locked".
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub fn db_path(&self) -> &DbPath {
        &self.db_path
    }

    pub fn enforce_foreign_keys(&self) -> bool {
        self.enforce_foreign_keys
    }

    pub fn busy_timeout(&self) -> Duration {
        self.busy_timeout
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DbPath::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.db_path().as_path(), Path::new("ConstructionDB"));
        assert!(config.enforce_foreign_keys());
        assert_eq!(config.busy_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_with_foreign_keys() {
        let config = Config::new(DbPath::new("site.db")).with_foreign_keys(false);
        assert_eq!(config.db_path().as_path(), Path::new("site.db"));
        assert!(!config.enforce_foreign_keys());
    }

    #[test]
    fn test_with_busy_timeout() {
        let config = Config::default().with_busy_timeout(Duration::from_millis(50));
        assert_eq!(config.busy_timeout(), Duration::from_millis(50));
        assert!(config.enforce_foreign_keys());
    }
}
