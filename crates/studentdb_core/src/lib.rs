//! Data-access layer for the student registry.
//! This crate owns the persisted schema contract and its row mapping.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::Student;
pub use repo::students::{SqliteStudentsTable, TABLE_NAME};
pub use repo::{RepoError, RepoResult, Table};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
