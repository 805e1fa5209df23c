//! Repository layer: typed table contracts over a borrowed connection.
//!
//! # Responsibility
//! - Define the generic table contract shared by repository implementations.
//! - Isolate SQL statement construction and row mapping from callers.
//!
//! # Invariants
//! - Expected outcomes (not found, duplicate key, DDL failure) are return
//!   values; only unexpected driver failures become `RepoError`.
//! - Every caller-supplied value reaches the store through parameter
//!   binding, never through statement text.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod students;

pub type RepoResult<T> = Result<T, RepoError>;

/// Unexpected failure on a repository operation.
///
/// Absence of a row and duplicate-key conflicts are not errors; they are
/// encoded in the return values of the [`Table`] operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted row data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Generic contract of one fixed relational table holding `Record` values
/// keyed by `Key`.
///
/// Schema operations are best-effort booleans: `false` covers "already
/// exists" and "does not exist" alike. Row operations report absence and
/// conflicts in their `Ok` values and reserve `Err` for driver failures.
pub trait Table {
    type Key;
    type Record;

    /// Fixed name of the backing table.
    fn table_name(&self) -> &'static str;

    /// Creates the backing table. `false` on any DDL failure.
    fn create_table(&self) -> bool;

    /// Drops the backing table. `false` on any DDL failure.
    fn drop_table(&self) -> bool;

    /// Looks up exactly one record by key.
    fn find_by_primary_key(&self, key: Self::Key) -> RepoResult<Option<Self::Record>>;

    /// Returns every record, in implementation-defined order.
    fn find_all(&self) -> RepoResult<Vec<Self::Record>>;

    /// Inserts a new record. `Ok(false)` exactly when the store rejects the
    /// write for violating a uniqueness constraint.
    fn save(&self, record: &Self::Record) -> RepoResult<bool>;

    /// Deletes the record with the given key. `Ok(true)` iff a row was
    /// actually removed.
    fn delete(&self, key: Self::Key) -> RepoResult<bool>;

    /// Replaces all non-key fields of the record with the same key.
    /// `Ok(true)` iff a row was actually modified.
    fn update(&self, record: &Self::Record) -> RepoResult<bool>;
}
