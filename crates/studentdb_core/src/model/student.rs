//! Student value entity.
//!
//! # Responsibility
//! - Define the in-memory shape of one `students` row.
//!
//! # Invariants
//! - `id` is the stable primary key; no two persisted rows share one.
//! - `birthday` is date-only; `None` is a valid state distinct from any date.
//! - Values are never mutated in place: an update is expressed by building a
//!   new value and asking the repository to replace the row with that id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the `students` table as an immutable value.
///
/// Field names are serialized with the persisted column spelling so that a
/// serialized value and a table row describe the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Primary key.
    pub id: i32,
    /// Nullable `CHAR(40)` column.
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    /// Nullable `CHAR(40)` column.
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    /// Nullable `DATE` column, date-only (no time-of-day or timezone).
    pub birthday: Option<NaiveDate>,
}

impl Student {
    /// Creates a student with both names set and no birthday.
    pub fn new(id: i32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            birthday: None,
        }
    }

    /// Returns a copy of this student with the given birthday set.
    pub fn with_birthday(self, birthday: NaiveDate) -> Self {
        Self {
            birthday: Some(birthday),
            ..self
        }
    }
}
