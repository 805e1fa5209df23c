//! Students table repository over SQLite.
//!
//! # Responsibility
//! - Translate typed `Student` operations into statements against the fixed
//!   `students` table and map result rows back into values.
//!
//! # Invariants
//! - The table name is the only identifier spliced into SQL text, always
//!   from [`TABLE_NAME`]; every caller-supplied value is bound as a
//!   parameter.
//! - Birthday values cross the storage boundary as ISO `YYYY-MM-DD` text;
//!   NULL maps to an absent birthday, never to a sentinel date.

use crate::model::student::Student;
use crate::repo::{RepoError, RepoResult, Table};
use chrono::NaiveDate;
use log::debug;
use rusqlite::{params, Connection, Row};

/// Fixed name of the backing table.
pub const TABLE_NAME: &str = "students";

const STUDENT_SELECT_SQL: &str = "SELECT id, firstName, lastName, birthday FROM students";

/// SQLite-backed repository for the `students` table.
///
/// Borrows an already-open connection supplied by the caller; the repository
/// never opens, closes, or pools connections. Each operation issues exactly
/// one statement and fully consumes its result before returning. Not safe
/// for concurrent use over a single connection unless the driver serializes
/// statement execution itself.
pub struct SqliteStudentsTable<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentsTable<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Returns every student whose birthday exactly equals the given date.
    ///
    /// Rows with a NULL birthday never match. Order is
    /// implementation-defined.
    pub fn find_by_birthday(&self, date: NaiveDate) -> RepoResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} WHERE birthday = ?1;"))?;
        let mut rows = stmt.query(params![date_to_db(date)])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }
}

impl Table for SqliteStudentsTable<'_> {
    type Key = i32;
    type Record = Student;

    fn table_name(&self) -> &'static str {
        TABLE_NAME
    }

    fn create_table(&self) -> bool {
        let ddl = format!(
            "CREATE TABLE {TABLE_NAME} (
                id INTEGER PRIMARY KEY NOT NULL,
                firstName CHAR(40),
                lastName CHAR(40),
                birthday DATE
            );"
        );
        match self.conn.execute_batch(&ddl) {
            Ok(()) => true,
            Err(err) => {
                debug!("event=create_table module=repo status=error error={err}");
                false
            }
        }
    }

    fn drop_table(&self) -> bool {
        match self.conn.execute_batch(&format!("DROP TABLE {TABLE_NAME};")) {
            Ok(()) => true,
            Err(err) => {
                debug!("event=drop_table module=repo status=error error={err}");
                false
            }
        }
    }

    fn find_by_primary_key(&self, key: i32) -> RepoResult<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![key])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_student_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Student>> {
        let mut stmt = self.conn.prepare(STUDENT_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }

    fn save(&self, student: &Student) -> RepoResult<bool> {
        let inserted = self.conn.execute(
            &format!(
                "INSERT INTO {TABLE_NAME} (id, firstName, lastName, birthday)
                 VALUES (?1, ?2, ?3, ?4);"
            ),
            params![
                student.id,
                student.first_name.as_deref(),
                student.last_name.as_deref(),
                student.birthday.map(date_to_db),
            ],
        );

        match inserted {
            Ok(_) => Ok(true),
            Err(err) if is_constraint_violation(&err) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn delete(&self, key: i32) -> RepoResult<bool> {
        let removed = self.conn.execute(
            &format!("DELETE FROM {TABLE_NAME} WHERE id = ?1;"),
            params![key],
        )?;
        Ok(removed > 0)
    }

    fn update(&self, student: &Student) -> RepoResult<bool> {
        let changed = self.conn.execute(
            &format!(
                "UPDATE {TABLE_NAME}
                 SET firstName = ?1, lastName = ?2, birthday = ?3
                 WHERE id = ?4;"
            ),
            params![
                student.first_name.as_deref(),
                student.last_name.as_deref(),
                student.birthday.map(date_to_db),
                student.id,
            ],
        )?;
        Ok(changed > 0)
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    let birthday = match row.get::<_, Option<String>>("birthday")? {
        Some(text) => Some(date_from_db(&text).ok_or_else(|| {
            RepoError::InvalidData(format!("invalid date value `{text}` in students.birthday"))
        })?),
        None => None,
    };

    Ok(Student {
        id: row.get("id")?,
        first_name: row.get("firstName")?,
        last_name: row.get("lastName")?,
        birthday,
    })
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn date_to_db(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn date_from_db(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::{date_from_db, date_to_db};
    use chrono::NaiveDate;

    #[test]
    fn date_round_trips_through_db_text() {
        let date = NaiveDate::from_ymd_opt(1999, 5, 5).unwrap();
        assert_eq!(date_to_db(date), "1999-05-05");
        assert_eq!(date_from_db("1999-05-05"), Some(date));
    }

    #[test]
    fn malformed_db_text_is_rejected() {
        assert_eq!(date_from_db("not-a-date"), None);
        assert_eq!(date_from_db("2000-13-01"), None);
        assert_eq!(date_from_db(""), None);
    }
}
