//! Repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define CRUD contracts for students and theses.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate entities before any SQL mutation.
//! - Update/delete paths commit only after exactly one row was affected.
//! - Repository APIs return semantic errors (`NotFound`, `UnknownAuthor`) in
//!   addition to DB transport errors.

pub mod error;
pub mod student_repo;
pub mod thesis_repo;

use crate::repo::error::{EntityRef, RepoError, RepoResult};
use rusqlite::Connection;

/// Verifies a table exists with at least the listed columns.
pub(crate) fn ensure_table_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(RepoError::MissingRequiredTable(table));
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(1)?);
    }

    for column in columns {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }
    Ok(())
}

/// Maps an affected-row count of a keyed write to the repository contract.
pub(crate) fn ensure_single_row(changed: usize, target: EntityRef) -> RepoResult<()> {
    match changed {
        0 => Err(RepoError::NotFound(target)),
        1 => Ok(()),
        other => Err(RepoError::Consistency(format!(
            "{other} rows affected for {target}, expected exactly one"
        ))),
    }
}

/// Returns the id of an entity that must already be persisted.
pub(crate) fn require_id(id: Option<i64>, entity: &'static str) -> RepoResult<i64> {
    id.ok_or_else(|| RepoError::InvalidArgument(format!("{entity} id is not set")))
}

/// Rejects entities that already carry an id on create.
pub(crate) fn require_no_id(id: Option<i64>, entity: &'static str) -> RepoResult<()> {
    match id {
        Some(value) => Err(RepoError::InvalidArgument(format!(
            "{entity} id is already set ({value})"
        ))),
        None => Ok(()),
    }
}

/// Reads the rowid generated by the last insert on this connection.
pub(crate) fn generated_key(conn: &Connection, entity: &'static str) -> RepoResult<i64> {
    match conn.last_insert_rowid() {
        0 => Err(RepoError::Consistency(format!(
            "no generated key returned after inserting {entity}"
        ))),
        id => Ok(id),
    }
}
