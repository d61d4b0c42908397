//! Student repository contract and SQLite implementation.
//!
//! # Invariants
//! - `create_student` assigns the generated id to the caller's record.
//! - `update_student`/`delete_student` run in an immediate transaction that
//!   is committed only when exactly one row was affected.

use crate::model::student::{Student, StudentId};
use crate::repo::error::{EntityRef, RepoError, RepoResult};
use crate::repo::{ensure_single_row, ensure_table_ready, generated_key, require_id, require_no_id};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

pub(crate) const STUDENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    surname
FROM student";

/// Repository interface for student CRUD operations.
pub trait StudentRepository {
    /// Persists a new student and writes the generated id back into it.
    fn create_student(&self, student: &mut Student) -> RepoResult<StudentId>;
    /// Replaces name and surname of an existing student.
    fn update_student(&self, student: &Student) -> RepoResult<()>;
    /// Removes an existing student that no thesis references.
    fn delete_student(&self, student: &Student) -> RepoResult<()>;
    /// Gets one student by id; `Ok(None)` when no row matches.
    fn get_student(&self, id: StudentId) -> RepoResult<Option<Student>>;
    /// Lists every stored student.
    fn list_students(&self) -> RepoResult<Vec<Student>>;
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "student", &["id", "name", "surname"])?;
        Ok(Self { conn })
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn create_student(&self, student: &mut Student) -> RepoResult<StudentId> {
        require_no_id(student.id, "student")?;
        student.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO student (name, surname) VALUES (?1, ?2);",
            params![student.name.as_str(), student.surname.as_str()],
        )?;
        if inserted != 1 {
            return Err(RepoError::Consistency(format!(
                "{inserted} rows inserted for new student, expected exactly one"
            )));
        }

        let id = generated_key(self.conn, "student")?;
        student.id = Some(id);
        Ok(id)
    }

    fn update_student(&self, student: &Student) -> RepoResult<()> {
        let id = require_id(student.id, "student")?;
        student.validate()?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "UPDATE student
             SET
                name = ?2,
                surname = ?3
             WHERE id = ?1;",
            params![id, student.name.as_str(), student.surname.as_str()],
        )?;
        ensure_single_row(changed, EntityRef::Student(id))?;
        tx.commit()?;
        Ok(())
    }

    fn delete_student(&self, student: &Student) -> RepoResult<()> {
        let id = require_id(student.id, "student")?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let referenced: i64 = tx.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM thesis
                WHERE author_id = ?1
            );",
            [id],
            |row| row.get(0),
        )?;
        if referenced == 1 {
            return Err(RepoError::StudentHasTheses(id));
        }

        let changed = tx.execute("DELETE FROM student WHERE id = ?1;", [id])?;
        ensure_single_row(changed, EntityRef::Student(id))?;
        tx.commit()?;
        Ok(())
    }

    fn get_student(&self, id: StudentId) -> RepoResult<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;

        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let student = parse_student_row(row)?;
        if rows.next()?.is_some() {
            return Err(RepoError::Consistency(format!(
                "more than one student with id {id}"
            )));
        }

        Ok(Some(student))
    }

    fn list_students(&self) -> RepoResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();
        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }
        Ok(students)
    }
}

pub(crate) fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    Ok(Student {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        surname: row.get("surname")?,
    })
}
