//! Thesis repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist theses with their author stored as `thesis.author_id`.
//! - Rebuild the full author `Student` on every read.
//!
//! # Invariants
//! - Writes verify the author row exists inside the same transaction.
//! - Reads treat a dangling `author_id` as a consistency failure.

use crate::model::student::{Student, StudentId};
use crate::model::thesis::{Thesis, ThesisId, ThesisType};
use crate::model::validation::ValidationError;
use crate::repo::error::{EntityRef, RepoError, RepoResult};
use crate::repo::student_repo::{parse_student_row, STUDENT_SELECT_SQL};
use crate::repo::{ensure_single_row, ensure_table_ready, generated_key, require_id, require_no_id};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const THESIS_SELECT_SQL: &str = "SELECT
    id,
    name,
    type,
    year_of_publication,
    author_id
FROM thesis";

/// Repository interface for thesis CRUD operations.
pub trait ThesisRepository {
    /// Persists a new thesis and writes the generated id back into it.
    fn create_thesis(&self, thesis: &mut Thesis) -> RepoResult<ThesisId>;
    /// Replaces every column of an existing thesis.
    fn update_thesis(&self, thesis: &Thesis) -> RepoResult<()>;
    /// Removes an existing thesis.
    fn delete_thesis(&self, thesis: &Thesis) -> RepoResult<()>;
    /// Gets one thesis by id with its author populated.
    fn get_thesis(&self, id: ThesisId) -> RepoResult<Option<Thesis>>;
    /// Lists every stored thesis.
    fn list_theses(&self) -> RepoResult<Vec<Thesis>>;
    /// Lists theses whose author is `student`.
    fn list_theses_for_student(&self, student: &Student) -> RepoResult<Vec<Thesis>>;
}

/// SQLite-backed thesis repository.
pub struct SqliteThesisRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteThesisRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "student", &["id", "name", "surname"])?;
        ensure_table_ready(
            conn,
            "thesis",
            &["id", "name", "type", "year_of_publication", "author_id"],
        )?;
        Ok(Self { conn })
    }

    fn query_theses(&self, sql: &str, bind: Option<i64>) -> RepoResult<Vec<Thesis>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = match bind {
            Some(value) => stmt.query([value])?,
            None => stmt.query([])?,
        };
        let mut theses = Vec::new();
        while let Some(row) = rows.next()? {
            theses.push(parse_thesis_row(self.conn, row)?);
        }
        Ok(theses)
    }
}

impl ThesisRepository for SqliteThesisRepository<'_> {
    fn create_thesis(&self, thesis: &mut Thesis) -> RepoResult<ThesisId> {
        require_no_id(thesis.id, "thesis")?;
        let author_id = validated_author_id(thesis)?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        ensure_author_exists(&tx, author_id)?;
        let inserted = tx.execute(
            "INSERT INTO thesis (
                name,
                type,
                year_of_publication,
                author_id
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                thesis.name.as_str(),
                thesis.kind.as_str(),
                thesis.year,
                author_id,
            ],
        )?;
        if inserted != 1 {
            return Err(RepoError::Consistency(format!(
                "{inserted} rows inserted for new thesis, expected exactly one"
            )));
        }
        let id = generated_key(&tx, "thesis")?;
        tx.commit()?;

        thesis.id = Some(id);
        Ok(id)
    }

    fn update_thesis(&self, thesis: &Thesis) -> RepoResult<()> {
        let id = require_id(thesis.id, "thesis")?;
        let author_id = validated_author_id(thesis)?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let exists: i64 = tx.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM thesis
                WHERE id = ?1
            );",
            [id],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(RepoError::NotFound(EntityRef::Thesis(id)));
        }
        ensure_author_exists(&tx, author_id)?;
        let changed = tx.execute(
            "UPDATE thesis
             SET
                name = ?2,
                type = ?3,
                year_of_publication = ?4,
                author_id = ?5
             WHERE id = ?1;",
            params![
                id,
                thesis.name.as_str(),
                thesis.kind.as_str(),
                thesis.year,
                author_id,
            ],
        )?;
        ensure_single_row(changed, EntityRef::Thesis(id))?;
        tx.commit()?;
        Ok(())
    }

    fn delete_thesis(&self, thesis: &Thesis) -> RepoResult<()> {
        let id = require_id(thesis.id, "thesis")?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute("DELETE FROM thesis WHERE id = ?1;", [id])?;
        ensure_single_row(changed, EntityRef::Thesis(id))?;
        tx.commit()?;
        Ok(())
    }

    fn get_thesis(&self, id: ThesisId) -> RepoResult<Option<Thesis>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{THESIS_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;

        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let thesis = parse_thesis_row(self.conn, row)?;
        if rows.next()?.is_some() {
            return Err(RepoError::Consistency(format!(
                "more than one thesis with id {id}"
            )));
        }

        Ok(Some(thesis))
    }

    fn list_theses(&self) -> RepoResult<Vec<Thesis>> {
        self.query_theses(&format!("{THESIS_SELECT_SQL} ORDER BY id ASC;"), None)
    }

    fn list_theses_for_student(&self, student: &Student) -> RepoResult<Vec<Thesis>> {
        let author_id = require_id(student.id, "student")?;
        self.query_theses(
            &format!("{THESIS_SELECT_SQL} WHERE author_id = ?1 ORDER BY id ASC;"),
            Some(author_id),
        )
    }
}

fn parse_thesis_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Thesis> {
    let id: ThesisId = row.get("id")?;
    let type_text: String = row.get("type")?;
    let kind = ThesisType::parse(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid thesis type `{type_text}` in thesis.type"))
    })?;

    let author_id: StudentId = row.get("author_id")?;
    let author = load_author(conn, author_id)?.ok_or_else(|| {
        RepoError::Consistency(format!(
            "thesis {id} references missing student {author_id}"
        ))
    })?;

    Ok(Thesis {
        id: Some(id),
        name: row.get("name")?,
        year: row.get("year_of_publication")?,
        kind,
        author,
    })
}

fn load_author(conn: &Connection, author_id: StudentId) -> RepoResult<Option<Student>> {
    let mut stmt = conn.prepare(&format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([author_id])?;
    let Some(row) = rows.next()? else {
        return Ok(None);
    };
    let author = parse_student_row(row)?;
    if rows.next()?.is_some() {
        return Err(RepoError::Consistency(format!(
            "more than one student with id {author_id}"
        )));
    }
    Ok(Some(author))
}

/// Validates `thesis` and returns its author's id.
fn validated_author_id(thesis: &Thesis) -> RepoResult<StudentId> {
    thesis.validate()?;
    let Some(author_id) = thesis.author.id else {
        return Err(ValidationError::AuthorNotPersisted.into());
    };
    Ok(author_id)
}

fn ensure_author_exists(tx: &Transaction<'_>, author_id: StudentId) -> RepoResult<()> {
    let exists: i64 = tx.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM student
            WHERE id = ?1
        );",
        [author_id],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(RepoError::UnknownAuthor(author_id));
    }
    Ok(())
}
