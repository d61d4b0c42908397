//! Error taxonomy shared by the student and thesis repositories.

use crate::db::DbError;
use crate::model::student::StudentId;
use crate::model::thesis::ThesisId;
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Identity of the row a keyed operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Student(StudentId),
    Thesis(ThesisId),
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student(id) => write!(f, "student {id}"),
            Self::Thesis(id) => write!(f, "thesis {id}"),
        }
    }
}

/// Repository error for student and thesis persistence.
#[derive(Debug)]
pub enum RepoError {
    /// Caller passed an entity in the wrong id state.
    InvalidArgument(String),
    /// Entity field content was rejected.
    Validation(ValidationError),
    /// Update/delete target does not exist.
    NotFound(EntityRef),
    /// Thesis author id does not resolve to a student row.
    UnknownAuthor(StudentId),
    /// Student cannot be deleted while theses reference it.
    StudentHasTheses(StudentId),
    /// Internal-consistency check failed (row counts, keys, dangling refs).
    Consistency(String),
    /// Persisted row could not be decoded.
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::Validation(err) => write!(f, "validation failed: {err}"),
            Self::NotFound(target) => write!(f, "{target} not found"),
            Self::UnknownAuthor(id) => write!(f, "thesis author student {id} does not exist"),
            Self::StudentHasTheses(id) => {
                write!(f, "student {id} still has theses and cannot be deleted")
            }
            Self::Consistency(message) => write!(f, "internal consistency failure: {message}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl RepoError {
    /// Short stable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Validation(_) => "validation_failed",
            Self::NotFound(_) => "not_found",
            Self::UnknownAuthor(_) => "unknown_author",
            Self::StudentHasTheses(_) => "student_has_theses",
            Self::Consistency(_) => "consistency_failure",
            Self::InvalidData(_) => "invalid_data",
            Self::MissingRequiredTable(_) | Self::MissingRequiredColumn { .. } => "schema_missing",
            Self::Db(_) => "db_error",
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
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
