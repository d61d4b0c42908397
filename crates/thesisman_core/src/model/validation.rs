//! Field validation rules shared by student and thesis writes.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static PERSON_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z ]+$").expect("valid person name regex"));

/// Rejection of semantically invalid field content.
///
/// Distinct from malformed call arguments (id state), which surface as
/// `RepoError::InvalidArgument`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty or contains only whitespace.
    EmptyField { field: &'static str },
    /// Field contains characters outside ASCII letters and spaces.
    InvalidCharacters { field: &'static str },
    /// Publication year below zero.
    NegativeYear(i32),
    /// Thesis author has no persisted id.
    AuthorNotPersisted,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::InvalidCharacters { field } => {
                write!(f, "{field} may contain only letters and spaces")
            }
            Self::NegativeYear(year) => write!(f, "year must not be negative, got {year}"),
            Self::AuthorNotPersisted => write!(f, "thesis author has no id"),
        }
    }
}

impl Error for ValidationError {}

/// Checks a person name part (`name`, `surname`).
pub(crate) fn validate_person_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    validate_non_blank(field, value)?;
    if !PERSON_NAME_RE.is_match(value) {
        return Err(ValidationError::InvalidCharacters { field });
    }
    Ok(())
}

pub(crate) fn validate_non_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}
