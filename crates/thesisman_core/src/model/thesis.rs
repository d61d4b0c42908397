//! Thesis entity and its type enumeration.
//!
//! # Invariants
//! - `year >= 0`.
//! - `author` is a persisted student; the thesis row stores only its id and
//!   the full student is re-resolved on every read.

use crate::model::student::{display_id, Student};
use crate::model::validation::{validate_non_blank, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Surrogate key of a persisted thesis row.
pub type ThesisId = i64;

/// Academic degree the thesis was written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThesisType {
    Bachelor,
    Master,
    Phd,
}

impl ThesisType {
    /// Storage representation used in `thesis.type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bachelor => "BACHELOR",
            Self::Master => "MASTER",
            Self::Phd => "PHD",
        }
    }

    /// Parses the storage representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "BACHELOR" => Some(Self::Bachelor),
            "MASTER" => Some(Self::Master),
            "PHD" => Some(Self::Phd),
            _ => None,
        }
    }
}

impl Display for ThesisType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Thesis {
    /// `None` until the store assigns an id on create.
    pub id: Option<ThesisId>,
    pub name: String,
    /// Year of publication.
    pub year: i32,
    /// Serialized as `type` to match the storage column.
    #[serde(rename = "type")]
    pub kind: ThesisType,
    /// Serialized one level deep; the author never embeds its theses.
    pub author: Student,
}

impl Thesis {
    /// Creates a not-yet-persisted thesis written by `author`.
    pub fn new(name: impl Into<String>, kind: ThesisType, year: i32, author: Student) -> Self {
        Self {
            id: None,
            name: name.into(),
            year,
            kind,
            author,
        }
    }

    /// Returns whether this record has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Validates field content. Author existence is checked by the repository.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_blank("name", &self.name)?;
        if self.year < 0 {
            return Err(ValidationError::NegativeYear(self.year));
        }
        if self.author.id.is_none() {
            return Err(ValidationError::AuthorNotPersisted);
        }
        Ok(())
    }
}

impl Display for Thesis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Thesis{{id={}, name={}, year={}, type={}, author={}}}",
            display_id(self.id),
            self.name,
            self.year,
            self.kind,
            self.author
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Thesis, ThesisType};
    use crate::model::student::Student;
    use crate::model::validation::ValidationError;

    fn persisted_author() -> Student {
        let mut author = Student::new("Noel", "Mad");
        author.id = Some(1);
        author
    }

    #[test]
    fn thesis_type_storage_values_roundtrip() {
        for kind in [ThesisType::Bachelor, ThesisType::Master, ThesisType::Phd] {
            assert_eq!(ThesisType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ThesisType::parse("master"), None);
    }

    #[test]
    fn validate_accepts_year_zero() {
        let thesis = Thesis::new("Origins", ThesisType::Phd, 0, persisted_author());
        assert!(thesis.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let author = persisted_author();
        assert_eq!(
            Thesis::new("", ThesisType::Master, 2012, author.clone()).validate(),
            Err(ValidationError::EmptyField { field: "name" })
        );
        assert_eq!(
            Thesis::new("RocketScience", ThesisType::Master, -1, author).validate(),
            Err(ValidationError::NegativeYear(-1))
        );
        assert_eq!(
            Thesis::new(
                "RocketScience",
                ThesisType::Master,
                2012,
                Student::new("Noel", "Mad")
            )
            .validate(),
            Err(ValidationError::AuthorNotPersisted)
        );
    }
}
