//! Student entity.
//!
//! # Invariants
//! - `name` and `surname` are non-blank and contain only letters and spaces.
//! - `id` is assigned by the store on create and never reused.

use crate::model::validation::{validate_person_name, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Surrogate key of a persisted student row.
pub type StudentId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    /// `None` until the store assigns an id on create.
    pub id: Option<StudentId>,
    pub name: String,
    pub surname: String,
}

impl Student {
    /// Creates a not-yet-persisted student.
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            surname: surname.into(),
        }
    }

    /// Returns whether this record has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Validates field content. Id state is checked by the repository.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_person_name("name", &self.name)?;
        validate_person_name("surname", &self.surname)?;
        Ok(())
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Student{{id={}, ", display_id(self.id))?;
        write!(f, "name={}, surname={}}}", self.name, self.surname)
    }
}

pub(crate) fn display_id(id: Option<i64>) -> String {
    id.map_or_else(|| "none".to_string(), |value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::Student;
    use crate::model::validation::ValidationError;

    #[test]
    fn new_student_is_not_persisted() {
        let student = Student::new("Joshua", "Bloch");
        assert_eq!(student.id, None);
        assert!(!student.is_persisted());
        assert!(student.validate().is_ok());
    }

    #[test]
    fn validate_reports_first_failing_field() {
        let student = Student::new("Joshua", "Bl0ch");
        assert_eq!(
            student.validate(),
            Err(ValidationError::InvalidCharacters { field: "surname" })
        );
    }

    #[test]
    fn display_includes_id_state() {
        let mut student = Student::new("Joshua", "Bloch");
        assert_eq!(
            student.to_string(),
            "Student{id=none, name=Joshua, surname=Bloch}"
        );
        student.id = Some(7);
        assert!(student.to_string().starts_with("Student{id=7,"));
    }
}
