//! Student use-case service.

use crate::model::student::{Student, StudentId};
use crate::repo::error::RepoResult;
use crate::repo::student_repo::StudentRepository;
use crate::service::log_outcome;
use log::Level;

/// Use-case service wrapper for student CRUD operations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds, validates and persists a new student.
    ///
    /// Returns the stored record with its assigned id.
    pub fn register(
        &self,
        name: impl Into<String>,
        surname: impl Into<String>,
    ) -> RepoResult<Student> {
        let mut student = Student::new(name, surname);
        self.create_student(&mut student)?;
        Ok(student)
    }

    /// Persists `student` and assigns its id in place.
    pub fn create_student(&self, student: &mut Student) -> RepoResult<StudentId> {
        let result = self.repo.create_student(student);
        let id = result.as_ref().ok().copied();
        log_outcome(Level::Info, "student_create", id, result)
    }

    pub fn update_student(&self, student: &Student) -> RepoResult<()> {
        log_outcome(
            Level::Info,
            "student_update",
            student.id,
            self.repo.update_student(student),
        )
    }

    pub fn delete_student(&self, student: &Student) -> RepoResult<()> {
        log_outcome(
            Level::Info,
            "student_delete",
            student.id,
            self.repo.delete_student(student),
        )
    }

    /// Gets one student; absence is `Ok(None)`, not an error.
    pub fn get_student(&self, id: StudentId) -> RepoResult<Option<Student>> {
        log_outcome(Level::Debug, "student_get", Some(id), self.repo.get_student(id))
    }

    pub fn list_students(&self) -> RepoResult<Vec<Student>> {
        log_outcome(Level::Debug, "student_list", None, self.repo.list_students())
    }
}
