//! Thesis use-case service.

use crate::model::student::Student;
use crate::model::thesis::{Thesis, ThesisId, ThesisType};
use crate::repo::error::RepoResult;
use crate::repo::thesis_repo::ThesisRepository;
use crate::service::log_outcome;
use log::Level;

/// Use-case service wrapper for thesis CRUD operations.
pub struct ThesisService<R: ThesisRepository> {
    repo: R,
}

impl<R: ThesisRepository> ThesisService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds and persists a new thesis written by `author`.
    ///
    /// # Contract
    /// - `author` must already be persisted.
    /// - Returns the stored record with its assigned id.
    pub fn register(
        &self,
        name: impl Into<String>,
        kind: ThesisType,
        year: i32,
        author: &Student,
    ) -> RepoResult<Thesis> {
        let mut thesis = Thesis::new(name, kind, year, author.clone());
        self.create_thesis(&mut thesis)?;
        Ok(thesis)
    }

    /// Persists `thesis` and assigns its id in place.
    pub fn create_thesis(&self, thesis: &mut Thesis) -> RepoResult<ThesisId> {
        let result = self.repo.create_thesis(thesis);
        let id = result.as_ref().ok().copied();
        log_outcome(Level::Info, "thesis_create", id, result)
    }

    pub fn update_thesis(&self, thesis: &Thesis) -> RepoResult<()> {
        log_outcome(
            Level::Info,
            "thesis_update",
            thesis.id,
            self.repo.update_thesis(thesis),
        )
    }

    pub fn delete_thesis(&self, thesis: &Thesis) -> RepoResult<()> {
        log_outcome(
            Level::Info,
            "thesis_delete",
            thesis.id,
            self.repo.delete_thesis(thesis),
        )
    }

    /// Gets one thesis with its author; absence is `Ok(None)`.
    pub fn get_thesis(&self, id: ThesisId) -> RepoResult<Option<Thesis>> {
        log_outcome(Level::Debug, "thesis_get", Some(id), self.repo.get_thesis(id))
    }

    pub fn list_theses(&self) -> RepoResult<Vec<Thesis>> {
        log_outcome(Level::Debug, "thesis_list", None, self.repo.list_theses())
    }

    /// Lists the theses authored by `student`.
    pub fn list_theses_for_student(&self, student: &Student) -> RepoResult<Vec<Thesis>> {
        log_outcome(
            Level::Debug,
            "thesis_list_for_student",
            student.id,
            self.repo.list_theses_for_student(student),
        )
    }
}
