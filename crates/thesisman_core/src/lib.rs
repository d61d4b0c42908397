//! Core persistence logic for students and their theses.
//! This crate is the single source of truth for entity invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{Student, StudentId};
pub use model::thesis::{Thesis, ThesisId, ThesisType};
pub use model::validation::ValidationError;
pub use repo::error::{EntityRef, RepoError, RepoResult};
pub use repo::student_repo::{SqliteStudentRepository, StudentRepository};
pub use repo::thesis_repo::{SqliteThesisRepository, ThesisRepository};
pub use service::student_service::StudentService;
pub use service::thesis_service::ThesisService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
