//! Core use-case services.
//!
//! # Responsibility
//! - Wrap repository calls into use-case level APIs.
//! - Emit metadata-only log events for every write and lookup.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - Log events carry ids and error codes only, never names.

pub mod student_service;
pub mod thesis_service;

use crate::repo::error::{RepoError, RepoResult};
use log::{log, warn, Level};

/// Logs the outcome of one service call and passes the result through.
///
/// Successes are logged at `level`; failures always at `warn`.
pub(crate) fn log_outcome<T>(
    level: Level,
    event: &'static str,
    id: Option<i64>,
    result: RepoResult<T>,
) -> RepoResult<T> {
    match &result {
        Ok(_) => log!(level, "{}", outcome_line(event, id, None)),
        Err(err) => warn!("{}", outcome_line(event, id, Some(err))),
    }
    result
}

fn outcome_line(event: &str, id: Option<i64>, err: Option<&RepoError>) -> String {
    let id_text = id.map_or_else(|| "none".to_string(), |value| value.to_string());
    match err {
        None => format!("event={event} module=service status=ok id={id_text}"),
        Some(err) => format!(
            "event={event} module=service status=error id={id_text} error_code={}",
            err.code()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::outcome_line;
    use crate::repo::error::{EntityRef, RepoError};

    #[test]
    fn ok_line_carries_event_and_id() {
        assert_eq!(
            outcome_line("student_get", Some(3), None),
            "event=student_get module=service status=ok id=3"
        );
        assert_eq!(
            outcome_line("thesis_list", None, None),
            "event=thesis_list module=service status=ok id=none"
        );
    }

    #[test]
    fn error_line_has_code_but_no_message_text() {
        let err = RepoError::Consistency("Joshua Bloch appeared twice".to_string());
        let line = outcome_line("student_create", None, Some(&err));
        assert!(line.ends_with("status=error id=none error_code=consistency_failure"));
        assert!(!line.contains("Joshua"));

        let missing = RepoError::NotFound(EntityRef::Thesis(9));
        let line = outcome_line("thesis_delete", Some(9), Some(&missing));
        assert!(line.contains("id=9 error_code=not_found"));
    }
}
