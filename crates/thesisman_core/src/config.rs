//! Runtime configuration resolved from environment variables.
//!
//! | Variable              | Default                  |
//! |-----------------------|--------------------------|
//! | `THESISMAN_DB_PATH`   | `thesisman.sqlite3`      |
//! | `THESISMAN_LOG_LEVEL` | `default_log_level()`    |
//! | `THESISMAN_LOG_DIR`   | unset (no file logging)  |

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "THESISMAN_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "THESISMAN_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "THESISMAN_LOG_DIR";
const DEFAULT_DB_FILE_NAME: &str = "thesisman.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { var: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { var, message } => write!(f, "invalid `{var}`: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    /// Normalized `trace|debug|info|warn|error`.
    pub log_level: &'static str,
    /// File logging is disabled when `None`.
    pub log_dir: Option<String>,
}

impl CoreConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = read(DB_PATH_VAR)
            .map_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME), PathBuf::from);
        let log_level = match read(LOG_LEVEL_VAR) {
            Some(value) => normalize_level(&value).map_err(|message| ConfigError::InvalidValue {
                var: LOG_LEVEL_VAR,
                message,
            })?,
            None => default_log_level(),
        };

        Ok(Self {
            db_path,
            log_level,
            log_dir: read(LOG_DIR_VAR),
        })
    }
}
