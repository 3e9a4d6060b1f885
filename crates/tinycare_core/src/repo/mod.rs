//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for logs, goals and
//!   settings.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must call the record's `validate()` before SQL.
//! - Read paths reject invalid persisted state instead of masking it.
//! - List queries return ascending `created_at` insertion order.

use crate::db::DbError;
use crate::model::goal::GoalValidationError;
use crate::model::logs::LogValidationError;
use crate::model::settings::SettingsValidationError;
use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod goal_repo;
pub mod log_repo;
pub mod settings_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    NotFound(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<LogValidationError> for RepoError {
    fn from(value: LogValidationError) -> Self {
        Self::Validation(value.into())
    }
}

impl From<GoalValidationError> for RepoError {
    fn from(value: GoalValidationError) -> Self {
        Self::Validation(value.into())
    }
}

impl From<SettingsValidationError> for RepoError {
    fn from(value: SettingsValidationError) -> Self {
        Self::Validation(value.into())
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

pub(crate) fn parse_uuid(text: &str, column: &str) -> RepoResult<uuid::Uuid> {
    uuid::Uuid::parse_str(text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid `{text}` in {column}")))
}

pub(crate) fn parse_timestamp(
    text: &str,
    column: &str,
) -> RepoResult<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(text)
        .map(|value| value.with_timezone(&chrono::Utc))
        .map_err(|_| RepoError::InvalidData(format!("invalid timestamp `{text}` in {column}")))
}

pub(crate) fn int_to_bool(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {column}"
        ))),
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
