//! Domain model for the tracker core.
//!
//! # Responsibility
//! - Define the canonical value records shared by logic and persistence.
//! - Keep per-record validation next to the record it protects.
//!
//! # Invariants
//! - Records are immutable once created; updates are replace-in-collection.
//!   The only field that ever flips in place is `WeeklyGoal::completed`.
//! - Every `date_key`/`week_start_key` is a zero-padded `YYYY-MM-DD` string.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod goal;
pub mod logs;
pub mod settings;

/// Umbrella over the per-record validation errors.
///
/// Repository write paths surface this as `RepoError::Validation` so callers
/// get one error shape regardless of which record was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Log(logs::LogValidationError),
    Goal(goal::GoalValidationError),
    Settings(settings::SettingsValidationError),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Log(err) => write!(f, "{err}"),
            Self::Goal(err) => write!(f, "{err}"),
            Self::Settings(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Log(err) => Some(err),
            Self::Goal(err) => Some(err),
            Self::Settings(err) => Some(err),
        }
    }
}

impl From<logs::LogValidationError> for ValidationError {
    fn from(value: logs::LogValidationError) -> Self {
        Self::Log(value)
    }
}

impl From<goal::GoalValidationError> for ValidationError {
    fn from(value: goal::GoalValidationError) -> Self {
        Self::Goal(value)
    }
}

impl From<settings::SettingsValidationError> for ValidationError {
    fn from(value: settings::SettingsValidationError) -> Self {
        Self::Settings(value)
    }
}
