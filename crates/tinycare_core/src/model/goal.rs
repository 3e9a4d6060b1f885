//! Weekly goal records.
//!
//! # Responsibility
//! - Define the goal record scoped to one canonical week-start key.
//!
//! # Invariants
//! - `week_start_key` is always a Monday date key.
//! - `completed` is the only field that may change after creation.

use crate::dates::is_date_key;
use crate::model::logs::LogId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Maximum goal title length, in characters.
pub const GOAL_TITLE_MAX_CHARS: usize = 60;

/// One goal planned for a specific week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyGoal {
    pub id: LogId,
    pub week_start_key: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Validation failures for weekly goals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    TitleEmpty,
    TitleTooLong { max_chars: usize, actual_chars: usize },
    InvalidWeekStartKey(String),
}

impl Display for GoalValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleEmpty => write!(f, "goal title must not be empty"),
            Self::TitleTooLong {
                max_chars,
                actual_chars,
            } => write!(f, "goal title has {actual_chars} chars, limit is {max_chars}"),
            Self::InvalidWeekStartKey(value) => {
                write!(f, "week start key `{value}` is not of form YYYY-MM-DD")
            }
        }
    }
}

impl Error for GoalValidationError {}

impl WeeklyGoal {
    /// Creates an open goal with a generated stable ID.
    pub fn new(
        week_start_key: impl Into<String>,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            week_start_key: week_start_key.into(),
            title: title.into(),
            completed: false,
            created_at,
        }
    }

    /// Checks title bounds and week-start-key shape.
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(GoalValidationError::TitleEmpty);
        }
        let actual_chars = self.title.chars().count();
        if actual_chars > GOAL_TITLE_MAX_CHARS {
            return Err(GoalValidationError::TitleTooLong {
                max_chars: GOAL_TITLE_MAX_CHARS,
                actual_chars,
            });
        }
        if !is_date_key(&self.week_start_key) {
            return Err(GoalValidationError::InvalidWeekStartKey(
                self.week_start_key.clone(),
            ));
        }
        Ok(())
    }
}
