//! Log records: mood entries, win entries and SOS-mode entries.
//!
//! # Responsibility
//! - Define the three append-only log collections the derivation logic
//!   operates on.
//! - Validate records before they reach the persistence boundary.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `date_key` is the local calendar day the entry belongs to.
//! - An `SosLog` is only meaningful when at least one action was done;
//!   all-false records are rejected rather than stored.

use crate::dates::is_date_key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier shared by all log and goal records.
pub type LogId = Uuid;

/// Maximum note length for a mood entry, in characters.
pub const MOOD_NOTE_MAX_CHARS: usize = 80;
/// Maximum note length for a win entry, in characters.
pub const WIN_NOTE_MAX_CHARS: usize = 100;

/// Coarse mood classification attached to a mood entry.
///
/// Entries saved without a direction carry `None` at the field level;
/// only `Low` entries feed the trailing-streak detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodPolarity {
    Low,
    High,
}

/// One saved mood entry. Many per day are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodLog {
    pub id: LogId,
    pub date_key: String,
    /// Mood level on the 1..=5 scale.
    pub level: u8,
    pub polarity: Option<MoodPolarity>,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

/// One saved "small win" entry with order-preserving tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLog {
    pub id: LogId,
    pub date_key: String,
    /// Short labels, insertion order preserved, duplicates allowed.
    pub tags: Vec<String>,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

/// One completed SOS-mode session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SosLog {
    pub id: LogId,
    pub date_key: String,
    pub hydration_done: bool,
    pub breathing_done: bool,
    pub rest_done: bool,
    pub created_at: DateTime<Utc>,
}

/// Validation failures for log records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogValidationError {
    MoodLevelOutOfRange(u8),
    NoteTooLong { max_chars: usize, actual_chars: usize },
    InvalidDateKey(String),
    SosNothingDone,
}

impl Display for LogValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoodLevelOutOfRange(level) => {
                write!(f, "mood level {level} is outside 1..=5")
            }
            Self::NoteTooLong {
                max_chars,
                actual_chars,
            } => write!(f, "note has {actual_chars} chars, limit is {max_chars}"),
            Self::InvalidDateKey(value) => {
                write!(f, "date key `{value}` is not of form YYYY-MM-DD")
            }
            Self::SosNothingDone => {
                write!(f, "SOS entry must have at least one completed action")
            }
        }
    }
}

impl Error for LogValidationError {}

impl MoodLog {
    /// Creates a mood entry with a generated stable ID.
    pub fn new(
        date_key: impl Into<String>,
        level: u8,
        polarity: Option<MoodPolarity>,
        note: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date_key: date_key.into(),
            level,
            polarity,
            note: note.into(),
            created_at,
        }
    }

    /// Checks level range, note length and date-key shape.
    pub fn validate(&self) -> Result<(), LogValidationError> {
        if !(1..=5).contains(&self.level) {
            return Err(LogValidationError::MoodLevelOutOfRange(self.level));
        }
        check_note(&self.note, MOOD_NOTE_MAX_CHARS)?;
        check_date_key(&self.date_key)
    }
}

impl WinLog {
    /// Creates a win entry with a generated stable ID.
    pub fn new(
        date_key: impl Into<String>,
        tags: Vec<String>,
        note: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date_key: date_key.into(),
            tags,
            note: note.into(),
            created_at,
        }
    }

    /// Checks note length and date-key shape. Tags are free-form.
    pub fn validate(&self) -> Result<(), LogValidationError> {
        check_note(&self.note, WIN_NOTE_MAX_CHARS)?;
        check_date_key(&self.date_key)
    }
}

impl SosLog {
    /// Creates an SOS entry with a generated stable ID.
    pub fn new(
        date_key: impl Into<String>,
        hydration_done: bool,
        breathing_done: bool,
        rest_done: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date_key: date_key.into(),
            hydration_done,
            breathing_done,
            rest_done,
            created_at,
        }
    }

    /// Returns whether any of the three actions was completed.
    pub fn any_done(&self) -> bool {
        self.hydration_done || self.breathing_done || self.rest_done
    }

    /// Rejects all-false records and malformed date keys.
    pub fn validate(&self) -> Result<(), LogValidationError> {
        if !self.any_done() {
            return Err(LogValidationError::SosNothingDone);
        }
        check_date_key(&self.date_key)
    }
}

fn check_note(note: &str, max_chars: usize) -> Result<(), LogValidationError> {
    let actual_chars = note.chars().count();
    if actual_chars > max_chars {
        return Err(LogValidationError::NoteTooLong {
            max_chars,
            actual_chars,
        });
    }
    Ok(())
}

fn check_date_key(value: &str) -> Result<(), LogValidationError> {
    if !is_date_key(value) {
        return Err(LogValidationError::InvalidDateKey(value.to_string()));
    }
    Ok(())
}
