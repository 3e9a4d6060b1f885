//! Process-wide notification and display settings.
//!
//! # Responsibility
//! - Define the singleton settings record and its defaults.
//!
//! # Invariants
//! - `reminder_time` is a 24h `HH:MM` string.
//! - Exactly one settings row exists in storage (id = 1, seeded on init).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static REMINDER_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("reminder time pattern"));

/// Notification and display preferences, one record per install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub reminder_enabled: bool,
    /// Daily reminder time as 24h `HH:MM`.
    pub reminder_time: String,
    /// Softens the home screen copy on hard days.
    pub gentle_mode: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            reminder_enabled: true,
            reminder_time: "20:00".to_string(),
            gentle_mode: false,
        }
    }
}

/// Validation failures for the settings record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsValidationError {
    InvalidReminderTime(String),
}

impl Display for SettingsValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReminderTime(value) => {
                write!(f, "reminder time `{value}` is not of form HH:MM (24h)")
            }
        }
    }
}

impl Error for SettingsValidationError {}

impl NotificationSettings {
    /// Checks the reminder time shape and range.
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if !REMINDER_TIME_RE.is_match(&self.reminder_time) {
            return Err(SettingsValidationError::InvalidReminderTime(
                self.reminder_time.clone(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NotificationSettings;

    #[test]
    fn default_settings_are_valid() {
        let settings = NotificationSettings::default();
        assert!(settings.reminder_enabled);
        assert_eq!(settings.reminder_time, "20:00");
        assert!(!settings.gentle_mode);
        settings.validate().expect("defaults should validate");
    }

    #[test]
    fn reminder_time_rejects_out_of_range_values() {
        for bad in ["24:00", "7:30", "12:60", "noon", ""] {
            let settings = NotificationSettings {
                reminder_time: bad.to_string(),
                ..NotificationSettings::default()
            };
            assert!(settings.validate().is_err(), "`{bad}` should be rejected");
        }
    }
}
