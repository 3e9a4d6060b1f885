//! Settings repository: the singleton settings row and onboarding flag.
//!
//! # Responsibility
//! - Load and save the process-wide notification settings.
//! - Track whether onboarding has been completed.
//!
//! # Invariants
//! - The settings row (id = 1) is seeded by the initial migration; loads
//!   degrade to defaults when the row is somehow missing.
//! - Saves validate the reminder time before touching SQL.

use crate::model::settings::NotificationSettings;
use crate::repo::{bool_to_int, int_to_bool, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface for the singleton settings record.
pub trait SettingsRepository {
    fn load_settings(&self) -> RepoResult<NotificationSettings>;
    fn save_settings(&self, settings: &NotificationSettings) -> RepoResult<()>;
    fn load_onboarding_completed(&self) -> RepoResult<bool>;
    fn save_onboarding_completed(&self, completed: bool) -> RepoResult<()>;
}

/// SQLite-backed settings repository.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn load_settings(&self) -> RepoResult<NotificationSettings> {
        let row = self
            .conn
            .query_row(
                "SELECT reminder_enabled, daily_reminder_time, gentle_mode
                 FROM settings
                 WHERE id = 1;",
                [],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, i64>(2)?,
                    ))
                },
            )
            .optional()?;

        let Some((reminder_enabled, reminder_time, gentle_mode)) = row else {
            return Ok(NotificationSettings::default());
        };

        let defaults = NotificationSettings::default();
        Ok(NotificationSettings {
            reminder_enabled: int_to_bool(reminder_enabled, "settings.reminder_enabled")?,
            reminder_time: reminder_time.unwrap_or(defaults.reminder_time),
            gentle_mode: int_to_bool(gentle_mode, "settings.gentle_mode")?,
        })
    }

    fn save_settings(&self, settings: &NotificationSettings) -> RepoResult<()> {
        settings.validate()?;

        self.conn.execute(
            "UPDATE settings
             SET
                reminder_enabled = ?1,
                daily_reminder_time = ?2,
                gentle_mode = ?3,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = 1;",
            params![
                bool_to_int(settings.reminder_enabled),
                settings.reminder_time.as_str(),
                bool_to_int(settings.gentle_mode),
            ],
        )?;

        Ok(())
    }

    fn load_onboarding_completed(&self) -> RepoResult<bool> {
        let value = self
            .conn
            .query_row(
                "SELECT onboarding_completed FROM settings WHERE id = 1;",
                [],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        match value {
            Some(value) => int_to_bool(value, "settings.onboarding_completed"),
            None => Ok(false),
        }
    }

    fn save_onboarding_completed(&self, completed: bool) -> RepoResult<()> {
        self.conn.execute(
            "UPDATE settings
             SET onboarding_completed = ?1,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = 1;",
            params![bool_to_int(completed)],
        )?;

        Ok(())
    }
}
