//! Core domain logic for TinyCare, a small mood/habit tracker.
//! This crate is the single source of truth for business invariants.

pub mod dates;
pub mod db;
pub mod insight;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use dates::{
    date_key_from_offset, is_date_key, is_within_recent_days, to_date_key, week_start_key, Clock,
    FixedClock, SystemClock,
};
pub use insight::{
    derive_insight, home_snapshot, select_affirmation, summarize_trend, trailing_low_streak,
    Affirmation, HomeSnapshot, Insight, MoodTrend, WeeklySummary,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::{GoalValidationError, WeeklyGoal};
pub use model::logs::{LogId, LogValidationError, MoodLog, MoodPolarity, SosLog, WinLog};
pub use model::settings::{NotificationSettings, SettingsValidationError};
pub use model::ValidationError;
pub use repo::goal_repo::{GoalRepository, SqliteGoalRepository};
pub use repo::log_repo::{LogRepository, SqliteLogRepository};
pub use repo::settings_repo::{SettingsRepository, SqliteSettingsRepository};
pub use repo::{RepoError, RepoResult};
pub use service::journal_service::{JournalService, SosOutcome};
pub use service::plan_service::PlanService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
