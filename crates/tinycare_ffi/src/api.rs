//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for early-stage UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Return values are UTF-8 strings and flat envelopes with stable
//!   meaning; enum signals cross as their string tags.

use std::path::PathBuf;
use std::sync::OnceLock;
use tinycare_core::db::open_db;
use tinycare_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    JournalService, MoodPolarity, NotificationSettings, PlanService, SosOutcome,
    SqliteGoalRepository, SqliteLogRepository, SqliteSettingsRepository, SystemClock,
};
use tinycare_core::{LogRepository, SettingsRepository};
use uuid::Uuid;

const DB_FILE_NAME: &str = "tinycare.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory fail.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for save/update flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional created record ID.
    pub record_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, record_id: Option<String>) -> Self {
        Self {
            ok: true,
            record_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// Home screen payload with pre-rendered strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSnapshotResponse {
    pub ok: bool,
    /// Affirmation tag (`progress|recorded|self_care|presence`).
    pub affirmation_tag: String,
    pub affirmation_text: String,
    /// Insight tag when one fired (`low_streak|sos_coping|win_momentum|dormant`).
    pub insight_tag: Option<String>,
    pub insight_text: Option<String>,
    pub mood_count_today: u32,
    pub win_count_today: u32,
    pub sos_count_today: u32,
    pub message: String,
}

/// Weekly summary payload for the summary screen and share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySummaryResponse {
    pub ok: bool,
    pub week_start_key: String,
    pub share_text: String,
    pub goals_done: u32,
    pub goals_total: u32,
    pub message: String,
}

/// One goal row for the weekly plan screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalItem {
    pub goal_id: String,
    pub title: String,
    pub completed: bool,
}

/// Weekly plan payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyGoalsResponse {
    pub ok: bool,
    pub week_start_key: String,
    pub goals: Vec<GoalItem>,
    pub message: String,
}

/// Settings payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsResponse {
    pub ok: bool,
    pub reminder_enabled: bool,
    pub reminder_time: String,
    pub gentle_mode: bool,
    pub onboarding_completed: bool,
    pub message: String,
}

/// Records a mood entry dated today.
///
/// # FFI contract
/// - `polarity`: `"low"`, `"high"` or empty/absent for none.
/// - Never panics; validation failures come back as `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn record_mood(level: u8, polarity: Option<String>, note: String) -> ActionResponse {
    let polarity = match parse_polarity(polarity.as_deref()) {
        Ok(value) => value,
        Err(message) => return ActionResponse::failure(message),
    };

    with_journal(|service| {
        service
            .record_mood(level, polarity, note.trim().to_string())
            .map(|id| ActionResponse::success("Mood entry saved.", Some(id.to_string())))
            .map_err(|err| format!("record_mood failed: {err}"))
    })
}

/// Records a win entry dated today.
#[flutter_rust_bridge::frb(sync)]
pub fn record_win(tags: Vec<String>, note: String) -> ActionResponse {
    with_journal(|service| {
        service
            .record_win(tags, note.trim().to_string())
            .map(|id| ActionResponse::success("Win entry saved.", Some(id.to_string())))
            .map_err(|err| format!("record_win failed: {err}"))
    })
}

/// Records a completed SOS session dated today.
///
/// # FFI contract
/// - A session with no completed action is a quiet no-op (`ok=true`,
///   no record ID), matching the entry screen's behavior.
#[flutter_rust_bridge::frb(sync)]
pub fn record_sos(hydration_done: bool, breathing_done: bool, rest_done: bool) -> ActionResponse {
    with_journal(|service| {
        let outcome = SosOutcome {
            hydration_done,
            breathing_done,
            rest_done,
        };
        service
            .record_sos(outcome)
            .map(|saved| match saved {
                Some(id) => ActionResponse::success("SOS session saved.", Some(id.to_string())),
                None => ActionResponse::success("Nothing to save.", None),
            })
            .map_err(|err| format!("record_sos failed: {err}"))
    })
}

/// Derives the home screen snapshot from current storage.
#[flutter_rust_bridge::frb(sync)]
pub fn home_snapshot() -> HomeSnapshotResponse {
    let result = with_journal_raw(|service| {
        service
            .home_snapshot()
            .map_err(|err| format!("home_snapshot failed: {err}"))
    });

    match result {
        Ok(snapshot) => HomeSnapshotResponse {
            ok: true,
            affirmation_tag: snapshot.affirmation.tag().to_string(),
            affirmation_text: snapshot.affirmation.message().to_string(),
            insight_tag: snapshot.insight.map(|insight| insight.tag().to_string()),
            insight_text: snapshot.insight.map(|insight| insight.message()),
            mood_count_today: snapshot.mood_count_today as u32,
            win_count_today: snapshot.win_count_today as u32,
            sos_count_today: snapshot.sos_count_today as u32,
            message: String::new(),
        },
        Err(message) => HomeSnapshotResponse {
            ok: false,
            affirmation_tag: String::new(),
            affirmation_text: String::new(),
            insight_tag: None,
            insight_text: None,
            mood_count_today: 0,
            win_count_today: 0,
            sos_count_today: 0,
            message,
        },
    }
}

/// Builds the weekly summary for the current week.
#[flutter_rust_bridge::frb(sync)]
pub fn weekly_summary() -> WeeklySummaryResponse {
    let built = (|| -> Result<tinycare_core::WeeklySummary, String> {
        let conn = open_store()?;
        let logs = SqliteLogRepository::new(&conn);
        let mood = logs
            .list_mood_logs()
            .map_err(|err| format!("weekly_summary failed: {err}"))?;
        let wins = logs
            .list_win_logs()
            .map_err(|err| format!("weekly_summary failed: {err}"))?;
        let sos = logs
            .list_sos_logs()
            .map_err(|err| format!("weekly_summary failed: {err}"))?;

        let plan = PlanService::new(SqliteGoalRepository::new(&conn), SystemClock);
        plan.weekly_summary(&mood, &wins, &sos)
            .map_err(|err| format!("weekly_summary failed: {err}"))
    })();

    match built {
        Ok(summary) => WeeklySummaryResponse {
            ok: true,
            week_start_key: summary.week_start_key.clone(),
            share_text: summary.render_text(),
            goals_done: summary.goals_done as u32,
            goals_total: summary.goals_total as u32,
            message: String::new(),
        },
        Err(message) => WeeklySummaryResponse {
            ok: false,
            week_start_key: String::new(),
            share_text: String::new(),
            goals_done: 0,
            goals_total: 0,
            message,
        },
    }
}

/// Adds a goal to the current week.
#[flutter_rust_bridge::frb(sync)]
pub fn add_weekly_goal(title: String) -> ActionResponse {
    let result = (|| -> Result<ActionResponse, String> {
        let conn = open_store()?;
        let plan = PlanService::new(SqliteGoalRepository::new(&conn), SystemClock);
        plan.add_goal(title.trim().to_string())
            .map(|id| ActionResponse::success("Goal added.", Some(id.to_string())))
            .map_err(|err| format!("add_weekly_goal failed: {err}"))
    })();
    result.unwrap_or_else(ActionResponse::failure)
}

/// Flips a goal's completion state.
#[flutter_rust_bridge::frb(sync)]
pub fn set_weekly_goal_completed(goal_id: String, completed: bool) -> ActionResponse {
    let id = match Uuid::parse_str(goal_id.trim()) {
        Ok(id) => id,
        Err(_) => return ActionResponse::failure(format!("invalid goal id `{goal_id}`")),
    };

    let result = (|| -> Result<ActionResponse, String> {
        let conn = open_store()?;
        let plan = PlanService::new(SqliteGoalRepository::new(&conn), SystemClock);
        plan.set_goal_completed(id, completed)
            .map(|()| ActionResponse::success("Goal updated.", Some(id.to_string())))
            .map_err(|err| format!("set_weekly_goal_completed failed: {err}"))
    })();
    result.unwrap_or_else(ActionResponse::failure)
}

/// Lists the current week's goals in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn load_weekly_goals() -> WeeklyGoalsResponse {
    let result = (|| -> Result<WeeklyGoalsResponse, String> {
        let conn = open_store()?;
        let plan = PlanService::new(SqliteGoalRepository::new(&conn), SystemClock);
        let week_start_key = plan.current_week_start();
        let goals = plan
            .goals_for_current_week()
            .map_err(|err| format!("load_weekly_goals failed: {err}"))?
            .into_iter()
            .map(|goal| GoalItem {
                goal_id: goal.id.to_string(),
                title: goal.title,
                completed: goal.completed,
            })
            .collect();
        Ok(WeeklyGoalsResponse {
            ok: true,
            week_start_key,
            goals,
            message: String::new(),
        })
    })();

    result.unwrap_or_else(|message| WeeklyGoalsResponse {
        ok: false,
        week_start_key: String::new(),
        goals: Vec::new(),
        message,
    })
}

/// Loads the singleton settings record plus the onboarding flag.
#[flutter_rust_bridge::frb(sync)]
pub fn load_settings() -> SettingsResponse {
    let result = (|| -> Result<SettingsResponse, String> {
        let conn = open_store()?;
        let repo = SqliteSettingsRepository::new(&conn);
        let settings = repo
            .load_settings()
            .map_err(|err| format!("load_settings failed: {err}"))?;
        let onboarding_completed = repo
            .load_onboarding_completed()
            .map_err(|err| format!("load_settings failed: {err}"))?;
        Ok(SettingsResponse {
            ok: true,
            reminder_enabled: settings.reminder_enabled,
            reminder_time: settings.reminder_time,
            gentle_mode: settings.gentle_mode,
            onboarding_completed,
            message: String::new(),
        })
    })();

    result.unwrap_or_else(|message| {
        let defaults = NotificationSettings::default();
        SettingsResponse {
            ok: false,
            reminder_enabled: defaults.reminder_enabled,
            reminder_time: defaults.reminder_time,
            gentle_mode: defaults.gentle_mode,
            onboarding_completed: false,
            message,
        }
    })
}

/// Saves the singleton settings record.
#[flutter_rust_bridge::frb(sync)]
pub fn save_settings(
    reminder_enabled: bool,
    reminder_time: String,
    gentle_mode: bool,
) -> ActionResponse {
    let settings = NotificationSettings {
        reminder_enabled,
        reminder_time,
        gentle_mode,
    };

    let result = (|| -> Result<ActionResponse, String> {
        let conn = open_store()?;
        SqliteSettingsRepository::new(&conn)
            .save_settings(&settings)
            .map(|()| ActionResponse::success("Settings saved.", None))
            .map_err(|err| format!("save_settings failed: {err}"))
    })();
    result.unwrap_or_else(ActionResponse::failure)
}

/// Persists the onboarding-completed flag.
#[flutter_rust_bridge::frb(sync)]
pub fn save_onboarding_completed(completed: bool) -> ActionResponse {
    let result = (|| -> Result<ActionResponse, String> {
        let conn = open_store()?;
        SqliteSettingsRepository::new(&conn)
            .save_onboarding_completed(completed)
            .map(|()| ActionResponse::success("Onboarding state saved.", None))
            .map_err(|err| format!("save_onboarding_completed failed: {err}"))
    })();
    result.unwrap_or_else(ActionResponse::failure)
}

fn parse_polarity(value: Option<&str>) -> Result<Option<MoodPolarity>, String> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some("low") => Ok(Some(MoodPolarity::Low)),
        Some("high") => Ok(Some(MoodPolarity::High)),
        Some(other) => Err(format!("invalid polarity `{other}`; expected low|high")),
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TINYCARE_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn open_store() -> Result<rusqlite::Connection, String> {
    open_db(resolve_db_path()).map_err(|err| format!("store open failed: {err}"))
}

fn with_journal(
    f: impl FnOnce(&JournalService<SqliteLogRepository<'_>, SystemClock>) -> Result<ActionResponse, String>,
) -> ActionResponse {
    match with_journal_raw(f) {
        Ok(response) => response,
        Err(message) => ActionResponse::failure(message),
    }
}

fn with_journal_raw<T>(
    f: impl FnOnce(&JournalService<SqliteLogRepository<'_>, SystemClock>) -> Result<T, String>,
) -> Result<T, String> {
    let conn = open_store()?;
    let service = JournalService::new(SqliteLogRepository::new(&conn), SystemClock);
    f(&service)
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, home_snapshot, init_logging, load_settings, load_weekly_goals, ping,
        record_mood, record_sos, record_win, save_settings,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn record_mood_rejects_bad_polarity_without_touching_storage() {
        let response = record_mood(3, Some("sideways".to_string()), String::new());
        assert!(!response.ok);
        assert!(response.message.contains("polarity"));
    }

    #[test]
    fn record_mood_rejects_out_of_range_level() {
        let response = record_mood(9, None, String::new());
        assert!(!response.ok);
        assert!(response.record_id.is_none());
    }

    #[test]
    fn record_flows_roundtrip_through_home_snapshot() {
        let saved = record_win(vec!["tiny".to_string()], "made tea".to_string());
        assert!(saved.ok, "{}", saved.message);
        assert!(saved.record_id.is_some());

        let snapshot = home_snapshot();
        assert!(snapshot.ok, "{}", snapshot.message);
        assert_eq!(snapshot.affirmation_tag, "progress");
        assert!(snapshot.win_count_today >= 1);
    }

    #[test]
    fn record_sos_with_nothing_done_is_a_quiet_noop() {
        let response = record_sos(false, false, false);
        assert!(response.ok, "{}", response.message);
        assert!(response.record_id.is_none());
    }

    #[test]
    fn settings_save_validates_reminder_time() {
        let bad = save_settings(true, "25:99".to_string(), false);
        assert!(!bad.ok);

        let good = save_settings(true, "21:15".to_string(), true);
        assert!(good.ok, "{}", good.message);

        let loaded = load_settings();
        assert!(loaded.ok, "{}", loaded.message);
        assert_eq!(loaded.reminder_time, "21:15");
        assert!(loaded.gentle_mode);
    }

    #[test]
    fn weekly_goals_listing_reports_current_week() {
        let response = load_weekly_goals();
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.week_start_key.len(), 10);
    }
}
