//! Log repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide append/list APIs over `mood_logs`, `win_logs` and `sos_logs`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - Lists come back in ascending `created_at` order, matching the
//!   append-only insertion order the derivation logic assumes.
//! - Win tags persist as a JSON array string; unreadable tag payloads
//!   degrade to an empty tag list on read rather than failing the load.

use crate::model::logs::{LogId, MoodLog, MoodPolarity, SosLog, WinLog};
use crate::repo::{bool_to_int, int_to_bool, parse_timestamp, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for the three append-only log collections.
pub trait LogRepository {
    fn insert_mood(&self, log: &MoodLog) -> RepoResult<LogId>;
    fn insert_win(&self, log: &WinLog) -> RepoResult<LogId>;
    fn insert_sos(&self, log: &SosLog) -> RepoResult<LogId>;
    fn list_mood_logs(&self) -> RepoResult<Vec<MoodLog>>;
    fn list_win_logs(&self) -> RepoResult<Vec<WinLog>>;
    fn list_sos_logs(&self) -> RepoResult<Vec<SosLog>>;
}

/// SQLite-backed log repository.
pub struct SqliteLogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLogRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl LogRepository for SqliteLogRepository<'_> {
    fn insert_mood(&self, log: &MoodLog) -> RepoResult<LogId> {
        log.validate()?;

        self.conn.execute(
            "INSERT INTO mood_logs (id, date, mood_level, polarity, note, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                log.id.to_string(),
                log.date_key.as_str(),
                i64::from(log.level),
                log.polarity.map(polarity_to_db),
                empty_to_null(&log.note),
                log.created_at.to_rfc3339(),
            ],
        )?;

        Ok(log.id)
    }

    fn insert_win(&self, log: &WinLog) -> RepoResult<LogId> {
        log.validate()?;

        let tags_json = serde_json::to_string(&log.tags)
            .map_err(|err| RepoError::InvalidData(format!("tags not serializable: {err}")))?;
        self.conn.execute(
            "INSERT INTO win_logs (id, date, tags, note, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                log.id.to_string(),
                log.date_key.as_str(),
                tags_json,
                empty_to_null(&log.note),
                log.created_at.to_rfc3339(),
            ],
        )?;

        Ok(log.id)
    }

    fn insert_sos(&self, log: &SosLog) -> RepoResult<LogId> {
        log.validate()?;

        self.conn.execute(
            "INSERT INTO sos_logs (id, date, hydration_done, breathing_done, rest_done, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                log.id.to_string(),
                log.date_key.as_str(),
                bool_to_int(log.hydration_done),
                bool_to_int(log.breathing_done),
                bool_to_int(log.rest_done),
                log.created_at.to_rfc3339(),
            ],
        )?;

        Ok(log.id)
    }

    fn list_mood_logs(&self) -> RepoResult<Vec<MoodLog>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, mood_level, polarity, note, created_at
             FROM mood_logs
             ORDER BY created_at ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut logs = Vec::new();
        while let Some(row) = rows.next()? {
            logs.push(parse_mood_row(row)?);
        }
        Ok(logs)
    }

    fn list_win_logs(&self) -> RepoResult<Vec<WinLog>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, tags, note, created_at
             FROM win_logs
             ORDER BY created_at ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut logs = Vec::new();
        while let Some(row) = rows.next()? {
            logs.push(parse_win_row(row)?);
        }
        Ok(logs)
    }

    fn list_sos_logs(&self) -> RepoResult<Vec<SosLog>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, hydration_done, breathing_done, rest_done, created_at
             FROM sos_logs
             ORDER BY created_at ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut logs = Vec::new();
        while let Some(row) = rows.next()? {
            logs.push(parse_sos_row(row)?);
        }
        Ok(logs)
    }
}

fn parse_mood_row(row: &Row<'_>) -> RepoResult<MoodLog> {
    let id_text: String = row.get("id")?;
    let created_at_text: String = row.get("created_at")?;
    let polarity = match row.get::<_, Option<String>>("polarity")? {
        Some(value) => Some(parse_polarity(&value)?),
        None => None,
    };
    let level: i64 = row.get("mood_level")?;

    let log = MoodLog {
        id: parse_uuid(&id_text, "mood_logs.id")?,
        date_key: row.get("date")?,
        level: u8::try_from(level).map_err(|_| {
            RepoError::InvalidData(format!("invalid mood level `{level}` in mood_logs.mood_level"))
        })?,
        polarity,
        note: row.get::<_, Option<String>>("note")?.unwrap_or_default(),
        created_at: parse_timestamp(&created_at_text, "mood_logs.created_at")?,
    };
    log.validate()?;
    Ok(log)
}

fn parse_win_row(row: &Row<'_>) -> RepoResult<WinLog> {
    let id_text: String = row.get("id")?;
    let created_at_text: String = row.get("created_at")?;

    let log = WinLog {
        id: parse_uuid(&id_text, "win_logs.id")?,
        date_key: row.get("date")?,
        tags: parse_tags(row.get::<_, Option<String>>("tags")?),
        note: row.get::<_, Option<String>>("note")?.unwrap_or_default(),
        created_at: parse_timestamp(&created_at_text, "win_logs.created_at")?,
    };
    log.validate()?;
    Ok(log)
}

fn parse_sos_row(row: &Row<'_>) -> RepoResult<SosLog> {
    let id_text: String = row.get("id")?;
    let created_at_text: String = row.get("created_at")?;

    let log = SosLog {
        id: parse_uuid(&id_text, "sos_logs.id")?,
        date_key: row.get("date")?,
        hydration_done: int_to_bool(row.get("hydration_done")?, "sos_logs.hydration_done")?,
        breathing_done: int_to_bool(row.get("breathing_done")?, "sos_logs.breathing_done")?,
        rest_done: int_to_bool(row.get("rest_done")?, "sos_logs.rest_done")?,
        created_at: parse_timestamp(&created_at_text, "sos_logs.created_at")?,
    };
    log.validate()?;
    Ok(log)
}

/// Leniently decodes the persisted tag payload.
///
/// Anything that is not a JSON array collapses to an empty list, and
/// non-string elements are dropped. Tag payloads are cosmetic, so a
/// corrupted value should not make the whole log list unreadable.
fn parse_tags(raw: Option<String>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn polarity_to_db(polarity: MoodPolarity) -> &'static str {
    match polarity {
        MoodPolarity::Low => "low",
        MoodPolarity::High => "high",
    }
}

fn parse_polarity(value: &str) -> RepoResult<MoodPolarity> {
    match value {
        "low" => Ok(MoodPolarity::Low),
        "high" => Ok(MoodPolarity::High),
        other => Err(RepoError::InvalidData(format!(
            "invalid polarity `{other}` in mood_logs.polarity"
        ))),
    }
}

fn empty_to_null(note: &str) -> Option<&str> {
    if note.is_empty() {
        None
    } else {
        Some(note)
    }
}
