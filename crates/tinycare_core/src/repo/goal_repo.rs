//! Weekly goal repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist weekly goals scoped to one week-start key.
//! - Flip goal completion without rewriting the record.
//!
//! # Invariants
//! - `completed` is the only column updated after insert.
//! - Zero-row completion updates surface as `NotFound`.

use crate::model::goal::WeeklyGoal;
use crate::model::logs::LogId;
use crate::repo::{bool_to_int, int_to_bool, parse_timestamp, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for weekly goals.
pub trait GoalRepository {
    fn insert_goal(&self, goal: &WeeklyGoal) -> RepoResult<LogId>;
    fn goals_for_week(&self, week_start_key: &str) -> RepoResult<Vec<WeeklyGoal>>;
    fn set_completed(&self, id: LogId, completed: bool) -> RepoResult<()>;
}

/// SQLite-backed goal repository.
pub struct SqliteGoalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGoalRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl GoalRepository for SqliteGoalRepository<'_> {
    fn insert_goal(&self, goal: &WeeklyGoal) -> RepoResult<LogId> {
        goal.validate()?;

        self.conn.execute(
            "INSERT INTO weekly_goals (id, week_start, title, completed, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                goal.id.to_string(),
                goal.week_start_key.as_str(),
                goal.title.as_str(),
                bool_to_int(goal.completed),
                goal.created_at.to_rfc3339(),
            ],
        )?;

        Ok(goal.id)
    }

    fn goals_for_week(&self, week_start_key: &str) -> RepoResult<Vec<WeeklyGoal>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, week_start, title, completed, created_at
             FROM weekly_goals
             WHERE week_start = ?1
             ORDER BY created_at ASC;",
        )?;
        let mut rows = stmt.query([week_start_key])?;
        let mut goals = Vec::new();
        while let Some(row) = rows.next()? {
            goals.push(parse_goal_row(row)?);
        }
        Ok(goals)
    }

    fn set_completed(&self, id: LogId, completed: bool) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE weekly_goals SET completed = ?1 WHERE id = ?2;",
            params![bool_to_int(completed), id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

fn parse_goal_row(row: &Row<'_>) -> RepoResult<WeeklyGoal> {
    let id_text: String = row.get("id")?;
    let created_at_text: String = row.get("created_at")?;

    let goal = WeeklyGoal {
        id: parse_uuid(&id_text, "weekly_goals.id")?,
        week_start_key: row.get("week_start")?,
        title: row.get("title")?,
        completed: int_to_bool(row.get("completed")?, "weekly_goals.completed")?,
        created_at: parse_timestamp(&created_at_text, "weekly_goals.created_at")?,
    };
    goal.validate()?;
    Ok(goal)
}
