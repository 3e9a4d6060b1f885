//! Weekly summary aggregation and share text.
//!
//! # Responsibility
//! - Aggregate the trailing seven days plus the week's goals into the
//!   stats block the weekly view renders and shares.
//!
//! # Invariants
//! - Counts are taken over the same recency window the insight rules use.
//! - The rendered text is deterministic for a given input snapshot.

use crate::dates::is_within_recent_days;
use crate::insight::streak::trailing_low_streak;
use crate::insight::trend::{summarize_trend, MoodTrend, INSIGHT_WINDOW_DAYS};
use crate::model::goal::WeeklyGoal;
use crate::model::logs::{MoodLog, SosLog, WinLog};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Threshold at which the summary carries a low-streak warning line.
pub const LOW_STREAK_WARNING_AT: usize = 2;

/// Aggregated stats for one week, ready for rendering or sharing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub week_start_key: String,
    pub mood_count: usize,
    /// Mean mood level over the window; absent when no mood entries exist.
    pub average_mood: Option<f64>,
    pub win_count: usize,
    pub sos_count: usize,
    pub goals_done: usize,
    pub goals_total: usize,
    pub trend: MoodTrend,
    pub low_streak: usize,
}

impl WeeklySummary {
    /// Builds the summary from the week's goals and the full log snapshots.
    ///
    /// Logs are restricted to the trailing seven days relative to `today`;
    /// goals are expected to be pre-scoped to the week by the caller.
    pub fn build(
        today: NaiveDate,
        week_start_key: impl Into<String>,
        goals: &[WeeklyGoal],
        mood_logs: &[MoodLog],
        win_logs: &[WinLog],
        sos_logs: &[SosLog],
    ) -> Self {
        let recent_mood: Vec<MoodLog> = mood_logs
            .iter()
            .filter(|log| is_within_recent_days(&log.date_key, today, INSIGHT_WINDOW_DAYS))
            .cloned()
            .collect();
        let win_count = win_logs
            .iter()
            .filter(|log| is_within_recent_days(&log.date_key, today, INSIGHT_WINDOW_DAYS))
            .count();
        let sos_count = sos_logs
            .iter()
            .filter(|log| is_within_recent_days(&log.date_key, today, INSIGHT_WINDOW_DAYS))
            .count();

        let average_mood = if recent_mood.is_empty() {
            None
        } else {
            let total: u32 = recent_mood.iter().map(|log| u32::from(log.level)).sum();
            Some(f64::from(total) / recent_mood.len() as f64)
        };

        Self {
            week_start_key: week_start_key.into(),
            mood_count: recent_mood.len(),
            average_mood,
            win_count,
            sos_count,
            goals_done: goals.iter().filter(|goal| goal.completed).count(),
            goals_total: goals.len(),
            trend: summarize_trend(&recent_mood),
            low_streak: trailing_low_streak(&recent_mood),
        }
    }

    /// Renders the share/clinic text block, one stat per line.
    pub fn render_text(&self) -> String {
        let average = match self.average_mood {
            Some(value) => format!("{value:.1}"),
            None => "-".to_string(),
        };

        let mut lines = vec![
            "[TinyCare weekly summary]".to_string(),
            format!("Week starting: {}", self.week_start_key),
            format!("Mood entries: {} (average {average})", self.mood_count),
            format!("Win entries: {}", self.win_count),
            format!("SOS sessions: {}", self.sos_count),
            format!("Weekly goals done: {}/{}", self.goals_done, self.goals_total),
            format!("Trend: {}", self.trend.message()),
        ];
        if self.low_streak >= LOW_STREAK_WARNING_AT {
            lines.push(format!(
                "Note: {} consecutive low entries on record",
                self.low_streak
            ));
        }
        lines.join("\n")
    }
}
