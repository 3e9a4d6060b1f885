//! Home screen snapshot derivation.

use crate::dates::to_date_key;
use crate::insight::affirmation::{select_affirmation, Affirmation};
use crate::insight::trend::{derive_insight, Insight};
use crate::model::logs::{MoodLog, SosLog, WinLog};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything the home screen renders, derived in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeSnapshot {
    pub affirmation: Affirmation,
    pub insight: Option<Insight>,
    pub mood_count_today: usize,
    pub win_count_today: usize,
    pub sos_count_today: usize,
}

/// Derives the home snapshot from the three log collections.
///
/// Pure function over the given snapshot lists; the caller supplies
/// `today` so results are reproducible.
pub fn home_snapshot(
    today: NaiveDate,
    mood_logs: &[MoodLog],
    win_logs: &[WinLog],
    sos_logs: &[SosLog],
) -> HomeSnapshot {
    let today_key = to_date_key(today);

    HomeSnapshot {
        affirmation: select_affirmation(&today_key, mood_logs, win_logs, sos_logs),
        insight: derive_insight(today, mood_logs, win_logs, sos_logs),
        mood_count_today: count_on(mood_logs.iter().map(|log| log.date_key.as_str()), &today_key),
        win_count_today: count_on(win_logs.iter().map(|log| log.date_key.as_str()), &today_key),
        sos_count_today: count_on(sos_logs.iter().map(|log| log.date_key.as_str()), &today_key),
    }
}

fn count_on<'a>(date_keys: impl Iterator<Item = &'a str>, today_key: &str) -> usize {
    date_keys.filter(|key| *key == today_key).count()
}
