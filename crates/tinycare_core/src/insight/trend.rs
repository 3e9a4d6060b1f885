//! Priority-ordered insight derivation and the weekly mood-trend classifier.
//!
//! # Responsibility
//! - Reduce the last seven days of activity to at most one [`Insight`].
//! - Classify the weekly mood window into one [`MoodTrend`] bucket.
//!
//! # Invariants
//! - Insight rules are evaluated in a fixed order and the first match wins:
//!   sustained low mood outranks coping usage, which outranks momentum,
//!   which outranks the dormant fallback.
//! - `MoodTrend` is a separate, simpler classifier; it never feeds into or
//!   reads from the insight priority chain.

use crate::dates::is_within_recent_days;
use crate::insight::streak::trailing_low_streak;
use crate::model::logs::{MoodLog, MoodPolarity, SosLog, WinLog};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of trailing calendar days an insight looks at.
pub const INSIGHT_WINDOW_DAYS: u32 = 7;

const LOW_STREAK_THRESHOLD: usize = 2;
const SOS_COPING_THRESHOLD: usize = 2;
const WIN_MOMENTUM_THRESHOLD: usize = 4;

/// One trend classification surfaced as a single contextual message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    /// Two or more consecutive low-mood entries in the recent window.
    LowStreak { days: usize },
    /// SOS mode was used at least twice recently.
    SosCoping,
    /// Win entries are accumulating.
    WinMomentum,
    /// No activity of any kind in the recent window.
    Dormant,
}

impl Insight {
    /// Stable machine-readable tag for logging and bridging.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::LowStreak { .. } => "low_streak",
            Self::SosCoping => "sos_coping",
            Self::WinMomentum => "win_momentum",
            Self::Dormant => "dormant",
        }
    }

    /// Human-readable message for the home screen card.
    pub fn message(&self) -> String {
        match self {
            Self::LowStreak { days } => format!(
                "Low entries have continued for {days} days in a row. \
                 Prioritize lowering your load today."
            ),
            Self::SosCoping => {
                "You reached for SOS mode during hard moments. \
                 Your self-care habit is holding up."
                    .to_string()
            }
            Self::WinMomentum => {
                "Win entries are adding up. Small, steady steps are accumulating."
                    .to_string()
            }
            Self::Dormant => {
                "A gap in the log is fine. Coming back at all already counts."
                    .to_string()
            }
        }
    }
}

/// Derives at most one insight from the last seven days of activity.
///
/// All three collections are first restricted to the trailing
/// [`INSIGHT_WINDOW_DAYS`] window relative to `today`, then the rules fire
/// in priority order. Returns `None` when there is recent activity but no
/// rule matches.
pub fn derive_insight(
    today: NaiveDate,
    mood_logs: &[MoodLog],
    win_logs: &[WinLog],
    sos_logs: &[SosLog],
) -> Option<Insight> {
    let recent_mood: Vec<MoodLog> = mood_logs
        .iter()
        .filter(|log| is_within_recent_days(&log.date_key, today, INSIGHT_WINDOW_DAYS))
        .cloned()
        .collect();
    let recent_win_count = win_logs
        .iter()
        .filter(|log| is_within_recent_days(&log.date_key, today, INSIGHT_WINDOW_DAYS))
        .count();
    let recent_sos_count = sos_logs
        .iter()
        .filter(|log| is_within_recent_days(&log.date_key, today, INSIGHT_WINDOW_DAYS))
        .count();

    let low_streak = trailing_low_streak(&recent_mood);
    if low_streak >= LOW_STREAK_THRESHOLD {
        return Some(Insight::LowStreak { days: low_streak });
    }

    if recent_sos_count >= SOS_COPING_THRESHOLD {
        return Some(Insight::SosCoping);
    }

    if recent_win_count >= WIN_MOMENTUM_THRESHOLD {
        return Some(Insight::WinMomentum);
    }

    if recent_mood.is_empty() && recent_win_count == 0 && recent_sos_count == 0 {
        return Some(Insight::Dormant);
    }

    None
}

/// Four-way skew classification of a weekly mood window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTrend {
    /// No low or high entries at all.
    Balanced,
    /// More low entries than high ones.
    LowSkew,
    /// More high entries than low ones.
    HighSkew,
    /// Equal, non-zero low and high counts.
    MixedEven,
}

impl MoodTrend {
    /// Human-readable message for the weekly summary.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Balanced => "No strong skew in mood entries.",
            Self::LowSkew => "Low entries are running a bit high. Prioritize lightening the load.",
            Self::HighSkew => "High entries are running a bit high. Keep an eye on rest and pacing.",
            Self::MixedEven => "Low and high entries are about even. Watch the wave, avoid overreach.",
        }
    }
}

/// Classifies an already-windowed mood snapshot by low/high counts.
///
/// Callers pass the seven-day window; this function does no recency
/// filtering of its own.
pub fn summarize_trend(mood_logs: &[MoodLog]) -> MoodTrend {
    let low_count = count_polarity(mood_logs, MoodPolarity::Low);
    let high_count = count_polarity(mood_logs, MoodPolarity::High);

    if low_count == 0 && high_count == 0 {
        MoodTrend::Balanced
    } else if low_count > high_count {
        MoodTrend::LowSkew
    } else if high_count > low_count {
        MoodTrend::HighSkew
    } else {
        MoodTrend::MixedEven
    }
}

fn count_polarity(mood_logs: &[MoodLog], polarity: MoodPolarity) -> usize {
    mood_logs
        .iter()
        .filter(|log| log.polarity == Some(polarity))
        .count()
}
