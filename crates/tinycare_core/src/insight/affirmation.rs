//! Daily affirmation selection.

use crate::model::logs::{MoodLog, SosLog, WinLog};
use serde::{Deserialize, Serialize};

/// The closed set of affirmation messages shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affirmation {
    /// A win was logged today.
    Progress,
    /// A mood entry was logged today.
    Recorded,
    /// An SOS session was completed today.
    SelfCare,
    /// Nothing logged yet; showing up still counts.
    Presence,
}

impl Affirmation {
    /// Stable machine-readable tag for logging and bridging.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Progress => "progress",
            Self::Recorded => "recorded",
            Self::SelfCare => "self_care",
            Self::Presence => "presence",
        }
    }

    /// Human-readable affirmation text.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Progress => "You are stacking up small wins.",
            Self::Recorded => "Writing it down is itself a step forward.",
            Self::SelfCare => "You chose care for yourself on a hard day.",
            Self::Presence => "Showing up here is already enough.",
        }
    }
}

/// Picks today's affirmation from the three log collections.
///
/// Fixed priority: a win dated today, else a mood entry dated today, else
/// an SOS entry dated today, else the default presence message. Pure and
/// deterministic; no side effects.
pub fn select_affirmation(
    today_key: &str,
    mood_logs: &[MoodLog],
    win_logs: &[WinLog],
    sos_logs: &[SosLog],
) -> Affirmation {
    if win_logs.iter().any(|log| log.date_key == today_key) {
        return Affirmation::Progress;
    }
    if mood_logs.iter().any(|log| log.date_key == today_key) {
        return Affirmation::Recorded;
    }
    if sos_logs.iter().any(|log| log.date_key == today_key) {
        return Affirmation::SelfCare;
    }
    Affirmation::Presence
}
