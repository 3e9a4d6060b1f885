//! Derived signals over the log collections.
//!
//! # Responsibility
//! - Turn raw log snapshots into the small closed sets of signals the
//!   screens render: streaks, insights, trends, affirmations, summaries.
//!
//! # Invariants
//! - Everything here is a pure function of its inputs; calling twice with
//!   identical snapshots yields identical outputs.
//! - The priority-ordered [`trend::Insight`] and the four-way
//!   [`trend::MoodTrend`] classifier are separate signals and stay separate.

pub mod affirmation;
pub mod snapshot;
pub mod streak;
pub mod trend;
pub mod weekly;

pub use affirmation::{select_affirmation, Affirmation};
pub use snapshot::{home_snapshot, HomeSnapshot};
pub use streak::trailing_low_streak;
pub use trend::{derive_insight, summarize_trend, Insight, MoodTrend};
pub use weekly::WeeklySummary;
