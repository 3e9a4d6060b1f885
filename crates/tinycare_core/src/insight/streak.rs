//! Trailing low-mood streak detection.

use crate::model::logs::{MoodLog, MoodPolarity};

/// Counts the trailing run of `Low` entries in a mood log snapshot.
///
/// The snapshot is stable-sorted by `date_key` ascending (entries sharing a
/// date keep their insertion order), then scanned backwards until the first
/// entry that is not `Low`. Returns 0 for an empty snapshot or when the
/// most recent entry is not `Low`.
///
/// When several same-day entries carry different polarities, which of them
/// counts as "most recent" follows insertion order; no tie-break beyond the
/// stable sort is applied.
pub fn trailing_low_streak(logs: &[MoodLog]) -> usize {
    let mut sorted: Vec<&MoodLog> = logs.iter().collect();
    sorted.sort_by(|a, b| a.date_key.cmp(&b.date_key));

    sorted
        .iter()
        .rev()
        .take_while(|log| log.polarity == Some(MoodPolarity::Low))
        .count()
}
