//! Calendar date keys, week bucketing and recency checks.
//!
//! # Responsibility
//! - Convert points in time to canonical `YYYY-MM-DD` date keys.
//! - Map any date to the Monday starting its ISO-style week.
//! - Decide membership in a trailing window of calendar days.
//!
//! # Invariants
//! - Every function here is total and pure; "today" is always an explicit
//!   parameter, never read from the system clock.
//! - Date keys are zero-padded and derived from local calendar fields.
//! - A malformed date key never matches any recency window.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeDelta, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date key pattern"));

/// Source of the current instant for code that needs to stamp records.
///
/// Production code uses [`SystemClock`]; tests pin a [`FixedClock`] so every
/// derived key is deterministic.
pub trait Clock {
    /// Current instant for `created_at` stamps.
    fn now_utc(&self) -> DateTime<Utc>;
    /// Current calendar date in the local time zone.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation of [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen at one instant, for tests and reproduction of reports.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub today: NaiveDate,
    pub now_utc: DateTime<Utc>,
}

impl FixedClock {
    /// Freezes the clock at midday on the given local date.
    pub fn on(today: NaiveDate) -> Self {
        let midday = today.and_hms_opt(12, 0, 0).unwrap_or_else(|| today.into());
        Self {
            today,
            now_utc: midday.and_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.now_utc
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Returns the canonical `YYYY-MM-DD` key for a calendar date.
pub fn to_date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Returns whether `value` has the canonical date-key shape.
pub fn is_date_key(value: &str) -> bool {
    DATE_KEY_RE.is_match(value)
}

/// Returns the date key `offset_days` away from `today`.
///
/// `offset_days` may be negative, zero or positive; month and year
/// boundaries roll over correctly.
pub fn date_key_from_offset(today: NaiveDate, offset_days: i64) -> String {
    to_date_key(shift_days(today, offset_days))
}

/// Returns the date key of the Monday on/before the given date.
///
/// With Sunday = 0 .. Saturday = 6, Sunday maps six days back to the prior
/// Monday and every other day maps back by `day - 1`. The input is already
/// a bare date, so the result cannot depend on time of day.
pub fn week_start_key(date: NaiveDate) -> String {
    let day = i64::from(date.weekday().num_days_from_sunday());
    let offset = if day == 0 { -6 } else { 1 - day };
    to_date_key(shift_days(date, offset))
}

/// Returns whether `date_key` names one of the last `days` calendar days.
///
/// True iff `date_key == to_date_key(today - k)` for some `k` in
/// `[0, days)`. Each candidate date is constructed and compared literally;
/// string arithmetic on keys is not a reliable day count across month and
/// year rollovers. Keys that never match (including malformed ones) simply
/// return false.
pub fn is_within_recent_days(date_key: &str, today: NaiveDate, days: u32) -> bool {
    (0..i64::from(days)).any(|k| to_date_key(shift_days(today, -k)) == date_key)
}

fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    // Saturates at the edge of the representable range instead of panicking.
    date.checked_add_signed(TimeDelta::days(days)).unwrap_or(date)
}
