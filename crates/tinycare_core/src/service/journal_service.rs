//! Journal use-case service: recording entries and deriving the home view.
//!
//! # Responsibility
//! - Stamp new entries with the clock's date key and timestamp.
//! - Delegate persistence to the log repository.
//! - Derive the home snapshot from a fresh storage read.
//!
//! # Invariants
//! - Services never bypass repository validation contracts.
//! - The clock is injected; nothing here reads the system time directly.

use crate::dates::{to_date_key, Clock};
use crate::insight::snapshot::{home_snapshot, HomeSnapshot};
use crate::model::logs::{LogId, MoodLog, MoodPolarity, SosLog, WinLog};
use crate::repo::log_repo::LogRepository;
use crate::repo::RepoResult;
use log::info;

/// Flags reported from one SOS-mode session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SosOutcome {
    pub hydration_done: bool,
    pub breathing_done: bool,
    pub rest_done: bool,
}

impl SosOutcome {
    fn any_done(&self) -> bool {
        self.hydration_done || self.breathing_done || self.rest_done
    }
}

/// Use-case service for the three log collections.
pub struct JournalService<R: LogRepository, C: Clock> {
    repo: R,
    clock: C,
}

impl<R: LogRepository, C: Clock> JournalService<R, C> {
    /// Creates a service over the given repository and clock.
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Records a mood entry dated today.
    ///
    /// # Contract
    /// - `level` must be within 1..=5 and `note` within its length limit;
    ///   violations surface as validation errors from the repository.
    pub fn record_mood(
        &self,
        level: u8,
        polarity: Option<MoodPolarity>,
        note: impl Into<String>,
    ) -> RepoResult<LogId> {
        let log = MoodLog::new(
            to_date_key(self.clock.today()),
            level,
            polarity,
            note,
            self.clock.now_utc(),
        );
        let id = self.repo.insert_mood(&log)?;
        info!("event=mood_recorded module=journal status=ok level={level}");
        Ok(id)
    }

    /// Records a win entry dated today. Tag order is preserved as given.
    pub fn record_win(&self, tags: Vec<String>, note: impl Into<String>) -> RepoResult<LogId> {
        let log = WinLog::new(
            to_date_key(self.clock.today()),
            tags,
            note,
            self.clock.now_utc(),
        );
        let id = self.repo.insert_win(&log)?;
        info!("event=win_recorded module=journal status=ok");
        Ok(id)
    }

    /// Records an SOS session dated today.
    ///
    /// # Contract
    /// - Sessions with no completed action are not persisted; the call
    ///   succeeds with `None` so callers can treat it as a quiet no-op.
    pub fn record_sos(&self, outcome: SosOutcome) -> RepoResult<Option<LogId>> {
        if !outcome.any_done() {
            info!("event=sos_skipped module=journal status=ok reason=nothing_done");
            return Ok(None);
        }

        let log = SosLog::new(
            to_date_key(self.clock.today()),
            outcome.hydration_done,
            outcome.breathing_done,
            outcome.rest_done,
            self.clock.now_utc(),
        );
        let id = self.repo.insert_sos(&log)?;
        info!("event=sos_recorded module=journal status=ok");
        Ok(Some(id))
    }

    /// Loads all three collections and derives the home snapshot.
    pub fn home_snapshot(&self) -> RepoResult<HomeSnapshot> {
        let mood_logs = self.repo.list_mood_logs()?;
        let win_logs = self.repo.list_win_logs()?;
        let sos_logs = self.repo.list_sos_logs()?;
        Ok(home_snapshot(
            self.clock.today(),
            &mood_logs,
            &win_logs,
            &sos_logs,
        ))
    }
}
