//! Weekly plan use-case service: goals and the weekly summary.
//!
//! # Responsibility
//! - Scope goal operations to the clock's current week.
//! - Assemble the weekly summary from goals plus log snapshots.
//!
//! # Invariants
//! - The current week-start key is always derived through the injected
//!   clock, never from ambient time.

use crate::dates::{week_start_key, Clock};
use crate::insight::weekly::WeeklySummary;
use crate::model::goal::WeeklyGoal;
use crate::model::logs::{LogId, MoodLog, SosLog, WinLog};
use crate::repo::goal_repo::GoalRepository;
use crate::repo::RepoResult;
use log::info;

/// Use-case service for weekly goals and summaries.
pub struct PlanService<G: GoalRepository, C: Clock> {
    repo: G,
    clock: C,
}

impl<G: GoalRepository, C: Clock> PlanService<G, C> {
    /// Creates a service over the given repository and clock.
    pub fn new(repo: G, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Returns the week-start key for the clock's current week.
    pub fn current_week_start(&self) -> String {
        week_start_key(self.clock.today())
    }

    /// Adds an open goal to the current week.
    pub fn add_goal(&self, title: impl Into<String>) -> RepoResult<LogId> {
        let goal = WeeklyGoal::new(self.current_week_start(), title, self.clock.now_utc());
        let id = self.repo.insert_goal(&goal)?;
        info!("event=goal_added module=plan status=ok week_start={}", goal.week_start_key);
        Ok(id)
    }

    /// Flips a goal's completion state.
    pub fn set_goal_completed(&self, id: LogId, completed: bool) -> RepoResult<()> {
        self.repo.set_completed(id, completed)?;
        info!("event=goal_toggled module=plan status=ok completed={completed}");
        Ok(())
    }

    /// Lists the current week's goals in insertion order.
    pub fn goals_for_current_week(&self) -> RepoResult<Vec<WeeklyGoal>> {
        self.repo.goals_for_week(&self.current_week_start())
    }

    /// Builds the weekly summary for the current week.
    ///
    /// Log collections are passed in by the caller (they live in the log
    /// repository); goals are loaded here so they are always scoped to the
    /// same week the summary reports on.
    pub fn weekly_summary(
        &self,
        mood_logs: &[MoodLog],
        win_logs: &[WinLog],
        sos_logs: &[SosLog],
    ) -> RepoResult<WeeklySummary> {
        let week_start = self.current_week_start();
        let goals = self.repo.goals_for_week(&week_start)?;
        Ok(WeeklySummary::build(
            self.clock.today(),
            week_start,
            &goals,
            mood_logs,
            win_logs,
            sos_logs,
        ))
    }
}
