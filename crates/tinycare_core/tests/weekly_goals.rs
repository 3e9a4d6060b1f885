use chrono::{DateTime, NaiveDate, Utc};
use tinycare_core::db::open_db_in_memory;
use tinycare_core::{
    FixedClock, GoalRepository, GoalValidationError, PlanService, RepoError, SqliteGoalRepository,
    ValidationError, WeeklyGoal,
};
use uuid::Uuid;

fn ts(offset: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_770_000_000 + offset, 0).unwrap()
}

fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 8).unwrap()
}

#[test]
fn insert_and_list_scopes_to_week() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGoalRepository::new(&conn);

    let this_week = WeeklyGoal::new("2026-02-02", "three short walks", ts(0));
    let other_week = WeeklyGoal::new("2026-01-26", "call the clinic", ts(1));
    repo.insert_goal(&this_week).unwrap();
    repo.insert_goal(&other_week).unwrap();

    let goals = repo.goals_for_week("2026-02-02").unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].id, this_week.id);
    assert!(!goals[0].completed);
}

#[test]
fn set_completed_flips_only_the_flag() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGoalRepository::new(&conn);

    let goal = WeeklyGoal::new("2026-02-02", "water the plants", ts(0));
    repo.insert_goal(&goal).unwrap();

    repo.set_completed(goal.id, true).unwrap();
    let reloaded = &repo.goals_for_week("2026-02-02").unwrap()[0];
    assert!(reloaded.completed);
    assert_eq!(reloaded.title, goal.title);

    repo.set_completed(goal.id, false).unwrap();
    assert!(!repo.goals_for_week("2026-02-02").unwrap()[0].completed);
}

#[test]
fn set_completed_on_unknown_goal_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGoalRepository::new(&conn);

    let missing = Uuid::new_v4();
    let err = repo.set_completed(missing, true).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing.to_string()));
}

#[test]
fn goal_title_bounds_are_enforced() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGoalRepository::new(&conn);

    let empty = WeeklyGoal::new("2026-02-02", "   ", ts(0));
    assert!(matches!(
        repo.insert_goal(&empty).unwrap_err(),
        RepoError::Validation(ValidationError::Goal(GoalValidationError::TitleEmpty))
    ));

    let too_long = WeeklyGoal::new("2026-02-02", "t".repeat(61), ts(1));
    assert!(matches!(
        repo.insert_goal(&too_long).unwrap_err(),
        RepoError::Validation(ValidationError::Goal(GoalValidationError::TitleTooLong {
            max_chars: 60,
            actual_chars: 61,
        }))
    ));
}

#[test]
fn plan_service_stamps_the_current_week_start() {
    let conn = open_db_in_memory().unwrap();
    let service = PlanService::new(SqliteGoalRepository::new(&conn), FixedClock::on(sunday()));

    // 2026-02-08 is a Sunday; its week starts on Monday 2026-02-02.
    assert_eq!(service.current_week_start(), "2026-02-02");

    let id = service.add_goal("one gentle stretch").unwrap();
    let goals = service.goals_for_current_week().unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].id, id);
    assert_eq!(goals[0].week_start_key, "2026-02-02");

    service.set_goal_completed(id, true).unwrap();
    assert!(service.goals_for_current_week().unwrap()[0].completed);
}
