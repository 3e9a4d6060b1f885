use chrono::{DateTime, NaiveDate, Utc};
use tinycare_core::db::open_db_in_memory;
use tinycare_core::{
    date_key_from_offset, FixedClock, GoalRepository, MoodLog, MoodPolarity, MoodTrend,
    PlanService, SosLog, SqliteGoalRepository, WeeklyGoal, WeeklySummary, WinLog,
};

fn ts(offset: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_770_000_000 + offset, 0).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 8).unwrap()
}

fn mood_on(days_ago: i64, level: u8, polarity: Option<MoodPolarity>, seq: i64) -> MoodLog {
    MoodLog::new(date_key_from_offset(today(), -days_ago), level, polarity, "", ts(seq))
}

#[test]
fn summary_aggregates_the_seven_day_window() {
    let mood = vec![
        mood_on(9, 1, Some(MoodPolarity::Low), 0), // outside the window
        mood_on(2, 2, Some(MoodPolarity::Low), 1),
        mood_on(1, 5, Some(MoodPolarity::High), 2),
        mood_on(0, 4, None, 3),
    ];
    let wins = vec![
        WinLog::new(date_key_from_offset(today(), 0), vec![], "", ts(4)),
        WinLog::new(date_key_from_offset(today(), -8), vec![], "", ts(5)),
    ];
    let sos = vec![SosLog::new(date_key_from_offset(today(), -3), true, false, false, ts(6))];
    let goals = vec![
        done_goal("breathe before bed"),
        WeeklyGoal::new("2026-02-02", "short walk", ts(7)),
    ];

    let summary = WeeklySummary::build(today(), "2026-02-02", &goals, &mood, &wins, &sos);

    assert_eq!(summary.mood_count, 3);
    assert_eq!(summary.average_mood, Some((2.0 + 5.0 + 4.0) / 3.0));
    assert_eq!(summary.win_count, 1);
    assert_eq!(summary.sos_count, 1);
    assert_eq!(summary.goals_done, 1);
    assert_eq!(summary.goals_total, 2);
    assert_eq!(summary.trend, MoodTrend::MixedEven);
    assert_eq!(summary.low_streak, 0);
}

#[test]
fn summary_with_no_mood_entries_has_no_average() {
    let summary = WeeklySummary::build(today(), "2026-02-02", &[], &[], &[], &[]);
    assert_eq!(summary.mood_count, 0);
    assert_eq!(summary.average_mood, None);
    assert_eq!(summary.trend, MoodTrend::Balanced);
    assert!(summary.render_text().contains("average -"));
}

#[test]
fn render_text_lists_each_stat_on_its_own_line() {
    let mood = vec![mood_on(1, 2, Some(MoodPolarity::Low), 0)];
    let summary = WeeklySummary::build(today(), "2026-02-02", &[], &mood, &[], &[]);

    let text = summary.render_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "Week starting: 2026-02-02");
    assert_eq!(lines[2], "Mood entries: 1 (average 2.0)");
    assert_eq!(lines[3], "Win entries: 0");
    assert_eq!(lines[4], "SOS sessions: 0");
    assert_eq!(lines[5], "Weekly goals done: 0/0");
    assert!(lines[6].starts_with("Trend: "));
    // A single low entry is below the warning threshold.
    assert!(!text.contains("consecutive low entries"));
}

#[test]
fn render_text_warns_on_a_low_streak() {
    let mood = vec![
        mood_on(2, 2, Some(MoodPolarity::Low), 0),
        mood_on(1, 1, Some(MoodPolarity::Low), 1),
        mood_on(0, 2, Some(MoodPolarity::Low), 2),
    ];
    let summary = WeeklySummary::build(today(), "2026-02-02", &[], &mood, &[], &[]);

    assert_eq!(summary.low_streak, 3);
    assert!(summary
        .render_text()
        .contains("Note: 3 consecutive low entries on record"));
}

#[test]
fn plan_service_builds_the_summary_for_its_own_week() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGoalRepository::new(&conn);
    repo.insert_goal(&done_goal("drink water")).unwrap();

    let service = PlanService::new(SqliteGoalRepository::new(&conn), FixedClock::on(today()));
    let mood = vec![mood_on(0, 3, None, 0)];
    let summary = service.weekly_summary(&mood, &[], &[]).unwrap();

    assert_eq!(summary.week_start_key, "2026-02-02");
    assert_eq!(summary.goals_done, 1);
    assert_eq!(summary.goals_total, 1);
    assert_eq!(summary.mood_count, 1);
}

fn done_goal(title: &str) -> WeeklyGoal {
    let mut goal = WeeklyGoal::new("2026-02-02", title, ts(100));
    goal.completed = true;
    goal
}
