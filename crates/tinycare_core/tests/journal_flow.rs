use chrono::NaiveDate;
use tinycare_core::db::open_db_in_memory;
use tinycare_core::{
    Affirmation, FixedClock, Insight, JournalService, LogRepository, MoodPolarity, RepoError,
    SosOutcome, SqliteLogRepository, ValidationError,
};

fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 8).unwrap()
}

fn service(conn: &rusqlite::Connection) -> JournalService<SqliteLogRepository<'_>, FixedClock> {
    JournalService::new(SqliteLogRepository::new(conn), FixedClock::on(sunday()))
}

#[test]
fn record_mood_stamps_todays_date_key() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    service.record_mood(4, Some(MoodPolarity::High), "sunny").unwrap();

    let logs = SqliteLogRepository::new(&conn).list_mood_logs().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].date_key, "2026-02-08");
    assert_eq!(logs[0].level, 4);
    assert_eq!(logs[0].note, "sunny");
}

#[test]
fn record_mood_propagates_validation_errors() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service.record_mood(9, None, "").unwrap_err();
    assert!(matches!(err, RepoError::Validation(ValidationError::Log(_))));
}

#[test]
fn record_sos_skips_persistence_when_nothing_was_done() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let outcome = service.record_sos(SosOutcome::default()).unwrap();
    assert_eq!(outcome, None);
    assert!(SqliteLogRepository::new(&conn).list_sos_logs().unwrap().is_empty());

    let saved = service
        .record_sos(SosOutcome {
            breathing_done: true,
            ..SosOutcome::default()
        })
        .unwrap();
    assert!(saved.is_some());
    assert_eq!(SqliteLogRepository::new(&conn).list_sos_logs().unwrap().len(), 1);
}

#[test]
fn home_snapshot_reflects_todays_recordings() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let empty = service.home_snapshot().unwrap();
    assert_eq!(empty.affirmation, Affirmation::Presence);
    assert_eq!(empty.insight, Some(Insight::Dormant));
    assert_eq!(empty.mood_count_today, 0);

    service.record_mood(2, Some(MoodPolarity::Low), "").unwrap();
    service
        .record_win(vec!["dishes".to_string()], "washed up")
        .unwrap();

    let snapshot = service.home_snapshot().unwrap();
    assert_eq!(snapshot.affirmation, Affirmation::Progress);
    assert_eq!(snapshot.insight, None);
    assert_eq!(snapshot.mood_count_today, 1);
    assert_eq!(snapshot.win_count_today, 1);
    assert_eq!(snapshot.sos_count_today, 0);
}

#[test]
fn home_snapshot_surfaces_a_low_streak() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    // Two same-day low entries do not form a multi-day streak on their
    // own, but the detector counts trailing low entries, not days.
    service.record_mood(1, Some(MoodPolarity::Low), "").unwrap();
    service.record_mood(2, Some(MoodPolarity::Low), "").unwrap();

    let snapshot = service.home_snapshot().unwrap();
    assert_eq!(snapshot.insight, Some(Insight::LowStreak { days: 2 }));
    assert_eq!(snapshot.affirmation, Affirmation::Recorded);
}
