use tinycare_core::db::open_db_in_memory;
use tinycare_core::{
    NotificationSettings, RepoError, SettingsRepository, SettingsValidationError,
    SqliteSettingsRepository, ValidationError,
};

#[test]
fn fresh_database_loads_seeded_defaults() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    let settings = repo.load_settings().unwrap();
    assert_eq!(settings, NotificationSettings::default());
    assert!(!repo.load_onboarding_completed().unwrap());
}

#[test]
fn save_and_load_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    let settings = NotificationSettings {
        reminder_enabled: false,
        reminder_time: "07:30".to_string(),
        gentle_mode: true,
    };
    repo.save_settings(&settings).unwrap();

    assert_eq!(repo.load_settings().unwrap(), settings);
}

#[test]
fn invalid_reminder_time_is_rejected_before_sql() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    let settings = NotificationSettings {
        reminder_time: "25:00".to_string(),
        ..NotificationSettings::default()
    };
    let err = repo.save_settings(&settings).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::Settings(
            SettingsValidationError::InvalidReminderTime(_)
        ))
    ));

    // The stored row is untouched.
    assert_eq!(repo.load_settings().unwrap(), NotificationSettings::default());
}

#[test]
fn onboarding_flag_persists_and_resets() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    repo.save_onboarding_completed(true).unwrap();
    assert!(repo.load_onboarding_completed().unwrap());

    repo.save_onboarding_completed(false).unwrap();
    assert!(!repo.load_onboarding_completed().unwrap());
}

#[test]
fn null_reminder_time_degrades_to_default() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    conn.execute("UPDATE settings SET daily_reminder_time = NULL WHERE id = 1;", [])
        .unwrap();

    let settings = repo.load_settings().unwrap();
    assert_eq!(settings.reminder_time, "20:00");
}
