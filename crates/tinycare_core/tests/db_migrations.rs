use rusqlite::Connection;
use tinycare_core::db::migrations::latest_version;
use tinycare_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "mood_logs");
    assert_table_exists(&conn, "win_logs");
    assert_table_exists(&conn, "sos_logs");
    assert_table_exists(&conn, "weekly_goals");
    assert_table_exists(&conn, "settings");
}

#[test]
fn gentle_mode_column_arrives_with_migration_two() {
    let conn = open_db_in_memory().unwrap();

    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('settings') WHERE name = 'gentle_mode';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);

    let gentle_mode: i64 = conn
        .query_row("SELECT gentle_mode FROM settings WHERE id = 1;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(gentle_mode, 0);
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tinycare.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "mood_logs");
}

#[test]
fn settings_row_is_seeded_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tinycare.db");

    let conn = open_db(&path).unwrap();
    conn.execute("UPDATE settings SET onboarding_completed = 1 WHERE id = 1;", [])
        .unwrap();
    drop(conn);

    // Reopening must not reset the seeded row.
    let conn = open_db(&path).unwrap();
    let onboarding: i64 = conn
        .query_row(
            "SELECT onboarding_completed FROM settings WHERE id = 1;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(onboarding, 1);

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM settings;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
