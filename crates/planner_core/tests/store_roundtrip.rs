use chrono::{NaiveDate, NaiveDateTime};
use planner_core::db::open_db_in_memory;
use planner_core::{Course, PlannerStore, Priority, Settings, SqliteStore, StoreError, Task, Theme};
use uuid::Uuid;

#[test]
fn blank_slate_resolves_to_defaults() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::new(&conn);

    assert!(store.tasks().is_empty());
    assert!(store.courses().is_empty());
    assert_eq!(store.settings(), Settings::default());
    assert_eq!(store.settings().theme, Theme::Light);
}

#[test]
fn save_and_load_courses_keeps_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::new(&conn);

    let algebra = Course::new("Linear Algebra", None);
    let mut compilers = Course::new("Compilers", Some("#ef4444".to_string()));
    compilers.code = Some("CS 341".to_string());
    compilers.instructor = Some("Dr. Reyes".to_string());

    store
        .save_courses(&[algebra.clone(), compilers.clone()])
        .unwrap();

    let loaded = store.courses();
    assert_eq!(loaded, vec![algebra, compilers]);
}

#[test]
fn save_and_load_tasks_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::new(&conn);

    let course_id = Uuid::new_v4();
    let mut essay = Task::new("Essay", course_id, at(2024, 3, 1), Priority::High);
    essay.description = Some("Chapters 3-5".to_string());
    let quiz = Task::new("Quiz", course_id, at(2024, 2, 20), Priority::Low);

    store.save_tasks(&[essay.clone(), quiz.clone()]).unwrap();

    let loaded = store.tasks();
    assert_eq!(loaded, vec![essay, quiz]);
}

#[test]
fn save_replaces_the_whole_collection() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::new(&conn);

    let first = Course::new("First", None);
    let second = Course::new("Second", None);
    store.save_courses(&[first, second]).unwrap();

    let survivor = Course::new("Survivor", None);
    store.save_courses(&[survivor.clone()]).unwrap();

    assert_eq!(store.courses(), vec![survivor]);
}

#[test]
fn settings_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::new(&conn);

    store.save_settings(&Settings { theme: Theme::Dark }).unwrap();
    assert_eq!(store.settings().theme, Theme::Dark);
}

#[test]
fn corrupt_collection_value_degrades_to_empty() {
    let conn = open_db_in_memory().unwrap();
    seed_raw(&conn, "tasks", "{not json");
    seed_raw(&conn, "courses", "42");

    let store = SqliteStore::new(&conn);
    assert!(store.tasks().is_empty());
    assert!(store.courses().is_empty());
}

#[test]
fn corrupt_settings_value_degrades_to_default() {
    let conn = open_db_in_memory().unwrap();
    seed_raw(&conn, "settings", "\"dark\"");

    let store = SqliteStore::new(&conn);
    assert_eq!(store.settings(), Settings::default());
}

#[test]
fn failed_save_is_reported_and_reads_still_default() {
    let conn = open_db_in_memory().unwrap();
    // Make every write fail while the connection stays readable.
    conn.execute_batch("PRAGMA query_only = ON;").unwrap();
    let store = SqliteStore::new(&conn);

    let err = store
        .save_settings(&Settings { theme: Theme::Dark })
        .unwrap_err();
    assert!(matches!(err, StoreError::Db(_)));

    let course = Course::new("Databases", None);
    assert!(store.save_courses(&[course]).is_err());

    let task = Task::new("Essay", Uuid::new_v4(), at(2024, 3, 1), Priority::High);
    assert!(store.save_tasks(&[task]).is_err());

    // The session stays usable: loads resolve to defaults, not errors.
    assert_eq!(store.settings(), Settings::default());
    assert!(store.courses().is_empty());
    assert!(store.tasks().is_empty());
}

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn seed_raw(conn: &rusqlite::Connection, key: &str, value: &str) {
    conn.execute(
        "INSERT INTO planner_state (key, value) VALUES (?1, ?2);",
        [key, value],
    )
    .unwrap();
}
