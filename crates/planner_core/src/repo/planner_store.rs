//! Planner store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide durable load/replace APIs for the three state records:
//!   `courses`, `tasks`, `settings`.
//! - Keep SQL and JSON encoding inside the core persistence boundary.
//!
//! # Invariants
//! - Load paths degrade to defaults instead of surfacing read errors; a
//!   blank-slate or corrupted session must not crash the caller.
//! - Save paths replace the record's entire value in one statement, so a
//!   read immediately after a successful write observes that write.

use crate::db::DbError;
use crate::model::course::Course;
use crate::model::settings::Settings;
use crate::model::task::Task;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const COURSES_KEY: &str = "courses";
const TASKS_KEY: &str = "tasks";
const SETTINGS_KEY: &str = "settings";

pub type StoreResult<T> = Result<T, StoreError>;

/// Write-side error for planner state persistence.
///
/// Read failures are never surfaced through this type; the load APIs
/// resolve them to defaults by contract.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode planner state: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Durable storage contract for planner state.
///
/// There is exactly one logical writer per record at any time, so every
/// mutation is expressed as load → mutate in memory → save whole record.
pub trait PlannerStore {
    /// Loads all tasks in insertion order; empty when absent or unreadable.
    fn tasks(&self) -> Vec<Task>;
    /// Loads all courses in insertion order; empty when absent or unreadable.
    fn courses(&self) -> Vec<Course>;
    /// Loads settings; defaults (light theme) when absent or unreadable.
    fn settings(&self) -> Settings;

    /// Replaces the persisted task collection.
    fn save_tasks(&self, tasks: &[Task]) -> StoreResult<()>;
    /// Replaces the persisted course collection.
    fn save_courses(&self, courses: &[Course]) -> StoreResult<()>;
    /// Replaces the persisted settings record.
    fn save_settings(&self, settings: &Settings) -> StoreResult<()>;
}

/// SQLite-backed planner store.
///
/// Each record lives in one row of `planner_state`, keyed by name, with the
/// value as a JSON document. A save overwrites the row's value wholesale.
pub struct SqliteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn load_slot<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw: Option<String> = match self
            .conn
            .query_row(
                "SELECT value FROM planner_state WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()
        {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=state_load module=repo status=error key={key} error_code=db_read_failed error={err}"
                );
                return None;
            }
        };

        let raw = raw?;
        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    "event=state_load module=repo status=error key={key} error_code=corrupt_value error={err}"
                );
                None
            }
        }
    }

    fn save_slot<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let encoded = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO planner_state (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, encoded],
        )?;
        Ok(())
    }
}

impl PlannerStore for SqliteStore<'_> {
    fn tasks(&self) -> Vec<Task> {
        self.load_slot(TASKS_KEY).unwrap_or_default()
    }

    fn courses(&self) -> Vec<Course> {
        self.load_slot(COURSES_KEY).unwrap_or_default()
    }

    fn settings(&self) -> Settings {
        self.load_slot(SETTINGS_KEY).unwrap_or_default()
    }

    fn save_tasks(&self, tasks: &[Task]) -> StoreResult<()> {
        self.save_slot(TASKS_KEY, &tasks)
    }

    fn save_courses(&self, courses: &[Course]) -> StoreResult<()> {
        self.save_slot(COURSES_KEY, &courses)
    }

    fn save_settings(&self, settings: &Settings) -> StoreResult<()> {
        self.save_slot(SETTINGS_KEY, settings)
    }
}
