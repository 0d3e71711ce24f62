//! Task status classification.
//!
//! # Invariants
//! - `completed == true` always classifies as `Completed`, regardless of date.
//! - Date comparison happens at day granularity: both instants are reduced
//!   to their calendar day before comparing.

use crate::model::task::{Task, TaskStatus};
use chrono::NaiveDateTime;
use std::cmp::Ordering;

/// Classifies a task by completion flag and due date relative to `now`.
///
/// Pure function of its arguments; `now` is explicit so callers and tests
/// control the reference instant.
pub fn task_status(completed: bool, due_date: NaiveDateTime, now: NaiveDateTime) -> TaskStatus {
    if completed {
        return TaskStatus::Completed;
    }

    match due_date.date().cmp(&now.date()) {
        Ordering::Less => TaskStatus::Overdue,
        Ordering::Equal => TaskStatus::DueToday,
        Ordering::Greater => TaskStatus::Upcoming,
    }
}

/// Convenience wrapper classifying a whole [`Task`] record.
pub fn status_of(task: &Task, now: NaiveDateTime) -> TaskStatus {
    task_status(task.completed, task.due_date, now)
}
