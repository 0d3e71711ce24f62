//! Task (deadline) domain model.
//!
//! # Responsibility
//! - Define the canonical deadline record and its priority scale.
//! - Provide lifecycle helpers for completion toggling.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `due_date` is always a valid point in time once constructed; derivation
//!   code may rely on it without re-validating.
//! - `course_id` is a weak reference: the course may have been deleted.

use crate::model::course::CourseId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// User-assigned urgency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Derived classification of a task relative to a reference instant.
///
/// Never stored; always recomputed from `(completed, due_date, now)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Completed wins over any date comparison.
    Completed,
    /// Due strictly before today.
    Overdue,
    /// Due within today's calendar day.
    DueToday,
    /// Due strictly after today.
    Upcoming,
}

/// A deadline/assignment entity weakly linked to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for toggling and deletion.
    pub id: TaskId,
    /// Required display title.
    pub title: String,
    /// Optional free-text details.
    pub description: Option<String>,
    /// Weak reference to a [`Course`](crate::model::course::Course).
    pub course_id: CourseId,
    /// Deadline instant; compared at day granularity when classifying.
    pub due_date: NaiveDateTime,
    pub priority: Priority,
    /// Starts `false`; toggled by user action, never automatically.
    pub completed: bool,
}

impl Task {
    /// Creates a new task with a generated stable ID.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - `description` is initialized to `None`.
    pub fn new(
        title: impl Into<String>,
        course_id: CourseId,
        due_date: NaiveDateTime,
        priority: Priority,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, course_id, due_date, priority)
    }

    /// Creates a task with a caller-provided stable ID.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        course_id: CourseId,
        due_date: NaiveDateTime,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            course_id,
            due_date,
            priority,
            completed: false,
        }
    }

    /// Checks invariants that must hold before persistence.
    ///
    /// # Errors
    /// - [`TaskValidationError::EmptyTitle`] when `title` is blank.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Flips completion state and returns the new value.
    pub fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

/// Validation failure raised before a task reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}
