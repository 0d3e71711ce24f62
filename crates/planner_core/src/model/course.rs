//! Course domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another course.
//! - Deleting a course never cascades to its tasks; the tasks keep a
//!   dangling `course_id` and display logic degrades to a placeholder.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a course.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CourseId = Uuid;

/// Display color assigned when the caller does not pick one.
pub const DEFAULT_COURSE_COLOR: &str = "#6366f1";

/// A named subject/class that tasks can be associated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Stable ID used by tasks as a weak reference.
    pub id: CourseId,
    /// Required display name.
    pub name: String,
    /// Optional short catalog code, e.g. "CS 341".
    pub code: Option<String>,
    /// Optional instructor name.
    pub instructor: Option<String>,
    /// Display color tag; always set, defaulted at construction.
    pub color: String,
}

impl Course {
    /// Creates a new course with a generated stable ID.
    ///
    /// `color = None` falls back to [`DEFAULT_COURSE_COLOR`].
    pub fn new(name: impl Into<String>, color: Option<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, color)
    }

    /// Creates a course with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: CourseId, name: impl Into<String>, color: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: None,
            instructor: None,
            color: color.unwrap_or_else(|| DEFAULT_COURSE_COLOR.to_string()),
        }
    }

    /// Checks invariants that must hold before persistence.
    ///
    /// # Errors
    /// - [`CourseValidationError::EmptyName`] when `name` is blank.
    pub fn validate(&self) -> Result<(), CourseValidationError> {
        if self.name.trim().is_empty() {
            return Err(CourseValidationError::EmptyName);
        }
        Ok(())
    }

    /// Label used by selection lists: `"Name (CODE)"`, or just the name
    /// when no code is recorded.
    pub fn display_label(&self) -> String {
        match self.code.as_deref() {
            Some(code) if !code.is_empty() => format!("{} ({})", self.name, code),
            _ => self.name.clone(),
        }
    }
}

/// Validation failure raised before a course reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseValidationError {
    EmptyName,
}

impl Display for CourseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "course name must not be empty"),
        }
    }
}

impl Error for CourseValidationError {}
