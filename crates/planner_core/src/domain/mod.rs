//! Pure derivations over in-memory planner entities.
//!
//! # Responsibility
//! - Classify, aggregate, filter, sort, and format tasks for display.
//!
//! # Invariants
//! - No storage access and no ambient clock: every time-sensitive function
//!   takes `now` as an explicit parameter.
//! - Total over valid inputs; nothing in this module returns an error.

pub mod filter;
pub mod stats;
pub mod status;
pub mod timefmt;

use crate::model::course::{Course, CourseId};

/// Placeholder shown when a task references a deleted course.
pub const UNKNOWN_COURSE: &str = "Unknown Course";

/// Resolves a course id to its display name.
///
/// A dangling reference degrades to [`UNKNOWN_COURSE`] instead of failing;
/// tasks outlive the courses they point at.
pub fn course_display_name(courses: &[Course], id: CourseId) -> String {
    courses
        .iter()
        .find(|course| course.id == id)
        .map(|course| course.name.clone())
        .unwrap_or_else(|| UNKNOWN_COURSE.to_string())
}
