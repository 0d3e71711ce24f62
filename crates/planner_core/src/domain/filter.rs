//! Task filtering and sorting.
//!
//! # Responsibility
//! - Evaluate conjunctive filter specifications over task sequences.
//! - Order tasks by due date for display.
//!
//! # Invariants
//! - Filtering preserves the input's relative order and never invents tasks.
//! - An unset criterion matches everything; `TaskFilter::default()` is the
//!   identity filter.
//! - Sorting is stable: equal due dates keep insertion order.

use crate::domain::status::status_of;
use crate::model::course::CourseId;
use crate::model::task::{Priority, Task, TaskStatus};
use chrono::NaiveDateTime;

/// Conjunctive query over search text, priority, course and status.
///
/// `None` is the "all" sentinel for the optional criteria; an empty
/// `search` string matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title and description.
    pub search: String,
    pub priority: Option<Priority>,
    pub course: Option<CourseId>,
    /// Matches the derived classification, so it needs `now` at evaluation.
    pub status: Option<TaskStatus>,
}

/// Sort direction for [`sort_tasks_by_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Returns the subsequence of `tasks` satisfying every supplied criterion.
///
/// Criteria are independent and combined with logical AND. The result is
/// always a subsequence of the input: same tasks, same relative order.
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter, now: NaiveDateTime) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| matches_search(task, &filter.search))
        .filter(|task| filter.priority.map_or(true, |p| task.priority == p))
        .filter(|task| filter.course.map_or(true, |c| task.course_id == c))
        .filter(|task| filter.status.map_or(true, |s| status_of(task, now) == s))
        .cloned()
        .collect()
}

/// Sorts tasks by due date, keeping insertion order for equal dates.
///
/// No secondary sort key is defined; stability is the only tie-break.
pub fn sort_tasks_by_date(tasks: &[Task], direction: SortDirection) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by_key(|task| task.due_date),
        SortDirection::Descending => {
            sorted.sort_by(|a, b| b.due_date.cmp(&a.due_date));
        }
    }
    sorted
}

fn matches_search(task: &Task, search: &str) -> bool {
    // Only the empty string is the match-all sentinel; whitespace is part
    // of the substring being searched for.
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();

    if task.title.to_lowercase().contains(&needle) {
        return true;
    }

    task.description
        .as_deref()
        .is_some_and(|description| description.to_lowercase().contains(&needle))
}
