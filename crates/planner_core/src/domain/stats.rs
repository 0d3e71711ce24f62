//! Statistics aggregation over task sequences.

use crate::domain::status::status_of;
use crate::model::task::{Task, TaskStatus};
use chrono::NaiveDateTime;

/// Aggregate counters for a task sequence.
///
/// `pending` counts everything not completed (overdue, due today and
/// upcoming alike), so it is a superset of `overdue`, not disjoint from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStatistics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// Computes counters over an arbitrary task slice.
///
/// Carries no collection-identity assumptions: callers pass the full task
/// set for global stats or any filtered subset for per-course stats.
pub fn calculate_statistics(tasks: &[Task], now: NaiveDateTime) -> TaskStatistics {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    let overdue = tasks
        .iter()
        .filter(|task| status_of(task, now) == TaskStatus::Overdue)
        .count();

    TaskStatistics {
        total,
        completed,
        pending: total - completed,
        overdue,
    }
}
