//! Core data and derivation layer for the academic planner.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod domain;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use domain::filter::{filter_tasks, sort_tasks_by_date, SortDirection, TaskFilter};
pub use domain::stats::{calculate_statistics, TaskStatistics};
pub use domain::status::{status_of, task_status};
pub use domain::timefmt::{format_date, format_relative_time};
pub use domain::{course_display_name, UNKNOWN_COURSE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::{Course, CourseId, CourseValidationError, DEFAULT_COURSE_COLOR};
pub use model::settings::{Settings, Theme};
pub use model::task::{Priority, Task, TaskId, TaskStatus, TaskValidationError};
pub use repo::planner_store::{PlannerStore, SqliteStore, StoreError, StoreResult};
pub use service::planner_service::{
    NewCourseRequest, NewTaskRequest, PlannerError, PlannerResult, PlannerService,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
