//! Planner use-case service.
//!
//! # Responsibility
//! - Provide the entity mutation entry points consumed by the UI layer.
//! - Express every mutation as load collection → mutate → save collection.
//!
//! # Invariants
//! - Invalid input (blank name/title) is rejected before any storage write.
//! - Deleting a course never touches its tasks; they keep the dangling
//!   reference and display logic degrades to "Unknown Course".
//! - Service APIs never bypass the store contract; in-memory state stays
//!   consistent even when a save fails.

use crate::domain::stats::{calculate_statistics, TaskStatistics};
use crate::model::course::{Course, CourseId, CourseValidationError};
use crate::model::settings::{Settings, Theme};
use crate::model::task::{Priority, Task, TaskId, TaskValidationError};
use crate::repo::planner_store::{PlannerStore, StoreError};
use chrono::NaiveDateTime;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PlannerResult<T> = Result<T, PlannerError>;

/// Use-case level error for planner mutations.
#[derive(Debug)]
pub enum PlannerError {
    CourseValidation(CourseValidationError),
    TaskValidation(TaskValidationError),
    Store(StoreError),
    CourseNotFound(CourseId),
    TaskNotFound(TaskId),
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CourseValidation(err) => write!(f, "{err}"),
            Self::TaskValidation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::CourseNotFound(id) => write!(f, "course not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for PlannerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CourseValidation(err) => Some(err),
            Self::TaskValidation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::CourseNotFound(_) => None,
            Self::TaskNotFound(_) => None,
        }
    }
}

impl From<CourseValidationError> for PlannerError {
    fn from(value: CourseValidationError) -> Self {
        Self::CourseValidation(value)
    }
}

impl From<TaskValidationError> for PlannerError {
    fn from(value: TaskValidationError) -> Self {
        Self::TaskValidation(value)
    }
}

impl From<StoreError> for PlannerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Request model for adding a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourseRequest {
    pub name: String,
    pub code: Option<String>,
    pub instructor: Option<String>,
    /// Display color; `None` takes the default.
    pub color: Option<String>,
}

/// Request model for adding a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub course_id: CourseId,
    pub due_date: NaiveDateTime,
    pub priority: Priority,
}

/// Use-case service wrapper over a [`PlannerStore`] implementation.
pub struct PlannerService<S: PlannerStore> {
    store: S,
}

impl<S: PlannerStore> PlannerService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current task collection, insertion order.
    pub fn tasks(&self) -> Vec<Task> {
        self.store.tasks()
    }

    /// Current course collection, insertion order.
    pub fn courses(&self) -> Vec<Course> {
        self.store.courses()
    }

    /// Current settings; defaults on blank slate.
    pub fn settings(&self) -> Settings {
        self.store.settings()
    }

    /// Adds a course and returns its generated ID.
    ///
    /// # Contract
    /// - Rejects a blank name before any storage write.
    pub fn add_course(&self, request: NewCourseRequest) -> PlannerResult<CourseId> {
        let mut course = Course::new(request.name, request.color);
        course.code = request.code;
        course.instructor = request.instructor;
        course.validate()?;

        let mut courses = self.store.courses();
        let id = course.id;
        courses.push(course);
        self.store.save_courses(&courses)?;

        info!("event=course_added module=service status=ok course_id={id}");
        Ok(id)
    }

    /// Deletes a course by ID.
    ///
    /// Tasks referencing the course are left untouched; their `course_id`
    /// becomes a dangling reference by design of the data model.
    pub fn delete_course(&self, id: CourseId) -> PlannerResult<()> {
        let mut courses = self.store.courses();
        let before = courses.len();
        courses.retain(|course| course.id != id);
        if courses.len() == before {
            return Err(PlannerError::CourseNotFound(id));
        }
        self.store.save_courses(&courses)?;

        info!("event=course_deleted module=service status=ok course_id={id}");
        Ok(())
    }

    /// Adds a task and returns its generated ID.
    ///
    /// # Contract
    /// - Rejects a blank title before any storage write.
    /// - Does not verify the course reference; tasks may point at courses
    ///   that no longer exist.
    pub fn add_task(&self, request: NewTaskRequest) -> PlannerResult<TaskId> {
        let mut task = Task::new(
            request.title,
            request.course_id,
            request.due_date,
            request.priority,
        );
        task.description = request.description;
        task.validate()?;

        let mut tasks = self.store.tasks();
        let id = task.id;
        tasks.push(task);
        self.store.save_tasks(&tasks)?;

        info!("event=task_added module=service status=ok task_id={id}");
        Ok(id)
    }

    /// Flips a task's completion state and returns the new value.
    pub fn toggle_task(&self, id: TaskId) -> PlannerResult<bool> {
        let mut tasks = self.store.tasks();
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(PlannerError::TaskNotFound(id))?;
        let completed = task.toggle_completed();
        self.store.save_tasks(&tasks)?;

        info!("event=task_toggled module=service status=ok task_id={id} completed={completed}");
        Ok(completed)
    }

    /// Deletes a task by ID.
    pub fn delete_task(&self, id: TaskId) -> PlannerResult<()> {
        let mut tasks = self.store.tasks();
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Err(PlannerError::TaskNotFound(id));
        }
        self.store.save_tasks(&tasks)?;

        info!("event=task_deleted module=service status=ok task_id={id}");
        Ok(())
    }

    /// Persists a theme preference change.
    pub fn set_theme(&self, theme: Theme) -> PlannerResult<()> {
        let mut settings = self.store.settings();
        settings.theme = theme;
        self.store.save_settings(&settings)?;
        Ok(())
    }

    /// Aggregate counters over the full task set.
    pub fn statistics(&self, now: NaiveDateTime) -> TaskStatistics {
        calculate_statistics(&self.store.tasks(), now)
    }

    /// Aggregate counters over the tasks of one course.
    ///
    /// Works for dangling course IDs too: the subset is simply empty.
    pub fn course_statistics(&self, course_id: CourseId, now: NaiveDateTime) -> TaskStatistics {
        let tasks: Vec<Task> = self
            .store
            .tasks()
            .into_iter()
            .filter(|task| task.course_id == course_id)
            .collect();
        calculate_statistics(&tasks, now)
    }
}
