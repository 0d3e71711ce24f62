//! Domain model for the academic planner.
//!
//! # Responsibility
//! - Define the canonical entity shapes persisted by the store.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID generated at creation.
//! - A task keeps its `course_id` even after the course is deleted; lookups
//!   must resolve a dangling reference to a placeholder, never an error.

pub mod course;
pub mod settings;
pub mod task;
