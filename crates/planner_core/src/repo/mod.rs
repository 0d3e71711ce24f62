//! Storage layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the planner's durable key-value storage contract.
//! - Isolate SQLite and JSON encoding details from service orchestration.
//!
//! # Invariants
//! - Reads never fail the caller: missing or unparseable persisted state
//!   resolves to an empty collection or default settings.
//! - Writes replace a whole collection at once; partial updates are not a
//!   storage primitive.

pub mod planner_store;
