//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store reads, domain derivations and store writes into
//!   use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod planner_service;
