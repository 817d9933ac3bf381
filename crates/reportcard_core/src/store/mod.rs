//! Store layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the narrow student access contract shared by front-ends.
//! - Isolate lookup and ordering details from service orchestration.
//!
//! # Invariants
//! - Store writes go through `Student::set_score` validation.
//! - Unknown IDs are reported as `false`/`None`, never as errors.

pub mod student_store;
