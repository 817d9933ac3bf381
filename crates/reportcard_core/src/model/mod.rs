//! Domain model for student report cards.
//!
//! # Responsibility
//! - Define the student record and grade derivation used by every layer.
//!
//! # Invariants
//! - Scores held by a `Student` are always within the accepted range.

pub mod student;
