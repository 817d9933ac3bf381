//! Core domain logic for the report card manager.
//! This crate is the single source of truth for score and grade invariants.

pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod store;

pub use logging::{
    default_log_level, init_logging, logging_status, normalize_level, LoggingError,
};
pub use model::student::{
    Grade, Student, StudentId, StudentRecord, StudentValidationError, Subjects, MAX_SCORE,
    MIN_SCORE,
};
pub use persist::{load_students, save_students, PersistError, PersistResult, DEFAULT_DATA_FILE};
pub use service::grade_service::{GradeService, GradeServiceError, StudentReport};
pub use store::student_store::{MemoryStudentStore, StoreError, StoreResult, StudentRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
