//! Report card use-case service.
//!
//! # Responsibility
//! - Provide the add/update/delete/report/find/save/load entry points that
//!   every front-end calls.
//! - Delegate record keeping to a `StudentRepository` and disk access to
//!   `persist`.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - A failed load leaves the in-memory store untouched.
//! - Log events carry IDs and counts only; names and scores stay out of logs.

use crate::model::student::{Grade, Student, StudentId, Subjects};
use crate::persist::{load_students, save_students, PersistError};
use crate::store::student_store::{StoreError, StoreResult, StudentRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Service error for report card use-cases.
///
/// Display and `source()` both pass through to the wrapped error, so an
/// error chain never repeats the same message.
#[derive(Debug)]
pub enum GradeServiceError {
    /// Rejected write (duplicate ID or out-of-range score).
    Store(StoreError),
    /// Data file could not be read, parsed or written.
    Persist(PersistError),
}

impl Display for GradeServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GradeServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => err.source(),
            Self::Persist(err) => err.source(),
        }
    }
}

impl From<StoreError> for GradeServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<PersistError> for GradeServiceError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// Printable report card for one student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentReport {
    pub id: StudentId,
    pub name: String,
    pub subjects: Subjects,
    pub average: f64,
    pub grade: Grade,
}

impl StudentReport {
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: student.id().to_string(),
            name: student.name().to_string(),
            subjects: student.subjects().clone(),
            average: student.average(),
            grade: student.grade(),
        }
    }
}

impl Display for StudentReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Report for {} (ID: {})", self.name, self.id)?;
        for (subject, score) in &self.subjects {
            writeln!(f, "{subject}: {score:?}")?;
        }
        writeln!(f, "Average: {:.2}", self.average)?;
        writeln!(f, "Grade: {}", self.grade)
    }
}

/// Use-case facade over a student repository.
pub struct GradeService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> GradeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Adds a student with initial subject scores.
    ///
    /// # Contract
    /// - Duplicate `id` fails with `StoreError::DuplicateId`.
    /// - Any out-of-range score fails and nothing is inserted.
    /// - Returns the stored student ID.
    pub fn add_student(
        &mut self,
        name: &str,
        id: &str,
        subjects: &Subjects,
    ) -> StoreResult<StudentId> {
        match self.repo.add_student(name, id, subjects) {
            Ok(id) => {
                info!(
                    "event=student_add module=service status=ok id={} subjects={}",
                    id,
                    subjects.len()
                );
                Ok(id)
            }
            Err(err) => {
                warn!(
                    "event=student_add module=service status=rejected id={} error={}",
                    id, err
                );
                Err(err)
            }
        }
    }

    /// Sets one subject score.
    ///
    /// Returns `Ok(false)` when the student does not exist.
    pub fn update_score(&mut self, id: &str, subject: &str, score: f64) -> StoreResult<bool> {
        let result = self.repo.update_score(id, subject, score);
        match &result {
            Ok(true) => info!("event=score_update module=service status=ok id={id}"),
            Ok(false) => info!("event=score_update module=service status=not_found id={id}"),
            Err(err) => warn!(
                "event=score_update module=service status=rejected id={} error={}",
                id, err
            ),
        }
        result
    }

    /// Deletes a student. Returns `false` when the student does not exist.
    pub fn delete_student(&mut self, id: &str) -> bool {
        let deleted = self.repo.delete_student(id);
        let status = if deleted { "ok" } else { "not_found" };
        info!("event=student_delete module=service status={status} id={id}");
        deleted
    }

    /// Builds a report card, or `None` when the student does not exist.
    pub fn report(&self, id: &str) -> Option<StudentReport> {
        self.repo.find_student(id).map(StudentReport::from_student)
    }

    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.repo.find_student(id)
    }

    pub fn list_students(&self) -> &[Student] {
        self.repo.list_students()
    }

    /// Writes the whole store to `path`.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), GradeServiceError> {
        save_students(path, self.repo.list_students())?;
        Ok(())
    }

    /// Replaces the store with the contents of `path`.
    ///
    /// # Contract
    /// - A missing file empties the store.
    /// - Files with duplicate IDs fail with `PersistError::InvalidData`.
    /// - On failure the current store is kept as-is.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, GradeServiceError> {
        let students = load_students(path)?;
        let count = students.len();
        self.repo
            .replace_all(students)
            .map_err(|err| PersistError::InvalidData(err.to_string()))?;
        Ok(count)
    }
}
