//! Student store contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide the narrow add/update/delete/find/list surface front-ends use.
//! - Keep lookup and ordering details inside the store boundary.
//!
//! # Invariants
//! - Student IDs are unique within a store.
//! - Insertion order is preserved; deletes never reorder survivors.
//! - A failed write leaves the store exactly as it was.

use crate::model::student::{Student, StudentId, StudentValidationError, Subjects};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for store write operations.
///
/// Unknown IDs are not errors; lookups and mutations report them through
/// `Option`/`bool` return values instead.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    Validation(StudentValidationError),
    DuplicateId(StudentId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(_) => write!(f, "invalid student data"),
            Self::DuplicateId(id) => write!(f, "student id already exists: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<StudentValidationError> for StoreError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for student records.
pub trait StudentRepository {
    /// Creates a student and applies every subject score.
    fn add_student(&mut self, name: &str, id: &str, subjects: &Subjects)
        -> StoreResult<StudentId>;
    /// Sets one score. Returns `Ok(false)` when `id` is unknown.
    fn update_score(&mut self, id: &str, subject: &str, score: f64) -> StoreResult<bool>;
    /// Removes the student. Returns `false` when `id` is unknown.
    fn delete_student(&mut self, id: &str) -> bool;
    fn find_student(&self, id: &str) -> Option<&Student>;
    fn list_students(&self) -> &[Student];
    /// Swaps in a full snapshot, e.g. one read back from disk.
    fn replace_all(&mut self, students: Vec<Student>) -> StoreResult<()>;
}

/// In-memory student store backed by an insertion-ordered vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStudentStore {
    students: Vec<Student>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|student| student.id() == id)
    }
}

impl StudentRepository for MemoryStudentStore {
    fn add_student(
        &mut self,
        name: &str,
        id: &str,
        subjects: &Subjects,
    ) -> StoreResult<StudentId> {
        if self.position(id).is_some() {
            return Err(StoreError::DuplicateId(id.to_string()));
        }

        let mut student = Student::new(id, name);
        for (subject, score) in subjects {
            student.set_score(subject.as_str(), *score)?;
        }
        self.students.push(student);

        Ok(id.to_string())
    }

    fn update_score(&mut self, id: &str, subject: &str, score: f64) -> StoreResult<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        self.students[index].set_score(subject, score)?;
        Ok(true)
    }

    fn delete_student(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.students.remove(index);
                true
            }
            None => false,
        }
    }

    fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.id() == id)
    }

    fn list_students(&self) -> &[Student] {
        &self.students
    }

    fn replace_all(&mut self, students: Vec<Student>) -> StoreResult<()> {
        let mut seen = HashSet::with_capacity(students.len());
        for student in &students {
            student.validate()?;
            if !seen.insert(student.id()) {
                return Err(StoreError::DuplicateId(student.id().to_string()));
            }
        }
        self.students = students;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStudentStore, StoreError, StudentRepository};
    use crate::model::student::{Student, Subjects};

    fn subjects(pairs: &[(&str, f64)]) -> Subjects {
        pairs
            .iter()
            .map(|(subject, score)| (subject.to_string(), *score))
            .collect()
    }

    #[test]
    fn add_rejects_invalid_score_without_inserting() {
        let mut store = MemoryStudentStore::new();
        let err = store
            .add_student("Ada", "s-1", &subjects(&[("Math", 90.0), ("Sci", 101.0)]))
            .unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn delete_preserves_order_of_remaining_students() {
        let mut store = MemoryStudentStore::new();
        for id in ["a", "b", "c"] {
            store.add_student("name", id, &Subjects::new()).unwrap();
        }

        assert!(store.delete_student("b"));
        let ids: Vec<&str> = store.list_students().iter().map(Student::id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn replace_all_rejects_duplicates_and_keeps_current_state() {
        let mut store = MemoryStudentStore::new();
        store.add_student("Ada", "s-1", &Subjects::new()).unwrap();
        let before = store.clone();

        let err = store
            .replace_all(vec![Student::new("x", "One"), Student::new("x", "Two")])
            .unwrap_err();

        assert_eq!(err, StoreError::DuplicateId("x".to_string()));
        assert_eq!(store, before);
    }
}
