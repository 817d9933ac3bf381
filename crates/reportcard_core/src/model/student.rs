//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical student record persisted to the grades file.
//! - Derive average score and letter grade from subject scores.
//!
//! # Invariants
//! - Every stored score is finite and within `[MIN_SCORE, MAX_SCORE]`.
//! - Deserialization re-validates scores; invalid records never load.
//! - Subjects keep the order in which they were first recorded.
//! - `id` uniqueness is enforced by the containing store, not here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest accepted subject score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted subject score.
pub const MAX_SCORE: f64 = 100.0;

/// Caller-provided student identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StudentId = String;

/// Subject name to score mapping in first-insertion order.
///
/// Equality ignores order; iteration and serialization follow it.
pub type Subjects = IndexMap<String, f64>;

/// Validation error for student data.
#[derive(Debug, Clone, PartialEq)]
pub enum StudentValidationError {
    /// Score is non-finite or outside `[MIN_SCORE, MAX_SCORE]`.
    ScoreOutOfRange { subject: String, score: f64 },
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScoreOutOfRange { subject, score } => write!(
                f,
                "score {score} for subject `{subject}` must be between {MIN_SCORE} and {MAX_SCORE}"
            ),
        }
    }
}

impl Error for StudentValidationError {}

/// Letter classification derived from a student's average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    Fail,
}

impl Grade {
    /// Classifies an average score.
    ///
    /// `>= 90` is `A`, `>= 75` is `B`, `>= 60` is `C`, anything lower fails.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Self::A
        } else if average >= 75.0 {
            Self::B
        } else if average >= 60.0 {
            Self::C
        } else {
            Self::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::Fail => "Fail",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One student with per-subject scores.
///
/// Serialized as `{ "id", "name", "subjects": { subject: score } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StudentRecord")]
pub struct Student {
    id: StudentId,
    name: String,
    subjects: Subjects,
}

/// Unvalidated wire shape of a student.
///
/// Readers that need to tell malformed JSON apart from out-of-range scores
/// decode this first and convert with `Student::try_from`.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    #[serde(default)]
    pub subjects: Subjects,
}

impl TryFrom<StudentRecord> for Student {
    type Error = StudentValidationError;

    fn try_from(value: StudentRecord) -> Result<Self, Self::Error> {
        let student = Self {
            id: value.id,
            name: value.name,
            subjects: value.subjects,
        };
        student.validate()?;
        Ok(student)
    }
}

impl Student {
    /// Creates a student with no subjects.
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subjects: Subjects::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subjects(&self) -> &Subjects {
        &self.subjects
    }

    /// Returns the score recorded for `subject`, if any.
    pub fn score(&self, subject: &str) -> Option<f64> {
        self.subjects.get(subject).copied()
    }

    /// Inserts or overwrites the score for `subject`.
    ///
    /// # Errors
    /// - Returns `ScoreOutOfRange` when `score` is non-finite or outside
    ///   `[MIN_SCORE, MAX_SCORE]`. The student is left unchanged.
    pub fn set_score(
        &mut self,
        subject: impl Into<String>,
        score: f64,
    ) -> Result<(), StudentValidationError> {
        let subject = subject.into();
        check_score(&subject, score)?;
        self.subjects.insert(subject, score);
        Ok(())
    }

    /// Mean of all subject scores, or `0.0` when there are none.
    pub fn average(&self) -> f64 {
        if self.subjects.is_empty() {
            return 0.0;
        }
        self.subjects.values().sum::<f64>() / self.subjects.len() as f64
    }

    pub fn grade(&self) -> Grade {
        Grade::from_average(self.average())
    }

    /// Checks every stored score against the accepted range.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        self.subjects
            .iter()
            .try_for_each(|(subject, score)| check_score(subject, *score))
    }
}

fn check_score(subject: &str, score: f64) -> Result<(), StudentValidationError> {
    // NaN fails both comparisons, so it is rejected here too.
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Ok(());
    }
    Err(StudentValidationError::ScoreOutOfRange {
        subject: subject.to_string(),
        score,
    })
}
