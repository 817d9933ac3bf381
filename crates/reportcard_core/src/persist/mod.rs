//! Flat-file persistence for the student store.
//!
//! # Responsibility
//! - Read and write the whole store as one JSON array.
//! - Translate I/O and parse failures into `PersistError`.
//!
//! # Invariants
//! - A missing data file loads as an empty store, never an error.
//! - Records with out-of-range scores fail to load as `InvalidData`.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;

pub use json_file::{load_students, save_students, DEFAULT_DATA_FILE};

pub type PersistResult<T> = Result<T, PersistError>;

#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidData(String),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(_) => write!(f, "failed to access data file"),
            Self::Json(_) => write!(f, "malformed data file"),
            Self::InvalidData(message) => write!(f, "invalid persisted student data: {message}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
