//! JSON file read/write for student snapshots.
//!
//! # Invariants
//! - Output is a JSON array of `{id, name, subjects}` objects.
//! - Indentation is cosmetic; readers accept any JSON whitespace.

use super::{PersistError, PersistResult};
use crate::model::student::{Student, StudentRecord};
use log::{error, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// File name used when callers do not pick one.
pub const DEFAULT_DATA_FILE: &str = "grades.json";

const INDENT: &[u8] = b"    ";

/// Writes all students to `path`, replacing any existing file.
///
/// # Side effects
/// - Creates missing parent directories.
/// - Emits `store_save` logging events with duration and status.
pub fn save_students(path: impl AsRef<Path>, students: &[Student]) -> PersistResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    match write_json(path, students) {
        Ok(()) => {
            info!(
                "event=store_save module=persist status=ok count={} duration_ms={}",
                students.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=store_save module=persist status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Reads all students from `path`.
///
/// Returns an empty list when the file does not exist.
///
/// # Errors
/// - `Json` when the file is not an array of `{id, name, subjects}`.
/// - `InvalidData` when a record holds an out-of-range score.
///
/// # Side effects
/// - Emits `store_load` logging events with duration and status.
pub fn load_students(path: impl AsRef<Path>) -> PersistResult<Vec<Student>> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("event=store_load module=persist status=missing count=0");
            return Ok(Vec::new());
        }
        Err(err) => {
            error!(
                "event=store_load module=persist status=error error_code=read_failed error={}",
                err
            );
            return Err(err.into());
        }
    };

    match decode_students(&bytes) {
        Ok(students) => {
            info!(
                "event=store_load module=persist status=ok count={} duration_ms={}",
                students.len(),
                started_at.elapsed().as_millis()
            );
            Ok(students)
        }
        Err(err) => {
            error!(
                "event=store_load module=persist status=error error_code=decode_failed error={}",
                err
            );
            Err(err)
        }
    }
}

fn decode_students(bytes: &[u8]) -> PersistResult<Vec<Student>> {
    let records: Vec<StudentRecord> = serde_json::from_slice(bytes)?;
    records
        .into_iter()
        .map(|record| {
            let id = record.id.clone();
            Student::try_from(record)
                .map_err(|err| PersistError::InvalidData(format!("student `{id}`: {err}")))
        })
        .collect()
}

fn write_json(path: &Path, students: &[Student]) -> PersistResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    students.serialize(&mut serializer)?;
    buffer.push(b'\n');

    std::fs::write(path, buffer)?;
    Ok(())
}
