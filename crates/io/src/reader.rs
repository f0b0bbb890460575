//! Loading per-year calendar documents from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use koyomi_calendar::YearDocument;
use serde_json::Value;
use tracing::debug;

use crate::discover::year_file_name;
use crate::error::IoError;

/// Reads a year file as raw JSON, keeping every field and the key order.
///
/// The merge step passes this value through untouched, so documents written
/// by other producers (extra `events`, extra vacation keys, no
/// `semester_mapping`) survive as they are.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Read`] for other read failures, [`IoError::MalformedJson`] if
/// the contents are not JSON, or [`IoError::NotAnObject`] if they are not a
/// non-empty JSON object.
pub fn read_year_json(path: &Path) -> Result<Value, IoError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IoError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|e| IoError::MalformedJson {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    match value.as_object() {
        Some(map) if !map.is_empty() => Ok(value),
        _ => Err(IoError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Reads and decodes a year document in the shape `generate` writes.
///
/// # Errors
///
/// Any error from [`read_year_json`], or [`IoError::MalformedJson`] if the
/// object does not have the [`YearDocument`] shape.
pub fn read_year_document(path: &Path) -> Result<YearDocument, IoError> {
    let value = read_year_json(path)?;
    serde_json::from_value(value).map_err(|e| IoError::MalformedJson {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Loads the raw document for `year` from the first directory in `dirs`
/// that holds `calendar_data_<year>.json`.
///
/// Later directories are only consulted when the file is absent from earlier
/// ones; a malformed file in an earlier directory is an error, not a reason
/// to fall back.
///
/// # Errors
///
/// Returns [`IoError::YearNotFound`] if no directory holds the file, or any
/// error from [`read_year_json`].
pub fn load_year(year: i64, dirs: &[PathBuf]) -> Result<Value, IoError> {
    let name = year_file_name(year);
    for dir in dirs {
        let path = dir.join(&name);
        if path.is_file() {
            debug!(year, path = %path.display(), "loading year document");
            return read_year_json(&path);
        }
    }
    Err(IoError::YearNotFound {
        year,
        dirs: display_dirs(dirs),
    })
}

/// Joins directory paths for error messages.
pub(crate) fn display_dirs(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
