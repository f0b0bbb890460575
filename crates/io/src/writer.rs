//! Pretty JSON output.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::IoError;

/// Serializes `value` as JSON with two-space indentation.
///
/// Non-ASCII text is written literally, not as `\u` escapes. No trailing
/// newline is appended.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] if the value cannot be encoded.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String, IoError> {
    serde_json::to_string_pretty(value).map_err(|e| IoError::Serialization {
        reason: e.to_string(),
    })
}

/// Writes `value` as pretty JSON to `path`, replacing any existing file.
///
/// Missing parent directories are created. The write is not atomic.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] if encoding fails, or
/// [`IoError::Write`] if the directory or file cannot be written.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), IoError> {
    let json = to_json_string(value)?;
    let write_err = |e: std::io::Error| IoError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, json.as_bytes()).map_err(write_err)?;
    debug!(path = %path.display(), bytes = json.len(), "wrote JSON");
    Ok(())
}
