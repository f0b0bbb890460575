//! Error types for koyomi-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the koyomi-io crate.
///
/// This enum covers filesystem failures, JSON encoding and decoding
/// problems, discovery pattern errors, and the two conditions that abort a
/// merge outright: nothing to discover, or nothing that loads.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when no search directory holds a document for a year.
    #[error("no calendar file for year {year} in {dirs}")]
    YearNotFound {
        /// The year that was looked up.
        year: i64,
        /// Comma-separated list of the directories searched.
        dirs: String,
    },

    /// Wraps a filesystem read failure.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps a filesystem write failure.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// Path being written.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a file's contents are not a valid calendar document.
    #[error("malformed JSON in {}: {reason}", path.display())]
    MalformedJson {
        /// Path of the offending file.
        path: PathBuf,
        /// Parser message, including line and column.
        reason: String,
    },

    /// Returned when a file parses as JSON but is not a non-empty object.
    #[error("not a calendar document in {}: expected a non-empty JSON object", path.display())]
    NotAnObject {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// Wraps a JSON encoding failure.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serializer failure.
        reason: String,
    },

    /// Returned when a discovery glob pattern cannot be compiled.
    #[error("invalid search pattern '{pattern}': {reason}")]
    Pattern {
        /// The pattern that failed.
        pattern: String,
        /// Description of the failure.
        reason: String,
    },

    /// Returned when no year files exist in any search directory.
    #[error("no calendar_data_YYYY.json files found in {dirs}")]
    NoYearFiles {
        /// Comma-separated list of the directories searched.
        dirs: String,
    },

    /// Returned when every discovered year failed to load.
    #[error("none of the {discovered} discovered year file(s) could be loaded")]
    NoLoadableYears {
        /// Number of years that were discovered.
        discovered: usize,
    },
}
