//! Error types for the koyomi-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the koyomi-calendar crate.
///
/// This enum covers invalid dates, inverted ranges, and inconsistencies
/// inside a calendar table (duplicate or unknown semester names, empty
/// vacation entries).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year/month/day triple is not a valid Gregorian date.
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// Returned when a date range starts after it ends.
    #[error("invalid range: start {start} is after end {end}")]
    InvertedRange {
        /// First date of the range.
        start: NaiveDate,
        /// Last date of the range.
        end: NaiveDate,
    },

    /// Returned when a semester period starts after it ends.
    #[error("semester '{name}' starts on {start}, after its end {end}")]
    InvertedSemester {
        /// Semester name.
        name: String,
        /// Declared start date.
        start: NaiveDate,
        /// Declared end date.
        end: NaiveDate,
    },

    /// Returned when a vacation entry covers no dates at all.
    #[error("vacation '{name}' has no dates")]
    EmptyVacation {
        /// Vacation name.
        name: String,
    },

    /// Returned when two semesters share the same name.
    #[error("duplicate semester '{name}'")]
    DuplicateSemester {
        /// The repeated semester name.
        name: String,
    },

    /// Returned when an alias or combined span names a semester the table
    /// does not define.
    #[error("unknown semester '{name}' referenced by {referenced_by}")]
    UnknownSemester {
        /// The missing semester name.
        name: String,
        /// What referenced it, e.g. `alias '第一学期'`.
        referenced_by: String,
    },
}
