//! Checked Gregorian date construction.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Format used for every date written to a calendar document.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Creates a [`NaiveDate`] from year, month, and day.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the triple does not name a
/// real Gregorian date (e.g. February 30, or February 29 outside a leap
/// year).
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Formats a date as `YYYY-MM-DD`.
pub fn iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
