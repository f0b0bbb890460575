//! Inclusive date range expansion.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Expands an inclusive date range into every calendar date it covers.
///
/// Starting from `start`, produces consecutive dates one day apart up to and
/// including `end`. Month, year and leap-day boundaries follow the Gregorian
/// calendar.
///
/// # Errors
///
/// Returns [`CalendarError::InvertedRange`] if `start` is after `end`.
///
/// # Example
///
/// ```ignore
/// let dates = date_range(ymd(2025, 12, 30)?, ymd(2026, 1, 2)?)?;
/// assert_eq!(dates.len(), 4);
/// // Dec 30, Dec 31, Jan 1 (2026), Jan 2 (2026)
/// ```
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, CalendarError> {
    if start > end {
        return Err(CalendarError::InvertedRange { start, end });
    }
    let n_days = (end - start).num_days() as usize + 1;
    Ok(start.iter_days().take(n_days).collect())
}
