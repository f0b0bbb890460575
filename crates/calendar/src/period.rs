//! Semester and vacation periods as they appear in a calendar table.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::CalendarError;
use crate::range::date_range;

/// A named, contiguous span of the academic year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SemesterPeriod {
    /// Canonical semester name, e.g. `1学期`.
    pub name: String,
    /// First day of instruction (inclusive).
    pub start: NaiveDate,
    /// Last day of instruction (inclusive).
    pub end: NaiveDate,
}

impl SemesterPeriod {
    /// Creates a new semester period. Ordering is checked by [`span`](Self::span).
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Returns `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvertedSemester`] if `start` is after `end`.
    pub fn span(&self) -> Result<[NaiveDate; 2], CalendarError> {
        if self.start > self.end {
            return Err(CalendarError::InvertedSemester {
                name: self.name.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok([self.start, self.end])
    }
}

/// The dates a vacation entry covers, in one of three source forms.
///
/// In TOML a period is written inline next to the entry name as either
/// `date = "..."`, `dates = [...]`, or `start = "..."` plus `end = "..."`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VacationPeriod {
    /// An inclusive range, expanded day by day.
    Range { start: NaiveDate, end: NaiveDate },
    /// An explicit, not necessarily contiguous, list of dates.
    Dates { dates: Vec<NaiveDate> },
    /// One date.
    Single { date: NaiveDate },
}

impl VacationPeriod {
    /// Normalizes the period into an ordered list of dates.
    ///
    /// Lists keep their declared order; ranges are expanded in ascending
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvertedRange`] if a range starts after it
    /// ends.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, CalendarError> {
        match self {
            Self::Range { start, end } => date_range(*start, *end),
            Self::Dates { dates } => Ok(dates.clone()),
            Self::Single { date } => Ok(vec![*date]),
        }
    }
}

/// A named holiday or break. Names need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VacationEntry {
    /// Display name, e.g. `夏休み`.
    pub name: String,
    /// Covered dates.
    #[serde(flatten)]
    pub period: VacationPeriod,
}

impl VacationEntry {
    /// An entry covering a single date.
    pub fn single(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            period: VacationPeriod::Single { date },
        }
    }

    /// An entry covering every date from `start` to `end` inclusive.
    pub fn range(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            name: name.into(),
            period: VacationPeriod::Range { start, end },
        }
    }

    /// An entry covering an explicit list of dates.
    pub fn dates(name: impl Into<String>, dates: Vec<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            period: VacationPeriod::Dates { dates },
        }
    }

    /// Expands this entry into its non-empty list of dates.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyVacation`] for an empty explicit list,
    /// or [`CalendarError::InvertedRange`] for an inverted range.
    pub fn expand(&self) -> Result<Vec<NaiveDate>, CalendarError> {
        let dates = self.period.dates()?;
        if dates.is_empty() {
            return Err(CalendarError::EmptyVacation {
                name: self.name.clone(),
            });
        }
        Ok(dates)
    }
}
