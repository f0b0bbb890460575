//! Calendar tables: the hand-maintained source data for one academic year.

use serde::Deserialize;

use crate::period::{SemesterPeriod, VacationEntry};

/// Standard alternate semester names and the canonical semester each maps to.
///
/// `前期` and `後期` point at the first quarter of their half; the full
/// half-year spans are emitted separately (see [`STANDARD_COMBINED`]).
pub const STANDARD_ALIASES: &[(&str, &str)] = &[
    ("第一学期", "1学期"),
    ("第二学期", "2学期"),
    ("前期", "1学期"),
    ("第三学期", "3学期"),
    ("第四学期", "4学期"),
    ("後期", "3学期"),
];

/// Standard half-year spans: `(name, first semester, last semester)`.
pub const STANDARD_COMBINED: &[(&str, &str, &str)] =
    &[("前期", "1学期", "2学期"), ("後期", "3学期", "4学期")];

/// Maps an alternate semester name onto a canonical one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SemesterAlias {
    /// Alternate name as it appears in timetables.
    pub alias: String,
    /// Canonical semester name.
    pub semester: String,
}

impl SemesterAlias {
    pub fn new(alias: impl Into<String>, semester: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            semester: semester.into(),
        }
    }
}

/// A derived span from the start of one semester to the end of another.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CombinedSpan {
    /// Name of the derived entry, e.g. `前期`.
    pub name: String,
    /// Semester whose start date opens the span.
    pub first: String,
    /// Semester whose end date closes the span.
    pub last: String,
}

impl CombinedSpan {
    pub fn new(name: impl Into<String>, first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            first: first.into(),
            last: last.into(),
        }
    }
}

/// Semesters, vacations, and naming rules for one academic year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarTable {
    /// Academic year the table describes (the year it starts in).
    pub year: i32,
    /// Canonical semesters in chronological order.
    pub semesters: Vec<SemesterPeriod>,
    /// Holidays and breaks in declaration order.
    #[serde(default)]
    pub vacations: Vec<VacationEntry>,
    /// Alternate semester names.
    #[serde(default = "standard_aliases")]
    pub aliases: Vec<SemesterAlias>,
    /// Derived half-year spans.
    #[serde(default = "standard_combined")]
    pub combined: Vec<CombinedSpan>,
}

impl CalendarTable {
    /// Creates a table with the standard alias and half-year rules.
    pub fn new(year: i32, semesters: Vec<SemesterPeriod>, vacations: Vec<VacationEntry>) -> Self {
        Self {
            year,
            semesters,
            vacations,
            aliases: standard_aliases(),
            combined: standard_combined(),
        }
    }

    /// Looks up a canonical semester by name.
    pub fn semester(&self, name: &str) -> Option<&SemesterPeriod> {
        self.semesters.iter().find(|s| s.name == name)
    }
}

/// Returns [`STANDARD_ALIASES`] as owned rules.
pub fn standard_aliases() -> Vec<SemesterAlias> {
    STANDARD_ALIASES
        .iter()
        .map(|&(alias, semester)| SemesterAlias::new(alias, semester))
        .collect()
}

/// Returns [`STANDARD_COMBINED`] as owned rules.
pub fn standard_combined() -> Vec<CombinedSpan> {
    STANDARD_COMBINED
        .iter()
        .map(|&(name, first, last)| CombinedSpan::new(name, first, last))
        .collect()
}
