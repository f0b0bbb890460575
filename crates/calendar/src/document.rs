//! Year documents: the serialized form of one calendar table.

use std::collections::HashSet;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::table::CalendarTable;

/// One vacation entry with its dates spelled out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationDates {
    pub name: String,
    pub dates: Vec<NaiveDate>,
}

/// Per-year calendar document consumed by the front-end.
///
/// Serializes as
///
/// ```json
/// {
///   "year": 2025,
///   "semesters": { "1学期": ["2025-04-16", "2025-06-10"], ... , "前期": [...] },
///   "vacations": [{ "name": "春休み", "dates": ["2025-04-01", ...] }, ...],
///   "semester_mapping": { "第一学期": "1学期", ... }
/// }
/// ```
///
/// Map keys keep insertion order so the output is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearDocument {
    pub year: i32,
    /// Canonical semesters followed by the combined half-year spans.
    pub semesters: IndexMap<String, [NaiveDate; 2]>,
    pub vacations: Vec<VacationDates>,
    /// Alternate name -> canonical semester name.
    #[serde(default)]
    pub semester_mapping: IndexMap<String, String>,
}

impl YearDocument {
    /// Returns `[start, end]` for a semester or combined span.
    pub fn semester(&self, name: &str) -> Option<[NaiveDate; 2]> {
        self.semesters.get(name).copied()
    }

    /// Iterates over every vacation date in declaration order.
    pub fn vacation_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.vacations.iter().flat_map(|v| v.dates.iter().copied())
    }
}

/// Builds the [`YearDocument`] for a calendar table.
///
/// Semesters are emitted in table order, then each combined span as
/// `[start of first, end of last]`. Vacation periods are expanded into
/// explicit date lists. No overlap checks are made between periods.
///
/// # Errors
///
/// - [`CalendarError::DuplicateSemester`] if two semesters or combined spans
///   share a name.
/// - [`CalendarError::InvertedSemester`] if a semester or combined span
///   starts after it ends.
/// - [`CalendarError::EmptyVacation`] / [`CalendarError::InvertedRange`] if a
///   vacation cannot be expanded.
/// - [`CalendarError::UnknownSemester`] if an alias or combined span names a
///   semester the table does not define.
pub fn build_year_document(table: &CalendarTable) -> Result<YearDocument, CalendarError> {
    let mut semesters = IndexMap::with_capacity(table.semesters.len() + table.combined.len());
    for s in &table.semesters {
        let span = s.span()?;
        if semesters.insert(s.name.clone(), span).is_some() {
            return Err(CalendarError::DuplicateSemester {
                name: s.name.clone(),
            });
        }
    }
    let canonical: HashSet<&str> = table.semesters.iter().map(|s| s.name.as_str()).collect();

    let vacations = table
        .vacations
        .iter()
        .map(|v| {
            v.expand().map(|dates| VacationDates {
                name: v.name.clone(),
                dates,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut semester_mapping = IndexMap::with_capacity(table.aliases.len());
    for a in &table.aliases {
        if !canonical.contains(a.semester.as_str()) {
            return Err(CalendarError::UnknownSemester {
                name: a.semester.clone(),
                referenced_by: format!("alias '{}'", a.alias),
            });
        }
        semester_mapping.insert(a.alias.clone(), a.semester.clone());
    }

    for c in &table.combined {
        let lookup = |name: &str| {
            table
                .semester(name)
                .ok_or_else(|| CalendarError::UnknownSemester {
                    name: name.to_string(),
                    referenced_by: format!("combined span '{}'", c.name),
                })
        };
        let first = lookup(&c.first)?;
        let last = lookup(&c.last)?;
        if first.start > last.end {
            return Err(CalendarError::InvertedSemester {
                name: c.name.clone(),
                start: first.start,
                end: last.end,
            });
        }
        if semesters.contains_key(&c.name) {
            return Err(CalendarError::DuplicateSemester {
                name: c.name.clone(),
            });
        }
        semesters.insert(c.name.clone(), [first.start, last.end]);
    }

    Ok(YearDocument {
        year: table.year,
        semesters,
        vacations,
        semester_mapping,
    })
}
