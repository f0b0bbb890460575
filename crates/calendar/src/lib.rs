//! # koyomi-calendar
//!
//! Academic calendar data model: semester periods, vacation entries, and the
//! per-year JSON document built from them.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["ymd()"] --> B["NaiveDate"]
//!     B -->|"date_range()"| C["Vec of NaiveDate"]
//!     D["SemesterPeriod"] --> T["CalendarTable"]
//!     E["VacationEntry"] --> T
//!     F["academic_year_2025()"] --> T
//!     T -->|"build_year_document()"| Y["YearDocument"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use koyomi_calendar::{academic_year_2025, build_year_document, date_range, ymd};
//!
//! // Inclusive range expansion
//! let days = date_range(ymd(2025, 4, 1)?, ymd(2025, 4, 15)?)?;
//! assert_eq!(days.len(), 15);
//!
//! // Year document from the built-in table
//! let doc = build_year_document(&academic_year_2025()?)?;
//! assert_eq!(doc.semesters["前期"][1], ymd(2025, 7, 31)?);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Checked date construction and ISO formatting |
//! | `range` | Inclusive date range expansion |
//! | `period` | Semester periods and vacation entries |
//! | `table` | Calendar tables and the standard naming rules |
//! | `builtin` | Built-in table for academic year 2025 |
//! | `document` | Year document generation |
//! | `error` | Error types |

mod builtin;
mod date;
mod document;
mod error;
mod period;
mod range;
mod table;

pub use builtin::{BUILTIN_YEAR, academic_year_2025};
pub use date::{ISO_DATE_FORMAT, iso, ymd};
pub use document::{VacationDates, YearDocument, build_year_document};
pub use error::CalendarError;
pub use period::{SemesterPeriod, VacationEntry, VacationPeriod};
pub use range::date_range;
pub use table::{
    CalendarTable, CombinedSpan, STANDARD_ALIASES, STANDARD_COMBINED, SemesterAlias,
    standard_aliases, standard_combined,
};
