//! Combining per-year documents into one dated snapshot.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::discover::discover_year_files;
use crate::error::IoError;
use crate::reader::{display_dirs, load_year, read_year_json};

/// All loaded year documents plus the date the snapshot was taken.
///
/// `years` serializes with string keys (`"2025"`) in ascending year order.
/// Each year holds the file's JSON object exactly as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedDocument {
    pub created_at: NaiveDate,
    pub years: BTreeMap<i64, Value>,
}

/// Where [`merge_years`] looks for year documents.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Directories searched in priority order.
    search_dirs: Vec<PathBuf>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            search_dirs: vec!["public".into(), "src".into()],
        }
    }
}

impl MergeConfig {
    /// Replace the search directories. Earlier entries take precedence.
    pub fn with_search_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the search directories in priority order.
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }
}

/// Outcome of a successful merge.
#[derive(Debug)]
pub struct MergeResult {
    document: MergedDocument,
    skipped: Vec<(i64, IoError)>,
}

impl MergeResult {
    /// The merged document.
    pub fn document(&self) -> &MergedDocument {
        &self.document
    }

    /// Consumes the result, returning the merged document.
    pub fn into_document(self) -> MergedDocument {
        self.document
    }

    /// Years that were discovered but could not be loaded, with the reason.
    pub fn skipped(&self) -> &[(i64, IoError)] {
        &self.skipped
    }

    /// Number of years in the merged document.
    pub fn n_years(&self) -> usize {
        self.document.years.len()
    }
}

/// Discovers every year document under the configured directories and
/// merges them into one [`MergedDocument`] stamped with `created_at`.
///
/// Each year is read from the path discovery chose for it. If that file has
/// vanished since, the year is looked up again with [`load_year`]. A year
/// that fails to load is logged and skipped.
///
/// Documents are not validated beyond being non-empty JSON objects, so
/// fields this crate never writes are carried through.
///
/// # Errors
///
/// Returns [`IoError::NoYearFiles`] if discovery finds nothing,
/// [`IoError::NoLoadableYears`] if every discovered year fails to load, or
/// [`IoError::Pattern`] if discovery cannot build its search pattern.
pub fn merge_years(config: &MergeConfig, created_at: NaiveDate) -> Result<MergeResult, IoError> {
    let dirs = config.search_dirs();
    let discovered = discover_year_files(dirs)?;
    if discovered.is_empty() {
        return Err(IoError::NoYearFiles {
            dirs: display_dirs(dirs),
        });
    }
    info!(years = ?discovered.years(), "found year files");

    let mut years = BTreeMap::new();
    let mut skipped = Vec::new();
    for (year, path) in discovered.iter() {
        let loaded = match read_year_json(path) {
            Err(IoError::FileNotFound { .. }) => load_year(year, dirs),
            other => other,
        };
        match loaded {
            Ok(doc) => {
                match doc.get("year").and_then(Value::as_i64) {
                    Some(document_year) if document_year != year => {
                        warn!(year, document_year, "document year differs from file name");
                    }
                    None => warn!(year, "document has no integer year field"),
                    _ => {}
                }
                info!(year, path = %path.display(), "loaded year data");
                years.insert(year, doc);
            }
            Err(e) => {
                warn!(year, error = %e, "could not load year data, skipped");
                skipped.push((year, e));
            }
        }
    }

    if years.is_empty() {
        return Err(IoError::NoLoadableYears {
            discovered: discovered.len(),
        });
    }

    Ok(MergeResult {
        document: MergedDocument { created_at, years },
        skipped,
    })
}
