//! Year-file discovery across prioritized search directories.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, trace};

use crate::error::IoError;

/// Filename prefix of a per-year calendar document.
pub const YEAR_FILE_PREFIX: &str = "calendar_data_";

/// Filename extension of a per-year calendar document.
pub const YEAR_FILE_EXTENSION: &str = "json";

/// Returns the file name holding the document for `year`,
/// e.g. `calendar_data_2025.json`.
pub fn year_file_name(year: i64) -> String {
    format!("{YEAR_FILE_PREFIX}{year}.{YEAR_FILE_EXTENSION}")
}

/// Extracts the year from a `calendar_data_<YEAR>.json` path.
///
/// Returns `None` when the name does not match or the token between prefix
/// and extension is not an integer. The token is read as `i64`, so any
/// width of digits that fits is accepted, not only four.
pub fn parse_year_file_name(path: &Path) -> Option<i64> {
    if path.extension()?.to_str()? != YEAR_FILE_EXTENSION {
        return None;
    }
    path.file_stem()?
        .to_str()?
        .strip_prefix(YEAR_FILE_PREFIX)?
        .parse()
        .ok()
}

/// Years found by [`discover_year_files`], each with the directory that
/// takes precedence for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovered {
    files: BTreeMap<i64, PathBuf>,
}

impl Discovered {
    /// Discovered years, ascending and deduplicated.
    pub fn years(&self) -> Vec<i64> {
        self.files.keys().copied().collect()
    }

    /// Path of the winning file for `year`.
    pub fn path(&self, year: i64) -> Option<&Path> {
        self.files.get(&year).map(PathBuf::as_path)
    }

    /// Iterates `(year, path)` in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &Path)> {
        self.files.iter().map(|(y, p)| (*y, p.as_path()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Scans `dirs` in priority order for `calendar_data_<YEAR>.json` files.
///
/// Directories that do not exist are skipped. Names whose year token does
/// not parse as an integer are ignored. When a year appears in more than one
/// directory the earliest directory wins; file contents are not compared.
///
/// # Errors
///
/// Returns [`IoError::Pattern`] if a glob pattern cannot be built from a
/// directory path.
pub fn discover_year_files(dirs: &[PathBuf]) -> Result<Discovered, IoError> {
    let mut found = Discovered::default();
    for dir in dirs {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "search directory missing, skipped");
            continue;
        }
        let pattern = format!(
            "{}/{YEAR_FILE_PREFIX}*.{YEAR_FILE_EXTENSION}",
            Pattern::escape(&dir.to_string_lossy())
        );
        let paths = glob::glob(&pattern).map_err(|e| IoError::Pattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
        for path in paths.flatten() {
            let Some(year) = parse_year_file_name(&path) else {
                trace!(path = %path.display(), "not a year file, skipped");
                continue;
            };
            found.files.entry(year).or_insert(path);
        }
    }
    Ok(found)
}

/// Returns the ascending, deduplicated years present in `dirs`.
///
/// # Errors
///
/// See [`discover_year_files`].
pub fn discover_years(dirs: &[PathBuf]) -> Result<Vec<i64>, IoError> {
    Ok(discover_year_files(dirs)?.years())
}
