//! # koyomi-io
//!
//! Filesystem side of koyomi: write calendar documents as pretty JSON,
//! discover `calendar_data_<YEAR>.json` files across prioritized
//! directories, and merge them into one dated snapshot.

mod discover;
mod error;
mod merge;
mod reader;
mod writer;

pub use discover::{
    Discovered, YEAR_FILE_EXTENSION, YEAR_FILE_PREFIX, discover_year_files, discover_years,
    parse_year_file_name, year_file_name,
};
pub use error::IoError;
pub use merge::{MergeConfig, MergeResult, MergedDocument, merge_years};
pub use reader::{load_year, read_year_document, read_year_json};
pub use writer::{to_json_string, write_json};
