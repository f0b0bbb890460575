//! Generate command: build one year document and write it as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use koyomi_calendar::{CalendarTable, academic_year_2025, build_year_document};
use koyomi_io::write_json;

use crate::cli::GenerateArgs;
use crate::config::GenerateToml;

/// Run the generation step.
pub fn run(args: GenerateArgs, config: &GenerateToml) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // 1. Resolve the calendar table: CLI, then config, then built-in
    let table = match args.table.as_deref().or(config.table.as_deref()) {
        Some(path) => load_table(path)?,
        None => academic_year_2025().context("built-in calendar table is invalid")?,
    };
    info!(
        year = table.year,
        n_semesters = table.semesters.len(),
        n_vacations = table.vacations.len(),
        "calendar table loaded"
    );

    // 2. Build the document
    let doc = build_year_document(&table)
        .with_context(|| format!("invalid calendar table for {}", table.year))?;

    // 3. Write it
    let output = args.output.unwrap_or_else(|| config.output.clone());
    write_json(&output, &doc)
        .with_context(|| format!("failed to write year document: {}", output.display()))?;
    info!(path = %output.display(), "year document written");

    Ok(())
}

/// Reads a calendar table from a TOML file.
pub fn load_table(path: &Path) -> Result<CalendarTable> {
    info!(path = %path.display(), "reading calendar table");
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read calendar table: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse calendar table: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const TABLE_2026: &str = r#"
        year = 2026
        semesters = [
          { name = "1学期", start = "2026-04-15", end = "2026-06-09" },
          { name = "2学期", start = "2026-06-12", end = "2026-07-30" },
          { name = "3学期", start = "2026-09-18", end = "2026-11-09" },
          { name = "4学期", start = "2026-11-17", end = "2027-01-25" },
        ]
        vacations = [
          { name = "春休み", start = "2026-04-01", end = "2026-04-14" },
          { name = "憲法記念日", date = "2026-05-03" },
          { name = "試験・補講", dates = ["2027-01-20", "2027-01-26"] },
        ]
    "#;

    fn args(table: Option<PathBuf>, output: Option<PathBuf>) -> GenerateArgs {
        GenerateArgs { table, output }
    }

    #[test]
    fn builtin_table_to_config_output() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = GenerateToml {
            output: dir.path().join("public").join("calendar_data.json"),
            table: None,
        };
        run(args(None, None), &config).unwrap();

        let doc = koyomi_io::read_year_document(&config.output).unwrap();
        assert_eq!(doc.year, 2025);
        assert_eq!(doc.semesters.len(), 6);
    }

    #[test]
    fn table_file_and_output_override() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let table_path = dir.path().join("2026.toml");
        std::fs::write(&table_path, TABLE_2026).unwrap();
        let out = dir.path().join("calendar_data_2026.json");
        let config = GenerateToml {
            output: dir.path().join("unused.json"),
            table: None,
        };

        run(args(Some(table_path), Some(out.clone())), &config).unwrap();

        assert!(!config.output.exists());
        let doc = koyomi_io::read_year_document(&out).unwrap();
        assert_eq!(doc.year, 2026);
        assert_eq!(doc.vacations[0].dates.len(), 14);
        assert_eq!(doc.vacations[2].dates.len(), 2);
        assert_eq!(doc.semester("後期").unwrap()[1].to_string(), "2027-01-25");
    }

    #[test]
    fn invalid_table_reports_context() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let table_path = dir.path().join("bad.toml");
        std::fs::write(
            &table_path,
            r#"
            year = 2026
            semesters = [{ name = "1学期", start = "2026-06-09", end = "2026-04-15" }]
            aliases = []
            combined = []
            "#,
        )
        .unwrap();
        let config = GenerateToml {
            output: dir.path().join("out.json"),
            table: Some(table_path),
        };

        let err = run(args(None, None), &config).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid calendar table for 2026"));
        assert!(msg.contains("after its end"));
        assert!(!config.output.exists());
    }
}
