use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use koyomi_calendar::{YearDocument, academic_year_2025, build_year_document};
use koyomi_io::{
    IoError, MergeConfig, MergedDocument, merge_years, read_year_document, to_json_string,
    write_json, year_file_name,
};
use serde_json::Value;

fn created() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

/// The built-in document relabelled as `year`.
fn year_doc(year: i32) -> YearDocument {
    let mut table = academic_year_2025().unwrap();
    table.year = year;
    build_year_document(&table).unwrap()
}

fn year_value(year: i32) -> Value {
    serde_json::to_value(year_doc(year)).unwrap()
}

fn write_year(dir: &Path, year: i32) {
    write_json(&dir.join(year_file_name(year.into())), &year_doc(year)).expect("write year file");
}

/// A year file in the shape the front-end's YAML importer writes: two-date
/// semesters, vacations carrying `start`/`end`/`type`/`classes_held`, an
/// `events` list, and no `semester_mapping`.
const IMPORTED_2026: &str = r#"{
  "year": 2026,
  "semesters": {
    "1学期": [
      "2026-04-13",
      "2026-06-08"
    ],
    "前期": [
      "2026-04-13",
      "2026-09-18"
    ]
  },
  "vacations": [
    {
      "name": "創立記念日",
      "dates": [
        "2026-05-20"
      ],
      "type": "holiday",
      "classes_held": false
    },
    {
      "name": "夏季休業",
      "dates": [
        "2026-08-10",
        "2026-08-11"
      ],
      "start": "2026-08-10",
      "end": "2026-08-11",
      "type": "vacation",
      "classes_held": false
    }
  ],
  "events": [
    {
      "name": "創立記念日",
      "dates": [
        "2026-05-20"
      ],
      "type": "holiday",
      "classes_held": false
    },
    {
      "name": "補講日",
      "dates": [
        "2026-07-25"
      ],
      "type": "makeup",
      "classes_held": true
    }
  ]
}"#;

fn config(dirs: &[&PathBuf]) -> MergeConfig {
    MergeConfig::default().with_search_dirs(dirs.iter().map(|d| d.to_path_buf()))
}

#[test]
fn merges_all_years_in_order() {
    let root = tempfile::tempdir().expect("create temp dir");
    let public = root.path().join("public");
    let src = root.path().join("src");
    write_year(&public, 2025);
    write_year(&src, 2024);

    let result = merge_years(&config(&[&public, &src]), created()).unwrap();
    assert!(result.skipped().is_empty());
    assert_eq!(result.n_years(), 2);

    let doc = result.document();
    assert_eq!(doc.created_at, created());
    let keys: Vec<i64> = doc.years.keys().copied().collect();
    assert_eq!(keys, vec![2024, 2025]);
    assert_eq!(doc.years[&2025], year_value(2025));
}

#[test]
fn no_year_files_is_fatal() {
    let root = tempfile::tempdir().expect("create temp dir");
    let public = root.path().join("public");
    let src = root.path().join("src");
    fs::create_dir_all(&public).unwrap();

    let err = merge_years(&config(&[&public, &src]), created()).unwrap_err();
    assert!(matches!(err, IoError::NoYearFiles { .. }));
}

#[test]
fn one_bad_year_among_three_is_skipped() {
    let root = tempfile::tempdir().expect("create temp dir");
    let public = root.path().join("public");
    let src = root.path().join("src");
    write_year(&public, 2023);
    write_year(&src, 2025);
    fs::write(public.join(year_file_name(2024)), "{ not json").unwrap();

    let result = merge_years(&config(&[&public, &src]), created()).unwrap();
    let keys: Vec<i64> = result.document().years.keys().copied().collect();
    assert_eq!(keys, vec![2023, 2025]);

    let skipped: Vec<i64> = result.skipped().iter().map(|(y, _)| *y).collect();
    assert_eq!(skipped, vec![2024]);
    assert!(matches!(
        result.skipped()[0].1,
        IoError::MalformedJson { .. }
    ));
}

#[test]
fn all_years_bad_is_fatal() {
    let root = tempfile::tempdir().expect("create temp dir");
    let public = root.path().join("public");
    fs::create_dir_all(&public).unwrap();
    fs::write(public.join(year_file_name(2024)), "").unwrap();
    fs::write(public.join(year_file_name(2025)), "[]").unwrap();

    let err = merge_years(&config(&[&public]), created()).unwrap_err();
    assert!(matches!(err, IoError::NoLoadableYears { discovered: 2 }));
}

#[test]
fn primary_directory_takes_precedence() {
    let root = tempfile::tempdir().expect("create temp dir");
    let public = root.path().join("public");
    let src = root.path().join("src");
    write_year(&public, 2025);

    let mut stale = year_doc(2025);
    stale.vacations.clear();
    write_json(&src.join(year_file_name(2025)), &stale).unwrap();

    let result = merge_years(&config(&[&public, &src]), created()).unwrap();
    assert_eq!(result.document().years[&2025], year_value(2025));
}

#[test]
fn merged_json_shape() {
    let root = tempfile::tempdir().expect("create temp dir");
    let public = root.path().join("public");
    write_year(&public, 2025);

    let merged = merge_years(&config(&[&public]), created())
        .unwrap()
        .into_document();
    let json = to_json_string(&merged).unwrap();
    assert!(json.starts_with("{\n  \"created_at\": \"2026-10-17\",\n  \"years\": {\n    \"2025\": {"));

    let back: MergedDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(back, merged);
}

#[test]
fn year_file_round_trips_through_disk() {
    let root = tempfile::tempdir().expect("create temp dir");
    let path = root.path().join(year_file_name(2025));
    write_json(&path, &year_doc(2025)).unwrap();
    assert_eq!(read_year_document(&path).unwrap(), year_doc(2025));
}

#[test]
fn imported_year_passes_through_unchanged() {
    let root = tempfile::tempdir().expect("create temp dir");
    let public = root.path().join("public");
    fs::create_dir_all(&public).unwrap();
    fs::write(public.join(year_file_name(2026)), IMPORTED_2026).unwrap();
    write_year(&public, 2025);

    let result = merge_years(&config(&[&public]), created()).unwrap();
    assert!(result.skipped().is_empty());
    let merged = result.into_document();

    let imported = &merged.years[&2026];
    assert_eq!(imported["events"][1]["classes_held"], true);
    assert_eq!(imported["vacations"][1]["start"], "2026-08-10");
    assert!(imported.get("semester_mapping").is_none());
    assert_eq!(to_json_string(imported).unwrap(), IMPORTED_2026);

    let json = to_json_string(&merged).unwrap();
    assert_eq!(json.matches("semester_mapping").count(), 1);
}

#[test]
fn semester_arrays_of_other_lengths_are_kept() {
    let root = tempfile::tempdir().expect("create temp dir");
    let public = root.path().join("public");
    fs::create_dir_all(&public).unwrap();
    let text = r#"{"year": 2027, "semesters": {"通年": ["2027-04-01", "2027-09-30", "2028-03-31"]}}"#;
    fs::write(public.join(year_file_name(2027)), text).unwrap();

    let merged = merge_years(&config(&[&public]), created())
        .unwrap()
        .into_document();
    let expected: Value = serde_json::from_str(text).unwrap();
    assert_eq!(merged.years[&2027], expected);
    assert_eq!(merged.years[&2027]["semesters"]["通年"].as_array().unwrap().len(), 3);
}

#[test]
fn empty_object_year_is_skipped() {
    let root = tempfile::tempdir().expect("create temp dir");
    let public = root.path().join("public");
    write_year(&public, 2025);
    fs::write(public.join(year_file_name(2024)), "{}").unwrap();

    let result = merge_years(&config(&[&public]), created()).unwrap();
    let keys: Vec<i64> = result.document().years.keys().copied().collect();
    assert_eq!(keys, vec![2025]);
    assert!(matches!(
        result.skipped(),
        [(2024, IoError::NotAnObject { .. })]
    ));
}

#[test]
fn year_is_read_from_the_discovered_file() {
    let root = tempfile::tempdir().expect("create temp dir");
    let public = root.path().join("public");
    fs::create_dir_all(&public).unwrap();
    let text = r#"{"year": 2025, "source": "padded name"}"#;
    fs::write(public.join("calendar_data_02025.json"), text).unwrap();

    let merged = merge_years(&config(&[&public]), created())
        .unwrap()
        .into_document();
    assert_eq!(merged.years[&2025]["source"], "padded name");
}
