//! Directory comparison runs against a base document.

mod common;

use common::*;
use notediff_core::{
    comparison_rows, ComparisonRun, ComparisonSession, ExtractorSettings, NotediffError, RowStatus,
};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Base `["Alpha", "Beta"]`, variants A and B, plus a copy of the base and a stray text file.
fn scenario_dir() -> (TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let base = write_file(dir.path(), "Base.docx", &docx_with_footnotes(&["Alpha", "Beta"]));
    write_file(dir.path(), "A.docx", &docx_with_footnotes(&["Alpha", "Gamma"]));
    write_file(dir.path(), "B.docx", &docx_with_footnotes(&["Beta", "Delta", "Gamma"]));
    write_file(dir.path(), "readme.txt", b"not a document");
    (dir, base)
}

#[test]
fn directory_scenario_reports_extras_and_pool() {
    let (dir, base) = scenario_dir();

    let run = ComparisonRun::new(&base, None).unwrap();
    let report = run.compare_directory(dir.path()).unwrap();

    let names: Vec<&str> = report.results.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let a = report.result("A").unwrap();
    assert_eq!(a.footnote_count, 2);
    assert_eq!(a.extra_footnotes, vec!["Gamma"]);
    assert_eq!(a.extra_count, 1);
    assert_eq!(a.extra_footnotes_display(), r#""Gamma""#);

    let b = report.result("B").unwrap();
    assert_eq!(b.footnote_count, 3);
    assert_eq!(b.extra_footnotes, vec!["Delta", "Gamma"]);
    assert_eq!(b.missing_footnotes, vec!["Alpha"]);

    assert_eq!(report.pool.iter().collect::<Vec<_>>(), vec!["Gamma", "Delta"]);
    assert!(report.pool.entries().iter().all(|e| !e.selected));
    assert!(report.failures.is_empty());
    assert_eq!(report.base_filename, "Base");
    assert_eq!(report.base_footnote_count, 2);
}

#[test]
fn base_document_in_directory_is_never_a_row() {
    let (dir, base) = scenario_dir();

    let run = ComparisonRun::new(&base, None).unwrap();
    let scanned = run.scan_variants(dir.path()).unwrap();

    assert!(scanned.iter().all(|p| p.file_name().unwrap() != "Base.docx"));
    assert!(scanned.iter().all(|p| p.extension().unwrap() == "docx"));

    let report = run.compare_directory(dir.path()).unwrap();
    assert!(report.result("Base").is_none());
}

#[test]
fn broken_variant_is_reported_and_excluded() {
    let (dir, base) = scenario_dir();
    write_file(dir.path(), "Broken.docx", b"garbage");
    write_file(dir.path(), "C.docx", &docx_with_footnotes(&["Epsilon"]));

    let run = ComparisonRun::new(&base, None).unwrap();
    let report = run.compare_directory(dir.path()).unwrap();

    assert_eq!(report.results.len(), 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].filename, "Broken");
    assert!(report.pool.contains("Epsilon"));
    assert_eq!(report.pool.len(), 3);
}

#[test]
fn variant_without_footnotes_has_zero_counts() {
    let dir = tempdir().unwrap();
    let base = write_file(dir.path(), "Base.docx", &docx_with_footnotes(&["Alpha"]));
    write_file(dir.path(), "Empty.docx", &docx_without_footnotes());

    let report = ComparisonRun::new(&base, None)
        .unwrap()
        .compare_directory(dir.path())
        .unwrap();

    let empty = report.result("Empty").unwrap();
    assert_eq!(empty.footnote_count, 0);
    assert!(empty.extra_footnotes.is_empty());
    assert!(report.pool.is_empty());
}

#[test]
fn base_may_live_outside_the_directory() {
    let (dir, _) = scenario_dir();
    let elsewhere = tempdir().unwrap();
    let base = write_file(elsewhere.path(), "Base.docx", &docx_with_footnotes(&["Alpha", "Beta"]));

    let report = ComparisonRun::new(&base, None)
        .unwrap()
        .compare_directory(dir.path())
        .unwrap();

    // The in-directory copy shares the base's file name and is still excluded.
    assert_eq!(report.results.len(), 2);
}

#[test]
fn base_parse_failure_stops_the_run() {
    let dir = tempdir().unwrap();
    let base = write_file(dir.path(), "Base.docx", b"not a zip");

    let err = ComparisonRun::new(&base, None).err().unwrap();

    assert!(err.is_parse());
    assert_eq!(err.path(), Some(base.as_path()));
}

#[test]
fn directory_with_only_the_base_has_no_documents() {
    let dir = tempdir().unwrap();
    let base = write_file(dir.path(), "Base.docx", &docx_with_footnotes(&["Alpha"]));

    let err = ComparisonRun::new(&base, None)
        .unwrap()
        .compare_directory(dir.path())
        .err()
        .unwrap();

    assert!(matches!(err, NotediffError::NoDocuments { .. }));
}

#[test]
fn session_requires_a_base_before_comparing() {
    let (dir, base) = scenario_dir();
    let mut session = ComparisonSession::new(ExtractorSettings::default());

    let err = session.compare_directory(dir.path()).err().unwrap();
    assert!(matches!(err, NotediffError::Configuration { .. }));

    session.select_base(&base);
    let report = session.compare_directory(dir.path()).unwrap();
    assert_eq!(report.results.len(), 2);
}

#[test]
fn export_rows_mark_missing_base_footnotes() {
    let (dir, base) = scenario_dir();
    let run = ComparisonRun::new(&base, None).unwrap();
    let variant =
        notediff_core::extract_footnotes(dir.path().join("A.docx")).unwrap();

    let rows = comparison_rows(run.base(), &variant);

    let statuses: Vec<(&str, RowStatus)> = rows
        .iter()
        .map(|r| (r.base_footnote.as_str(), r.status))
        .collect();
    assert_eq!(
        statuses,
        vec![("Alpha", RowStatus::Match), ("Beta", RowStatus::Missing)]
    );
}

#[test]
fn report_serializes_for_front_ends() {
    let (dir, base) = scenario_dir();
    let report = ComparisonRun::new(&base, None)
        .unwrap()
        .compare_directory(dir.path())
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(json["results"][0]["filename"], "A");
    assert_eq!(json["results"][1]["extra_count"], 2);
    assert_eq!(json["pool"][0]["text"], "Gamma");
    assert_eq!(json["pool"][0]["selected"], false);
    assert!(Path::new(json["results"][0]["path"].as_str().unwrap()).ends_with("A.docx"));
}
