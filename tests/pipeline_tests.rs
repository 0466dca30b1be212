use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use reelsplit::cli::split_file;
use reelsplit::keywords::KeywordSet;

const SAMPLE: &str = "\
TitleDate
Saga: Part One,\"01/01/20\"
Saga: Part Two,\"02/01/20\"
Lonely Movie,\"05/06/19\"
Show: Temporada 1,\"03/04/21\"
X,not-a-date
";

fn write_sample(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("watched.csv");
    fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn test_split_writes_both_partitions() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    let summary = split_file(&input, &KeywordSet::default(), None).unwrap();

    // Five input rows, split without loss or overlap.
    assert_eq!(summary.films + summary.series, 5);
    assert_eq!(summary.films, 2); // Lonely Movie, X
    assert_eq!(summary.series, 3); // Saga x2, Show
    assert_eq!(summary.bad_dates, 1);

    assert_eq!(summary.films_path, dir.path().join("watched_films.csv"));
    assert_eq!(summary.series_path, dir.path().join("watched_series.csv"));

    let films = fs::read(&summary.films_path).unwrap();
    assert!(films.starts_with(b"\xef\xbb\xbf"));
    let films = String::from_utf8(films[3..].to_vec()).unwrap();
    assert!(films.contains("Lonely Movie;05/06/19;;film"));
    assert!(films.contains("X;;;film"));

    let series = fs::read_to_string(&summary.series_path).unwrap();
    assert!(series.contains("Saga: Part One;01/01/20;;series"));
    assert!(series.contains("Show: Temporada 1;03/04/21;series;series"));
}

#[test]
fn test_split_into_explicit_output_dir() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let input = write_sample(&dir);

    let summary = split_file(&input, &KeywordSet::default(), Some(out.path())).unwrap();
    assert!(summary.films_path.starts_with(out.path()));
    assert!(summary.films_path.exists());
    assert!(summary.series_path.exists());
}

#[test]
fn test_unreadable_input_aborts_with_context() {
    let dir = TempDir::new().unwrap();
    let err = split_file(
        &dir.path().join("missing.csv"),
        &KeywordSet::default(),
        None,
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to open"));
}

#[test]
fn test_cli_split_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    Command::cargo_bin("reelsplit")
        .unwrap()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 films"))
        .stdout(predicate::str::contains("3 series"));

    assert!(dir.path().join("watched_films.csv").exists());
    assert!(dir.path().join("watched_series.csv").exists());
}

#[test]
fn test_cli_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    Command::cargo_bin("reelsplit")
        .unwrap()
        .arg(&input)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"));

    assert!(!dir.path().join("watched_films.csv").exists());
    assert!(!dir.path().join("watched_series.csv").exists());
}

#[test]
fn test_cli_no_input_in_empty_dir_is_a_noop() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("reelsplit")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No input file selected."));
}

#[test]
fn test_cli_check_reports_counts_without_writing() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);

    Command::cargo_bin("reelsplit")
        .unwrap()
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 films"))
        .stdout(predicate::str::contains("1 unparseable dates"));

    assert!(!dir.path().join("watched_films.csv").exists());
}
