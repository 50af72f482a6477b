//! Tests for the `bureau-report` binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn bureau_report() -> Command {
    Command::cargo_bin("bureau-report").unwrap()
}

#[test]
fn test_extract_prints_json() {
    bureau_report()
        .arg("extract")
        .arg(fixture("profile_response.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Sagar Sharma\""))
        .stdout(predicate::str::contains("\"creditScore\": 719"));
}

#[test]
fn test_extract_prints_yaml() {
    bureau_report()
        .args(["extract", "--format", "yaml"])
        .arg(fixture("profile_response.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("pan: AOZPB0247S"));
}

#[test]
fn test_extract_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.json");

    bureau_report()
        .arg("extract")
        .arg(fixture("profile_response.xml"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved to:"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"pan\": \"AOZPB0247S\""));
}

#[test]
fn test_extract_rejects_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join("report.json");

    bureau_report()
        .arg("extract")
        .arg(fixture("profile_response.xml"))
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory does not exist"));
}

#[test]
fn test_extract_rejects_large_file() {
    bureau_report()
        .arg("extract")
        .arg(fixture("profile_response.xml"))
        .args(["--max-size", "16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Payload too large"));
}

#[test]
fn test_extract_rejects_non_xml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    std::fs::write(&path, "<INProfileResponse/>").unwrap();

    bureau_report()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only XML files are allowed"));
}

#[test]
fn test_extract_reports_malformed_xml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xml");
    std::fs::write(&path, "<INProfileResponse><SCORE>").unwrap();

    bureau_report()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Malformed XML document"));
}

#[test]
fn test_inspect_prints_summary() {
    bureau_report()
        .arg("inspect")
        .arg(fixture("profile_response.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Sagar Sharma"))
        .stdout(predicate::str::contains("Credit score: 719"))
        .stdout(predicate::str::contains("4 total, 3 active, 1 closed"))
        .stdout(predicate::str::contains("Flat 12, Sea View, Marine Drive"));
}

#[test]
fn test_tree_dumps_generic_nodes() {
    bureau_report()
        .arg("tree")
        .arg(fixture("profile_response.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"INProfileResponse\""))
        .stdout(predicate::str::contains("\"SystemCode\""));
}
