//! Tests for the `makeplaces` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn makeplaces() -> Command {
    Command::cargo_bin("makeplaces").unwrap()
}

#[test]
fn test_converts_fixture() {
    let out = tempdir().unwrap();

    makeplaces()
        .arg(fixture_path("sample.osm"))
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3 places"));

    assert!(out.path().join("n123").exists());
    assert!(!out.path().join("n5").exists());
}

#[test]
fn test_missing_arguments_fail() {
    makeplaces().assert().failure();
    makeplaces()
        .arg(fixture_path("sample.osm"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("OUTPUT_DIR"));
}

#[test]
fn test_missing_output_dir_fails_when_writing() {
    let out = tempdir().unwrap();

    makeplaces()
        .arg(fixture_path("sample.osm"))
        .arg(out.path().join("missing"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn test_missing_output_dir_succeeds_without_tagged_nodes() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("untagged.osm");
    fs::write(&input, r#"<osm><node id="5"/></osm>"#).unwrap();

    makeplaces()
        .arg(&input)
        .arg(dir.path().join("missing"))
        .assert()
        .success()
        .stdout(predicate::str::contains("0 places"));
}

#[test]
fn test_invalid_coordinate_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.osm");
    fs::write(
        &input,
        r#"<osm><node id="9" lat="forty"><tag k="name" v="x"/></node></osm>"#,
    )
    .unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    makeplaces()
        .arg(&input)
        .arg(&out)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid lat 'forty' on node 9"));
}
