//! Black-box tests for the bucket-split binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn bucket_split() -> Command {
    Command::cargo_bin("bucket-split").unwrap()
}

fn write(path: &Path, bytes: usize) {
    fs::write(path, vec![b'x'; bytes]).unwrap();
}

fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn splits_a_directory_and_prints_a_summary() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("media");
    fs::create_dir(&source).unwrap();
    for name in ["a", "b", "c", "d"] {
        write(&source.join(name), 10);
    }

    bucket_split()
        .arg(&source)
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("media-1"))
        .stdout(predicate::str::contains("media-2"))
        .stdout(predicate::str::contains("total: 40 B across 2 buckets"));

    assert!(names_in(&source).is_empty());
    assert_eq!(names_in(&tmp.path().join("media-1")).len(), 2);
    assert_eq!(names_in(&tmp.path().join("media-2")).len(), 2);
}

#[test]
fn exclude_patterns_leave_matches_in_place() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("media");
    fs::create_dir(&source).unwrap();
    write(&source.join("a.txt"), 100);
    write(&source.join("b.tmp"), 500);
    write(&source.join("c.txt"), 100);

    bucket_split()
        .arg(&source)
        .arg("2")
        .arg("--exclude")
        .arg("*.tmp")
        .assert()
        .success();

    assert_eq!(names_in(&source), ["b.tmp"]);
    assert_eq!(names_in(&tmp.path().join("media-1")), ["a.txt"]);
    assert_eq!(names_in(&tmp.path().join("media-2")), ["c.txt"]);
}

#[test]
fn missing_directory_exits_with_usage_status() {
    let tmp = tempfile::tempdir().unwrap();
    bucket_split()
        .arg(tmp.path().join("nope"))
        .arg("2")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn non_integer_part_count_exits_with_usage_status() {
    bucket_split()
        .arg("somewhere")
        .arg("many")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NUM_PARTS"));
}

#[test]
fn pre_existing_bucket_directory_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("media");
    fs::create_dir(&source).unwrap();
    write(&source.join("a"), 10);
    fs::create_dir(tmp.path().join("media-1")).unwrap();

    bucket_split()
        .arg(&source)
        .arg("1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(names_in(&source), ["a"]);
}

#[test]
fn version_flag_prints_the_tool_version() {
    bucket_split()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bucket-split 0.1.0"));
}

#[test]
fn help_flag_prints_usage() {
    bucket_split()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("usage:"))
        .stdout(predicate::str::contains("--exclude"));
}
