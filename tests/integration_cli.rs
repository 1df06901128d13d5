#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn collapse_args() {
    let mut cmd = Command::cargo_bin("ffold").unwrap();
    cmd.args([
        "collapse",
        "shot.0001.exr",
        "shot.0002.exr",
        "shot.0003.exr",
        "readme.txt",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("readme.txt\nshot.1-3.exr\n"));
}

#[test]
fn collapse_stdin() {
    let mut cmd = Command::cargo_bin("ffold").unwrap();
    cmd.arg("collapse")
        .write_stdin("a.5.png\nb.01.png\nb.02.png\n");
    cmd.assert()
        .success()
        .stdout(predicate::eq("a.5-5.png\nb.1-2.png\n"));
}

#[test]
fn min_members_keeps_singletons() {
    let mut cmd = Command::cargo_bin("ffold").unwrap();
    cmd.args(["collapse", "--min-members", "2", "a.5.png"]);
    cmd.assert().success().stdout(predicate::eq("a.5.png\n"));
}

#[test]
fn empty_selection_prints_nothing() {
    let mut cmd = Command::cargo_bin("ffold").unwrap();
    cmd.arg("collapse").write_stdin("");
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn scan_with_filter_and_json() {
    let dir = tempdir().unwrap();
    for frame in [1, 2, 10] {
        fs::write(dir.path().join(format!("bg.{frame:03}.tif")), "").unwrap();
    }
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let mut cmd = Command::cargo_bin("ffold").unwrap();
    cmd.args(["scan", dir.path().to_str().unwrap(), "--filter", "tif"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bg.1-10.tif"))
        .stdout(predicate::str::contains("notes.txt").not());

    let mut cmd = Command::cargo_bin("ffold").unwrap();
    cmd.args(["scan", dir.path().to_str().unwrap(), "--json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"template\""))
        .stdout(predicate::str::contains("bg.###.tif"))
        .stdout(predicate::str::contains("\"count\": 3"));
}

#[test]
fn scan_missing_dir_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let mut cmd = Command::cargo_bin("ffold").unwrap();
    cmd.args(["scan", missing.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}
