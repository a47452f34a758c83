// File: crates/bench-plot/tests/cli.rs
// Purpose: End-to-end runs of the binary: exit codes and headless output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn bin() -> Command {
    Command::cargo_bin("crdt-bench-plot").expect("binary built")
}

#[test]
fn missing_input_fails_with_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    bin()
        .current_dir(dir.path())
        .arg("--headless")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file not found"));
    // nothing rendered
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn parse_error_fails_before_rendering() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("out.csv");
    std::fs::write(&input, "changes,avg_ms\n10,1.5\nabc,1.0\n").expect("write csv");

    bin()
        .current_dir(dir.path())
        .arg("--headless")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3, field 0"));
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn headless_run_writes_image_next_to_default_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut f = std::fs::File::create(dir.path().join("out.csv")).expect("create csv");
    writeln!(f, "changes,avg_ms\n10,1.5\n20,2.75\n30,4.0").expect("write csv");
    drop(f);

    bin()
        .current_dir(dir.path())
        .arg("--headless")
        .assert()
        .success()
        .stdout(predicate::str::contains("out.png"));
    let bytes = std::fs::read(dir.path().join("out.png")).expect("image written");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn header_only_input_renders_to_explicit_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("bench.csv");
    let output = dir.path().join("charts/bench.png");
    std::fs::write(&input, "changes,avg_ms\n").expect("write csv");

    bin()
        .arg(&input)
        .arg("--headless")
        .arg("--output")
        .arg(&output)
        .arg("--theme")
        .arg("dark")
        .assert()
        .success();
    assert!(output.exists());
}
