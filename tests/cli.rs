//! Integration tests for the songsheet CLI.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the caller's settings.
fn songsheet(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("songsheet").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG");
    for key in [
        "SONGSHEET_CHORD_SUFFIXES",
        "SONGSHEET_THRESHOLD",
        "SONGSHEET_MODE",
        "SONGSHEET_STEPS",
        "SONGSHEET_HALF_STEP",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn transposes_stdin_to_stdout() {
    let home = tempfile::tempdir().unwrap();
    songsheet(&home)
        .write_stdin("C   G\nHello world\n")
        .assert()
        .success()
        .stdout("D   A\nHello world\n")
        .stderr(predicate::str::contains("2 lines transposed"));
}

#[test]
fn removes_chords_with_flag() {
    let home = tempfile::tempdir().unwrap();
    songsheet(&home)
        .arg("--remove")
        .write_stdin("C   G   Am   F\nHello world\n")
        .assert()
        .success()
        .stdout("Hello world\n")
        .stderr(predicate::str::contains("1 lines deposed"));
}

#[test]
fn negative_steps_and_half_step() {
    let home = tempfile::tempdir().unwrap();
    songsheet(&home)
        .args(["--steps", "-1", "--half-step"])
        .write_stdin("D\n")
        .assert()
        .success()
        .stdout("C#\n");
}

#[test]
fn reads_settings_from_env() {
    let home = tempfile::tempdir().unwrap();
    songsheet(&home)
        .env("SONGSHEET_MODE", "remove")
        .env("SONGSHEET_THRESHOLD", "0")
        .write_stdin("C G xyz F\nC G\n")
        .assert()
        .success()
        .stdout("C G xyz F\n");
}

#[test]
fn file_input_and_output() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("song.txt");
    let output = home.path().join("out.txt");
    fs_err::write(&input, "Bb\nPraise\n").unwrap();

    songsheet(&home)
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs_err::read_to_string(&output).unwrap(), "C\nPraise\n");
}

#[test]
fn json_report_with_output_file() {
    let home = tempfile::tempdir().unwrap();
    let output = home.path().join("out.txt");

    songsheet(&home)
        .arg("--json")
        .arg("-o")
        .arg(&output)
        .write_stdin("A\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\": \"1 lines transposed\""));

    assert_eq!(fs_err::read_to_string(&output).unwrap(), "B\n");
}

#[test]
fn half_step_flag_overrides_env() {
    let home = tempfile::tempdir().unwrap();
    songsheet(&home)
        .env("SONGSHEET_HALF_STEP", "true")
        .arg("--half-step=false")
        .write_stdin("D\n")
        .assert()
        .success()
        .stdout("E\n");

    songsheet(&home)
        .env("SONGSHEET_HALF_STEP", "true")
        .write_stdin("D\n")
        .assert()
        .success()
        .stdout("F\n");
}

#[test]
fn selection_flag() {
    let home = tempfile::tempdir().unwrap();
    songsheet(&home)
        .args(["--remove", "--selection", "0..4"])
        .write_stdin("C G\nHello\nD A\n")
        .assert()
        .success()
        .stdout("Hello\nD A\n");
}

#[test]
fn json_report() {
    let home = tempfile::tempdir().unwrap();
    songsheet(&home)
        .arg("--json")
        .write_stdin("A\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"B\\n\""))
        .stdout(predicate::str::contains("\"summary\": \"1 lines transposed\""))
        .stdout(predicate::str::contains("\"mode\": \"transpose\""));
}

#[test]
fn out_of_range_steps_rejected() {
    let home = tempfile::tempdir().unwrap();
    songsheet(&home)
        .args(["--steps", "9"])
        .write_stdin("A\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("steps 9 out of range"));
}

#[test]
fn batch_directory() {
    let home = tempfile::tempdir().unwrap();
    let sheets = home.path().join("sheets");
    let out = home.path().join("out");
    fs_err::create_dir_all(&sheets).unwrap();
    fs_err::write(sheets.join("one.txt"), "E  A\nWords here\n").unwrap();

    songsheet(&home)
        .arg("--dir")
        .arg(&sheets)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("one.txt: 2 lines transposed"));

    assert_eq!(fs_err::read_to_string(out.join("one.txt")).unwrap(), "F#  B\nWords here\n");
}
