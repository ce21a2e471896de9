#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn notez_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("notez").unwrap();
    cmd.env("NOTEZ_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("NOTEZ_LOG");
    cmd
}

#[test]
fn test_create_list_edit_delete() {
    let home = TempDir::new().unwrap();

    notez_cmd(&home)
        .args(["create", "buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created (1): buy milk"));

    notez_cmd(&home)
        .args(["n", "call mom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created (2): call mom"));

    notez_cmd(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. buy milk"))
        .stdout(predicate::str::contains("2. call mom"))
        .stdout(predicate::str::contains("Suggestion: Please go online"));

    notez_cmd(&home)
        .args(["edit", "1", "buy oat milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated (1): buy oat milk"));

    notez_cmd(&home)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted (1): buy oat milk"));

    // Naked invocation lists
    notez_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. call mom"))
        .stdout(predicate::str::contains("buy").not());
}

#[test]
fn test_empty_note_is_not_saved() {
    let home = TempDir::new().unwrap();

    notez_cmd(&home)
        .args(["create", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to save"));

    notez_cmd(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn test_create_from_stdin() {
    let home = TempDir::new().unwrap();

    notez_cmd(&home)
        .arg("create")
        .write_stdin("piped note\nsecond line\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created (1): piped note"));

    notez_cmd(&home)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("piped note\nsecond line"));
}

#[test]
fn test_bad_index_fails() {
    let home = TempDir::new().unwrap();
    notez_cmd(&home).args(["create", "only"]).assert().success();

    notez_cmd(&home)
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: "))
        .stderr(predicate::str::contains("Index 5 not found"));

    notez_cmd(&home)
        .args(["view", "zero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid index format"));
}

#[test]
fn test_delete_range() {
    let home = TempDir::new().unwrap();
    for c in ["a1", "b2", "c3", "d4"] {
        notez_cmd(&home).args(["create", c]).assert().success();
    }

    notez_cmd(&home).args(["delete", "2-3"]).assert().success();

    notez_cmd(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. a1"))
        .stdout(predicate::str::contains("2. d4"))
        .stdout(predicate::str::contains("b2").not());
}

#[test]
fn test_unreachable_suggestions_is_a_warning() {
    let home = TempDir::new().unwrap();
    notez_cmd(&home).args(["create", "draft"]).assert().success();

    notez_cmd(&home)
        .args(["config", "suggestions-url", "http://127.0.0.1:9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("suggestions-url set to http://127.0.0.1:9"));

    notez_cmd(&home)
        .args(["suggest", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions available"));
}

#[test]
fn test_suggest_without_config_fails() {
    let home = TempDir::new().unwrap();
    notez_cmd(&home).args(["create", "draft"]).assert().success();

    notez_cmd(&home)
        .args(["suggest", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("suggestions-url is not set"));
}

#[test]
fn test_config_show_all() {
    let home = TempDir::new().unwrap();

    notez_cmd(&home)
        .args(["config", "timeout", "25"])
        .assert()
        .success();

    notez_cmd(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("timeout = 25"))
        .stdout(predicate::str::contains("backend-url = (unset)"));
}

#[test]
fn test_path_and_data_dir_flag() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();

    notez_cmd(&home)
        .args(["--data-dir", other.path().to_str().unwrap(), "create", "elsewhere"])
        .assert()
        .success();

    assert!(other.path().join("notes.json").exists());
    assert!(!home.path().join("notes.json").exists());

    notez_cmd(&home)
        .args(["path", "--data-dir", other.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.json"));
}

#[test]
fn test_corrupt_notes_file_lists_empty() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("notes.json"), "{oops").unwrap();

    notez_cmd(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be read"))
        .stdout(predicate::str::contains("No notes found."));
}
