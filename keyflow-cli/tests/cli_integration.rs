//! Integration tests for the keyflow CLI

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_type_plain_text() {
    let mut cmd = Command::cargo_bin("keyflow").unwrap();
    cmd.arg("type").arg("hello world");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn test_type_with_backspaces() {
    let mut cmd = Command::cargo_bin("keyflow").unwrap();
    cmd.arg("type").arg("hellp").arg("--backspaces").arg("1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hell"))
        .stdout(predicate::str::contains("hellp").not());
}

#[test]
fn test_type_end_sentence() {
    let mut cmd = Command::cargo_bin("keyflow").unwrap();
    cmd.arg("type").arg("word   ").arg("--end-sentence");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("word. "));
}

#[test]
fn test_type_autocapitalize() {
    let mut cmd = Command::cargo_bin("keyflow").unwrap();
    cmd.arg("type").arg("one. two").arg("--autocapitalize");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("One. Two"));
}

#[test]
fn test_sentences_analysis() {
    let mut cmd = Command::cargo_bin("keyflow").unwrap();
    cmd.arg("sentences").arg("Hi. How are you");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("last sentence ended: false"))
        .stdout(predicate::str::contains("How are you"));
}

#[test]
fn test_sentences_json_output() {
    let mut cmd = Command::cargo_bin("keyflow").unwrap();
    cmd.arg("sentences").arg("Hello. ").arg("-f").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"last_sentence_ended\":true"));
}

#[test]
fn test_sentences_rejects_empty_delimiter() {
    let mut cmd = Command::cargo_bin("keyflow").unwrap();
    cmd.arg("sentences").arg("Hello.").arg("-d").arg("");

    cmd.assert().failure();
}
