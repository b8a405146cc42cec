//! CLI behavior tests for the `parlc` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_source(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write source");
    file
}

#[test]
fn cli_accepts_valid_program() {
    let file = write_source("fun g(x:int)->int { return x; }\n");
    Command::cargo_bin("parlc")
        .expect("binary")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok:"));
}

#[test]
fn cli_reports_semantic_error_with_code() {
    let file = write_source("fun g(x:int)->int { return z; }\n");
    Command::cargo_bin("parlc")
        .expect("binary")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("E3002"))
        .stderr(predicate::str::contains("`z`"));
}

#[test]
fn cli_reports_parse_error_with_line() {
    let file = write_source("fun g() -> int {\n  return 1\n}\n");
    Command::cargo_bin("parlc")
        .expect("binary")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2001"))
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn cli_reports_lex_error() {
    let file = write_source("let x: int = @;\n");
    Command::cargo_bin("parlc")
        .expect("binary")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("E1001"))
        .stderr(predicate::str::contains("unexpected character"));
}

#[test]
fn cli_emit_tokens() {
    let file = write_source("let x: int = 1;\n");
    Command::cargo_bin("parlc")
        .expect("binary")
        .args(["--emit", "tokens"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword(`let`)"))
        .stdout(predicate::str::contains("IntLiteral(`1`)"));
}

#[test]
fn cli_emit_ast() {
    let file = write_source("fun g()->int { return 1; }\n");
    Command::cargo_bin("parlc")
        .expect("binary")
        .args(["--emit", "ast"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Function"));
}

#[test]
fn cli_missing_input_file() {
    Command::cargo_bin("parlc")
        .expect("binary")
        .arg("no_such_file.parl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
