//! Integration tests for the `jsontree` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise every subcommand
//! through the actual binary, including stdin/stdout piping, file I/O, shape
//! mismatch reporting and the non-JSON fallback.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the message.json fixture (a top-level object).
fn message_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/message.json")
}

/// Helper: path to the batch.json fixture (a top-level array).
fn batch_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/batch.json")
}

fn jsontree() -> Command {
    Command::cargo_bin("jsontree").unwrap()
}

fn stdout_json(args: &[&str]) -> serde_json::Value {
    let output = jsontree().args(args).output().expect("command should run");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// convert
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn convert_stdin_to_stdout() {
    jsontree()
        .arg("convert")
        .write_stdin(r#"{"id":7,"ok":true}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "7""#))
        .stdout(predicate::str::contains(r#""ok": "true""#));
}

#[test]
fn convert_file_preserves_order_and_stringifies_scalars() {
    let value = stdout_json(&["convert", "-i", message_json_path()]);
    let map = value.as_object().unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["orderId", "total", "paid", "customer", "items", "notes"]
    );
    assert_eq!(value["total"], "129.95");
    assert_eq!(value["customer"]["email"], serde_json::Value::Null);
    assert_eq!(value["items"][0]["qty"], "2");
    assert_eq!(value["notes"], serde_json::json!([]));
}

#[test]
fn convert_non_json_yields_plain_string() {
    jsontree()
        .arg("convert")
        .write_stdin("not-json")
        .assert()
        .success()
        .stdout("\"not-json\"\n");
}

#[test]
fn convert_file_to_file() {
    let output_path = "/tmp/jsontree-test-convert-output.json";
    let _ = std::fs::remove_file(output_path);

    jsontree()
        .args(["convert", "-i", batch_json_path(), "-o", output_path])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"id": "1"}, {"id": "2"}, "three", null])
    );

    let _ = std::fs::remove_file(output_path);
}

// ─────────────────────────────────────────────────────────────────────────────
// keys / values
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn keys_in_document_order() {
    let value = stdout_json(&["keys", "-i", message_json_path()]);
    assert_eq!(
        value,
        serde_json::json!(["orderId", "total", "paid", "customer", "items", "notes"])
    );
}

#[test]
fn values_follow_keys() {
    jsontree()
        .arg("values")
        .write_stdin(r#"{"b":1,"a":"x"}"#)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#"(?s)"1".*"x""#).unwrap());
}

#[test]
fn keys_on_array_is_unprocessable() {
    jsontree()
        .args(["keys", "-i", batch_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unprocessable input"))
        .stderr(predicate::str::contains("not an object"));
}

#[test]
fn values_on_plain_text_is_unprocessable() {
    jsontree()
        .arg("values")
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("found string"));
}

// ─────────────────────────────────────────────────────────────────────────────
// stringify / shape
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stringify_unquotes_strings() {
    jsontree()
        .arg("stringify")
        .write_stdin(r#""abc""#)
        .assert()
        .success()
        .stdout("abc\n");
}

#[test]
fn stringify_renders_objects_compactly() {
    jsontree()
        .arg("stringify")
        .write_stdin("{ \"a\" : 1 }")
        .assert()
        .success()
        .stdout("{\"a\":1}\n");
}

#[test]
fn stringify_null() {
    jsontree()
        .arg("stringify")
        .write_stdin("null")
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn shape_reports_top_level_kind() {
    for (input, expected) in [
        ("{}", "object\n"),
        ("[]", "array\n"),
        ("\"s\"", "string\n"),
        ("1.5", "scalar\n"),
        ("null", "null\n"),
        ("{oops", "string\n"),
    ] {
        jsontree()
            .arg("shape")
            .write_stdin(input)
            .assert()
            .success()
            .stdout(expected);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging and error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn verbose_logs_parse_fallback() {
    jsontree()
        .args(["--verbose", "convert"])
        .env_remove("RUST_LOG")
        .write_stdin("{broken")
        .assert()
        .success()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn quiet_by_default() {
    jsontree()
        .arg("convert")
        .env_remove("RUST_LOG")
        .write_stdin("{broken")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_input_file_fails() {
    jsontree()
        .args(["convert", "-i", "/nonexistent/path/message.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn no_subcommand_shows_usage() {
    jsontree()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
