//! End-to-end tests running the `resid` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn resid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resid"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RESID_FORMAT")
        .env_remove("RESID_CONFIG")
        .env_remove("RESID_LOG")
        .output()
        .expect("failed to run resid")
}

fn json_data(output: &Output) -> serde_json::Value {
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(value["schemaVersion"], "resid.cli.v1");
    value["data"].clone()
}

#[test]
fn encode_prints_uri() {
    let output = resid(&["encode", "--context", "17", "--entity", "42"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "urn:uuid:00000011-0000-002a-00fc-c0e11e000001"
    );
}

#[test]
fn encode_json_with_negative_ids() {
    let output = resid(&[
        "--format", "json", "encode", "--context", "-1", "--entity", "-1", "--type", "resource",
    ]);
    assert!(output.status.success());
    let data = json_data(&output);
    assert_eq!(data["uri"], "urn:uuid:ffffffff-ffff-ffff-00fc-c0e11e000003");
    assert_eq!(data["contextId"], -1);
    assert_eq!(data["calendarUserType"], "RESOURCE");
    assert_eq!(data["generation"], 2);
}

#[test]
fn decode_mixed_inputs_is_soft() {
    let output = resid(&[
        "--format",
        "json",
        "decode",
        "urn:uuid:00000011-0000-002a-00fc-c0e11e000001",
        "mailto:someone@example.com",
    ]);
    assert!(output.status.success());
    let data = json_data(&output);
    assert_eq!(data[0]["contextId"], 17);
    assert_eq!(data[0]["entityId"], 42);
    assert_eq!(data[0]["generation"], 2);
    assert!(data[1]["contextId"].is_null());
    assert!(data[1]["error"].is_string());
}

#[test]
fn decode_strict_fails_on_foreign_input() {
    let output = resid(&["decode", "--strict", "not-a-uuid"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn decode_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_resid"))
        .args(["--format", "json", "decode", "-"])
        .env("NO_COLOR", "1")
        .env_remove("RESID_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn resid");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"uuid:00000000-0011-0002-0000-00000000002a\n\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait resid");
    assert!(output.status.success());
    let data = json_data(&output);
    assert_eq!(data.as_array().map(Vec::len), Some(1));
    assert_eq!(data[0]["calendarUserType"], "GROUP");
    assert_eq!(data[0]["generation"], 1);
}

#[test]
fn inspect_legacy_json() {
    let output = resid(&[
        "--format",
        "json",
        "inspect",
        "00000000-0011-0001-0000-00000000002a",
    ]);
    assert!(output.status.success());
    let data = json_data(&output);
    assert_eq!(data["generation"], "legacy");
    assert_eq!(data["canonical"], false);
    assert_eq!(
        data["canonicalUri"],
        "urn:uuid:00000011-0000-002a-00fc-c0e11e000001"
    );
}

#[test]
fn config_file_sets_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"default_type": "GROUP", "format": "json"}"#).expect("write");

    let output = resid(&[
        "--config",
        path.to_str().expect("utf-8 path"),
        "encode",
        "--context",
        "1",
        "--entity",
        "2",
    ]);
    assert!(output.status.success());
    let data = json_data(&output);
    assert_eq!(data["calendarUserType"], "GROUP");
}

#[test]
fn missing_config_file_is_an_error() {
    let output = resid(&["--config", "/nonexistent/resid.json", "version"]);
    assert!(!output.status.success());
}
