//! Integration tests for the poly-schema binary.
//!
//! Tests that need a live Polypheny server probe the default port first and
//! skip when nothing is listening; everything else runs offline.

use std::fs;
use std::net::TcpStream;
use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

const SERVER_ADDR: &str = "localhost:20591";

fn is_server_running() -> bool {
    use std::net::ToSocketAddrs;
    SERVER_ADDR
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .map(|addr| TcpStream::connect_timeout(&addr, Duration::from_millis(500)).is_ok())
        .unwrap_or(false)
}

fn schema_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_poly-schema"))
}

#[test]
fn help_documents_positionals_and_connection_flags() {
    schema_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema report extractor"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("DESCRIPTOR"))
        .stdout(predicate::str::contains("OUTPUT"));
}

#[test]
fn graph_datamodel_fails_before_any_connection() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = dir.path().join("schema.json");
    fs::write(&descriptor, r#"{"datamodel": "GRAPH", "tables": []}"#).unwrap();
    let output = dir.path().join("report.txt");

    // Point at a closed port: if validation happened after connecting this
    // would fail with a connection error instead of the datamodel message.
    schema_command()
        .arg(&descriptor)
        .arg(&output)
        .arg("--host")
        .arg("localhost")
        .arg("--port")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported datamodel"))
        .stderr(predicate::str::contains("GRAPH"));

    assert!(!output.exists(), "no report should be written on failure");
}

#[test]
fn malformed_descriptor_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = dir.path().join("schema.json");
    fs::write(&descriptor, "{ not json").unwrap();

    schema_command()
        .arg(&descriptor)
        .arg(dir.path().join("report.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid schema descriptor"));
}

#[test]
fn missing_descriptor_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    schema_command()
        .arg(dir.path().join("nope.json"))
        .arg(dir.path().join("report.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("file error"));
}

#[test]
fn empty_relational_descriptor_round_trips_against_live_server() {
    if !is_server_running() {
        eprintln!("server not running at {}, skipping", SERVER_ADDR);
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let descriptor = dir.path().join("schema.json");
    fs::write(&descriptor, r#"{"datamodel": "RELATIONAL", "tables": []}"#).unwrap();
    let output = dir.path().join("report.txt");

    schema_command()
        .arg(&descriptor)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 tables inspected"));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("0 tables inspected"));
}
