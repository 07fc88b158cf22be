//
//  pagerduty-backend
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `pd` isolated from the caller's environment and configuration.
fn pd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pd").unwrap();
    cmd.env_remove("PAGERDUTY_API_TOKEN")
        .env_remove("PAGERDUTY_API_BASE_URL")
        .env_remove("PD_DEBUG")
        .env("PD_CONFIG", config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn help_lists_operations() {
    let dir = TempDir::new().unwrap();
    let output = pd(&dir).arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for command in [
        "escalation-policies",
        "abilities",
        "oncall",
        "service-by-key",
        "services",
        "change-events",
        "incidents",
        "standards",
        "metrics",
        "config",
    ] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    pd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_token_exits_with_auth_code() {
    let dir = TempDir::new().unwrap();
    pd(&dir)
        .args(["--base-url", "http://127.0.0.1:9", "service", "PSVC1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No PagerDuty API token configured"));
}

#[test]
fn service_printed_as_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/services/PSVC1")
        .match_query(mockito::Matcher::Any)
        .match_header("authorization", "Token token=secret")
        .with_body(r#"{"service": {"id": "PSVC1", "name": "Checkout"}}"#)
        .create();

    let dir = TempDir::new().unwrap();
    pd(&dir)
        .args(["--base-url", &server.url(), "--token", "secret", "--compact", "service", "PSVC1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"Checkout""#));

    mock.assert();
}

#[test]
fn not_found_exits_with_not_found_code() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/services/PGONE")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .create();

    let dir = TempDir::new().unwrap();
    pd(&dir)
        .env("PAGERDUTY_API_TOKEN", "secret")
        .args(["--base-url", &server.url(), "service", "PGONE"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains(
            "Failed to get service. The requested resource was not found.",
        ));
}

#[test]
fn config_show_masks_token() {
    let dir = TempDir::new().unwrap();
    pd(&dir)
        .args(["--token", "u+supersecrettoken", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://api.pagerduty.com"))
        .stdout(predicate::str::contains("\"token\""))
        .stdout(predicate::str::contains("supersecret").not());
}

#[test]
fn config_set_then_get() {
    let dir = TempDir::new().unwrap();
    pd(&dir)
        .args(["config", "set", "base_url", "https://api.eu.pagerduty.com"])
        .assert()
        .success();

    pd(&dir)
        .args(["config", "get", "api.base_url"])
        .assert()
        .success()
        .stdout("https://api.eu.pagerduty.com\n");

    pd(&dir)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown configuration key"));
}
