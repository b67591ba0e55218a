//
//  dockerhub
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Builds a `dh` command isolated from the caller's environment and config.
fn dh(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dh").unwrap();
    cmd.env("DH_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("DOCKER_USERNAME")
        .env_remove("DOCKER_PASSWORD")
        .env_remove("DH_BASE_URL")
        .env_remove("DH_DEBUG");
    cmd
}

#[test]
fn help_lists_resource_commands() {
    let dir = TempDir::new().unwrap();
    dh(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("repo"))
        .stdout(predicate::str::contains("repo-group"))
        .stdout(predicate::str::contains("token"));
}

#[test]
fn version_prints_package_version() {
    let dir = TempDir::new().unwrap();
    dh(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_username_is_reported() {
    let dir = TempDir::new().unwrap();
    dh(&dir)
        .args(["repo", "view", "acme/api"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No Docker ID given"));
}

#[test]
fn malformed_repository_argument_is_rejected() {
    let dir = TempDir::new().unwrap();
    dh(&dir)
        .args(["repo", "view", "just-a-name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected NAMESPACE/NAME"));
}

#[test]
fn config_set_then_get_round_trips() {
    let dir = TempDir::new().unwrap();
    dh(&dir)
        .args(["config", "set", "timeout_secs", "30"])
        .assert()
        .success();
    dh(&dir)
        .args(["config", "get", "timeout_secs"])
        .assert()
        .success()
        .stdout(predicate::str::diff("30\n"));
}

#[test]
fn config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    dh(&dir)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn repo_view_prints_json_from_api() {
    let mut server = mockito::Server::new();
    let _login = server
        .mock("POST", "/v2/users/login/")
        .with_status(200)
        .with_body(r#"{"token": "jwt-123"}"#)
        .create();
    let _repo = server
        .mock("GET", "/v2/repositories/acme/api/")
        .match_header("authorization", "JWT jwt-123")
        .with_status(200)
        .with_body(r#"{"user": "acme", "name": "api", "namespace": "acme", "description": "", "is_private": true}"#)
        .create();

    let dir = TempDir::new().unwrap();
    dh(&dir)
        .env("DOCKER_USERNAME", "alice")
        .env("DOCKER_PASSWORD", "s3cret")
        .env("DH_BASE_URL", format!("{}/v2", server.url()))
        .args(["--json", "repo", "view", "acme/api"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "api""#))
        .stdout(predicate::str::contains(r#""is_private": true"#));
}

#[test]
fn password_stdin_overrides_password_from_env() {
    let mut server = mockito::Server::new();
    let login = server
        .mock("POST", "/v2/users/login/")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "username": "alice",
            "password": "from-stdin"
        })))
        .with_status(200)
        .with_body(r#"{"token": "jwt-123"}"#)
        .create();
    let _repo = server
        .mock("GET", "/v2/repositories/acme/api/")
        .with_status(200)
        .with_body(r#"{"name": "api", "namespace": "acme", "description": "", "is_private": false}"#)
        .create();

    let dir = TempDir::new().unwrap();
    dh(&dir)
        .env("DOCKER_USERNAME", "alice")
        .env("DOCKER_PASSWORD", "from-env")
        .env("DH_BASE_URL", format!("{}/v2", server.url()))
        .args(["--json", "--password-stdin", "repo", "view", "acme/api"])
        .write_stdin("from-stdin\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "api""#));

    login.assert();
}

#[test]
fn not_found_maps_to_exit_code() {
    let mut server = mockito::Server::new();
    let _login = server
        .mock("POST", "/v2/users/login/")
        .with_status(200)
        .with_body(r#"{"token": "jwt-123"}"#)
        .create();
    let _group = server
        .mock("GET", "/v2/orgs/acme/groups/ghosts/")
        .with_status(404)
        .with_body(r#"{"detail": "Not found"}"#)
        .create();

    let dir = TempDir::new().unwrap();
    dh(&dir)
        .env("DOCKER_USERNAME", "alice")
        .env("DOCKER_PASSWORD", "s3cret")
        .env("DH_BASE_URL", format!("{}/v2", server.url()))
        .args(["group", "view", "acme", "ghosts"])
        .assert()
        .failure()
        .code(8)
        .stderr(predicate::str::contains(r#"{"detail": "Not found"}"#));
}

#[test]
fn rejected_login_maps_to_auth_exit_code() {
    let mut server = mockito::Server::new();
    let _login = server
        .mock("POST", "/v2/users/login/")
        .with_status(401)
        .with_body(r#"{"detail": "Incorrect authentication credentials"}"#)
        .create();

    let dir = TempDir::new().unwrap();
    dh(&dir)
        .env("DOCKER_USERNAME", "alice")
        .env("DOCKER_PASSWORD", "wrong")
        .env("DH_BASE_URL", format!("{}/v2", server.url()))
        .args(["token", "view", "b30bbf97-506c-4ecd-aabc-842f3cb484fb"])
        .assert()
        .failure()
        .code(4);
}
