//! Integration tests for environment merging from the command line.
//!
//! Responsibilities:
//! - Verify the `.env` < process < `--env` layering applied by the CLI.
//! - Verify that `.env` loading can be disabled.
//! - Prove that invalid `.env` files fail without leaking secrets.

mod common;

use common::{compose_cmd, write_files};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_layering_dotenv_process_explicit() {
    let dir = TempDir::new().unwrap();
    write_files(
        dir.path(),
        &[(".env", "LAYER_A=dotenv\nLAYER_B=dotenv\nLAYER_C=dotenv\n")],
    );

    compose_cmd(dir.path())
        .env("LAYER_B", "process")
        .env("LAYER_C", "process")
        .args(["-e", "LAYER_C=explicit", "env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LAYER_A=dotenv\n"))
        .stdout(predicate::str::contains("LAYER_B=process\n"))
        .stdout(predicate::str::contains("LAYER_C=explicit\n"));
}

#[test]
fn test_no_os_env_keeps_process_out() {
    let dir = TempDir::new().unwrap();

    compose_cmd(dir.path())
        .env("HOST_ONLY_VAR", "leak")
        .args(["--no-os-env", "-e", "ONLY=this", "env"])
        .assert()
        .success()
        .stdout("ONLY=this\n");
}

#[test]
fn test_disable_env_file_skips_malformed_dotenv() {
    let dir = TempDir::new().unwrap();
    write_files(dir.path(), &[(".env", "INVALID_LINE_WITHOUT_EQUALS")]);

    compose_cmd(dir.path())
        .env("COMPOSE_DISABLE_ENV_FILE", "1")
        .args(["--no-os-env", "env"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_disable_env_file_accepts_boolish_values() {
    let dir = TempDir::new().unwrap();
    write_files(dir.path(), &[(".env", "INVALID_LINE_WITHOUT_EQUALS")]);

    for enabled in ["true", "yes", "on"] {
        compose_cmd(dir.path())
            .env("COMPOSE_DISABLE_ENV_FILE", enabled)
            .args(["--no-os-env", "env"])
            .assert()
            .success();
    }

    // A falsey value keeps `.env` loading on, so the malformed file is read
    compose_cmd(dir.path())
        .env("COMPOSE_DISABLE_ENV_FILE", "0")
        .args(["--no-os-env", "env"])
        .assert()
        .code(5);
}

#[test]
fn test_invalid_dotenv_fails_without_leaking_secrets() {
    let dir = TempDir::new().unwrap();
    let secret = "supersecret_token_12345";
    write_files(
        dir.path(),
        &[(
            ".env",
            &format!("DB_PASSWORD={secret}\nINVALID_LINE_WITHOUT_EQUALS"),
        )],
    );

    compose_cmd(dir.path())
        .arg("env")
        .assert()
        .code(5)
        .stderr(predicate::str::contains(".env"))
        .stderr(predicate::str::contains(secret).not());
}

#[test]
fn test_malformed_env_flag_is_rejected() {
    let dir = TempDir::new().unwrap();

    compose_cmd(dir.path())
        .args(["-e", "NO_EQUALS", "env"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("NO_EQUALS"));
}
