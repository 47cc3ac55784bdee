//! Shared test utilities for compose-resolve integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Provide a helper that lays out a project directory.
//!
//! Invariants / Assumptions:
//! - `COMPOSE_*` overrides from the host never reach the command.
//! - `RUST_LOG` is cleared so the default `warn` filter applies.

use std::fs;
use std::path::Path;

use assert_cmd::Command;

/// Returns a hermetic `compose-resolve` command running in `dir`.
pub fn compose_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("compose-resolve");
    cmd.current_dir(dir);

    // Clear potential host leakage
    cmd.env_remove("COMPOSE_FILE")
        .env_remove("COMPOSE_FILE_SEPARATOR")
        .env_remove("COMPOSE_PROJECT_NAME")
        .env_remove("COMPOSE_DISABLE_ENV_FILE")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `files` (name, content) under `dir`, creating parent directories.
#[allow(dead_code)]
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}
