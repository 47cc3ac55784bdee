//! Error types for project resolution.
//!
//! Responsibilities:
//! - Define error variants for every resolution failure.
//! - Keep "file not found" distinct from "file malformed".
//!
//! Does NOT handle:
//! - Errors raised inside the external loader beyond passing them through.
//!
//! Invariants:
//! - All variants include context for debugging (paths, entries, positions).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Loader errors are propagated unchanged (`Load` is transparent).

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::BoxError;

/// Errors that can occur while resolving a project.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    ConfigFileNotFound { path: PathBuf },

    #[error("Cannot access configuration file {}: {source}", path.display())]
    ConfigFileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "Can't find a suitable configuration file in {} or any parent directory",
        start.display()
    )]
    NoConfigurationFound { start: PathBuf },

    /// The `.env` file has invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error("Failed to parse {} at position {error_index}", path.display())]
    MalformedEnvFile { path: PathBuf, error_index: usize },

    /// The `.env` file exists but could not be read.
    #[error("Failed to read .env file: {kind}")]
    EnvFileIo { kind: ErrorKind },

    /// Any other failure reported while loading `.env`.
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load {}", path.display())]
    EnvFileUnknown { path: PathBuf },

    #[error("Invalid environment entry '{entry}': expected KEY=VALUE")]
    InvalidKeyValueFormat { entry: String },

    #[error("Failed to read configuration file {}: {source}", path.display())]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read configuration from standard input: {0}")]
    StdinRead(std::io::Error),

    #[error("Failed to parse {filename}: {source}")]
    DocumentParse { filename: String, source: BoxError },

    #[error("Unable to determine working directory: {0}")]
    WorkingDirectory(std::io::Error),

    #[error(transparent)]
    Load(BoxError),
}
