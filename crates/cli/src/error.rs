//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Errors that are not a `ConfigError` map to `GeneralError`.

use compose_config::ConfigError;

/// Structured exit codes for compose-resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure (I/O, working directory).
    GeneralError = 1,

    /// No configuration - an explicit file is missing or discovery found nothing.
    ///
    /// Scripts should pass `-f` or run from inside a project directory.
    NotFound = 4,

    /// Invalid input - malformed `.env`, `KEY=VALUE`, document, or project.
    ///
    /// Scripts should fix the input and not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::ConfigFileNotFound { .. } | ConfigError::NoConfigurationFound { .. } => {
                ExitCode::NotFound
            }

            ConfigError::MalformedEnvFile { .. }
            | ConfigError::InvalidKeyValueFormat { .. }
            | ConfigError::DocumentParse { .. }
            | ConfigError::Load(_) => ExitCode::ValidationError,

            ConfigError::ConfigFileAccess { .. }
            | ConfigError::EnvFileIo { .. }
            | ConfigError::EnvFileUnknown { .. }
            | ConfigError::ConfigFileRead { .. }
            | ConfigError::StdinRead(_)
            | ConfigError::WorkingDirectory(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for resolving exit codes from anyhow errors.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.downcast_ref::<ConfigError>()
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
