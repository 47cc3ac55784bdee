//! Centralized constants for the compose resolution workspace.
//!
//! File names and environment variable names live here so the resolver and
//! the CLI agree on them.

// =============================================================================
// Discovery
// =============================================================================

/// Conventional configuration file names, in order of preference.
pub const DEFAULT_FILE_NAMES: [&str; 4] = [
    "compose.yaml",
    "compose.yml",
    "docker-compose.yml",
    "docker-compose.yaml",
];

/// Path sentinel meaning "read this document from standard input".
pub const STDIN_PATH: &str = "-";

/// Name of the dotenv file looked up in the working directory.
pub const DOTENV_FILE_NAME: &str = ".env";

/// Separator used to split `COMPOSE_FILE` when no override is set.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: &str = ";";

/// Separator used to split `COMPOSE_FILE` when no override is set.
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: &str = ":";

// =============================================================================
// Environment overrides
// =============================================================================

/// Overrides the derived project name.
pub const COMPOSE_PROJECT_NAME: &str = "COMPOSE_PROJECT_NAME";

/// Delimiter-joined list of configuration files to load.
pub const COMPOSE_FILE: &str = "COMPOSE_FILE";

/// Overrides the delimiter used to split `COMPOSE_FILE`.
pub const COMPOSE_FILE_SEPARATOR: &str = "COMPOSE_FILE_SEPARATOR";
