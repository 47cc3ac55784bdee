//! Project input resolution.
//!
//! Responsibilities:
//! - Build per-invocation `ProjectOptions` from ordered option functions.
//! - Merge interpolation variables from the ambient environment, `.env`, and
//!   explicit `KEY=VALUE` entries.
//! - Locate configuration files (explicit, `COMPOSE_FILE`, or upward discovery).
//! - Read and parse those files, derive the project name, and hand everything
//!   to a `ProjectLoader`.
//!
//! Does NOT handle:
//! - Parsing document syntax or building the project model (see `boundary.rs`).
//! - Command-line parsing (see `crates/cli`).
//!
//! Invariants / Assumptions:
//! - Option order is the only precedence between variable sources.
//! - Overrides are read from an injected `EnvSnapshot`, not from the process.
//! - Every failure is terminal; the only non-fatal condition is the
//!   multiple-candidate discovery warning.

mod assembler;
mod env;
mod environment;
mod error;
mod name;
mod options;
mod paths;
mod reader;

pub use assembler::ProjectAssembler;
pub use env::EnvSnapshot;
pub use environment::{EnvironmentMerger, parse_key_value};
pub use error::ConfigError;
pub use name::{derive_project_name, normalize_project_name, resolve_project_name};
pub use options::{
    OptionFn, ProjectOptions, with_discard_env_file, with_dotenv, with_env, with_load_directive,
    with_name, with_os_env, with_working_directory,
};
pub use paths::{ResolvedPaths, discover_config_file, resolve_config_paths};
pub use reader::read_config_files;

#[cfg(test)]
mod tests;
