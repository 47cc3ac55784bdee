//! Configuration file path resolution.
//!
//! Responsibilities:
//! - Resolve explicit config paths against a base directory and check they exist.
//! - Honor the `COMPOSE_FILE` / `COMPOSE_FILE_SEPARATOR` overrides.
//! - Discover a conventionally named file in the base directory or its ancestors.
//!
//! Does NOT handle:
//! - Reading or parsing files (see reader.rs).
//!
//! Invariants / Assumptions:
//! - Priority is strict: explicit paths, then `COMPOSE_FILE`, then discovery.
//! - `-` entries are passed through untouched and never checked on disk.
//! - `COMPOSE_FILE` entries are neither resolved nor validated. Only an
//!   empty value counts as unset; surrounding whitespace is kept.
//! - Every path this module hands out is absolute and free of `.`/`..`.
//! - Discovery stops at the nearest directory holding any candidate; within
//!   that directory the fixed `DEFAULT_FILE_NAMES` order picks the winner.

use std::path::{Component, Path, PathBuf};

use super::env::EnvSnapshot;
use super::error::ConfigError;
use crate::constants::{
    COMPOSE_FILE, COMPOSE_FILE_SEPARATOR, DEFAULT_FILE_NAMES, PATH_LIST_SEPARATOR,
};
use crate::types::ConfigPath;

/// Outcome of path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Paths to open, absolute unless taken verbatim from `COMPOSE_FILE`.
    pub open: Vec<ConfigPath>,
    /// Paths as the caller specified (or discovery found) them.
    pub display: Vec<String>,
}

/// Decide which configuration files make up the project.
///
/// `base_dir` anchors relative explicit paths and is where discovery starts.
///
/// # Errors
///
/// - `ConfigError::ConfigFileNotFound` if an explicit path does not exist.
/// - `ConfigError::NoConfigurationFound` if discovery reaches the filesystem root.
pub fn resolve_config_paths(
    explicit: &[String],
    base_dir: &Path,
    ambient: &EnvSnapshot,
) -> Result<ResolvedPaths, ConfigError> {
    if !explicit.is_empty() {
        let open = explicit
            .iter()
            .map(|raw| resolve_explicit(raw, base_dir))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(ResolvedPaths {
            open,
            display: explicit.to_vec(),
        });
    }

    if let Some(joined) = ambient.get(COMPOSE_FILE).filter(|value| !value.is_empty()) {
        let separator = ambient
            .get(COMPOSE_FILE_SEPARATOR)
            .filter(|sep| !sep.is_empty())
            .unwrap_or(PATH_LIST_SEPARATOR);
        let listed: Vec<String> = joined.split(separator).map(str::to_string).collect();
        tracing::debug!(files = ?listed, "Using config files from {}", COMPOSE_FILE);
        return Ok(ResolvedPaths {
            open: listed.iter().map(|raw| ConfigPath::parse(raw)).collect(),
            display: listed,
        });
    }

    let winner = discover_config_file(base_dir)?;
    Ok(ResolvedPaths {
        display: vec![winner.display().to_string()],
        open: vec![ConfigPath::File(winner)],
    })
}

fn resolve_explicit(raw: &str, base_dir: &Path) -> Result<ConfigPath, ConfigError> {
    let path = match ConfigPath::parse(raw) {
        ConfigPath::Stdin => return Ok(ConfigPath::Stdin),
        ConfigPath::File(path) => {
            absolute_clean(&base_dir.join(path)).map_err(ConfigError::WorkingDirectory)?
        }
    };

    match std::fs::metadata(&path) {
        Ok(_) => Ok(ConfigPath::File(path)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ConfigError::ConfigFileNotFound { path })
        }
        Err(e) => Err(ConfigError::ConfigFileAccess { path, source: e }),
    }
}

/// Search `start` and then each ancestor for a conventionally named file.
///
/// If several candidates exist in the same directory, a warning lists them
/// and the first in preference order is returned.
pub fn discover_config_file(start: &Path) -> Result<PathBuf, ConfigError> {
    let start = absolute_clean(start).map_err(ConfigError::WorkingDirectory)?;
    let mut current = start.as_path();

    loop {
        let candidates: Vec<PathBuf> = DEFAULT_FILE_NAMES
            .iter()
            .map(|name| current.join(name))
            .filter(|candidate| candidate.exists())
            .collect();

        if let Some(winner) = candidates.first() {
            if candidates.len() > 1 {
                let listed = candidates
                    .iter()
                    .map(|c| c.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                tracing::warn!("Found multiple config files with supported names: {listed}");
                tracing::warn!("Using {}", winner.display());
            }
            return Ok(winner.clone());
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => {
                return Err(ConfigError::NoConfigurationFound {
                    start: start.clone(),
                });
            }
        }
    }
}

/// Make `path` absolute and fold away `.` and `..` components lexically.
///
/// `..` at the root stays at the root. Symlinks are not resolved.
pub(crate) fn absolute_clean(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut cleaned = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(cleaned.components().next_back(), Some(Component::Normal(_))) {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    Ok(cleaned)
}
