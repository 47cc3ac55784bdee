//! Merging of interpolation variables from several sources.
//!
//! Responsibilities:
//! - Hold the single variable mapping handed to the loader.
//! - Import variables from an environment snapshot, a `.env` file, or
//!   explicit `KEY=VALUE` strings.
//!
//! Does NOT handle:
//! - Deciding the order of imports. Callers control precedence by the order
//!   in which they import: the last writer wins.
//!
//! Invariants:
//! - No import removes a key; imports only set or overwrite.
//! - A missing `.env` file is a silent no-op.
//! - Explicit entries are validated as a batch before any is written.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use super::env::EnvSnapshot;
use super::error::ConfigError;
use crate::constants::DOTENV_FILE_NAME;

/// Variable mapping built from ordered imports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentMerger {
    vars: BTreeMap<String, String>,
}

impl EnvironmentMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy every variable from the snapshot, overwriting existing keys.
    pub fn import_process(&mut self, snapshot: &EnvSnapshot) {
        for (key, value) in snapshot.iter() {
            self.vars.insert(key.to_string(), value.to_string());
        }
    }

    /// Import `KEY=VALUE` entries, splitting each on its first `=`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKeyValueFormat` for the first entry without
    /// an `=`. Nothing is written when any entry is malformed.
    pub fn import_explicit<I, S>(&mut self, entries: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = entries
            .into_iter()
            .map(|entry| parse_key_value(entry.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.vars.extend(parsed);
        Ok(())
    }

    /// Import variables from the `.env` file in `dir`, if there is one.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MalformedEnvFile` if the file has invalid syntax.
    /// - `ConfigError::EnvFileIo` if the file exists but cannot be read.
    /// - `ConfigError::EnvFileUnknown` for any other `dotenvy` failure.
    ///
    /// `${VAR}` references are expanded by `dotenvy`, which looks in the
    /// process environment before the file's earlier entries. That lookup
    /// does not go through an `EnvSnapshot`.
    ///
    /// SAFETY: Error messages never include raw .env line contents.
    pub fn import_dotenv(&mut self, dir: &Path) -> Result<(), ConfigError> {
        let path = dir.join(DOTENV_FILE_NAME);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(ConfigError::EnvFileIo { kind: e.kind() }),
        };

        // Parse everything before writing so a malformed file changes nothing.
        let mut parsed = Vec::new();
        for item in dotenvy::from_read_iter(file) {
            match item {
                Ok(pair) => parsed.push(pair),
                Err(dotenvy::Error::LineParse(_, idx)) => {
                    return Err(ConfigError::MalformedEnvFile {
                        path,
                        error_index: idx,
                    });
                }
                Err(dotenvy::Error::Io(io_err)) => {
                    return Err(ConfigError::EnvFileIo {
                        kind: io_err.kind(),
                    });
                }
                Err(_) => return Err(ConfigError::EnvFileUnknown { path }),
            }
        }

        tracing::debug!(path = %path.display(), count = parsed.len(), "Imported .env file");
        self.vars.extend(parsed);
        Ok(())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.vars
    }

    /// Format the mapping as sorted `KEY=VALUE` strings.
    pub fn to_key_value_list(&self) -> Vec<String> {
        self.vars
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect()
    }
}

/// Split a `KEY=VALUE` string on its first `=`.
pub fn parse_key_value(entry: &str) -> Result<(String, String), ConfigError> {
    entry
        .split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| ConfigError::InvalidKeyValueFormat {
            entry: entry.to_string(),
        })
}
