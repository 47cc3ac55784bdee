//! Boundary types shared between the resolver and its collaborators.
//!
//! Responsibilities:
//! - Model a configuration path (`ConfigPath`), including the stdin sentinel.
//! - Define the bundle handed to the external loader (`ConfigDetails`).
//! - Define the loader's own options (`LoadOptions`) and the directives
//!   that mutate them (`LoadDirective`).
//! - Define the loader's output (`Project`).
//!
//! Does NOT handle:
//! - Parsing or merging documents (see `boundary.rs` for the traits).
//! - Deciding which files or variables to use (see `resolver/`).

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::STDIN_PATH;

/// A parsed structured document, opaque to the resolver.
pub type Document = serde_yaml::Value;

/// Boxed error type used at collaborator boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Instruction applied to the loader's options before loading.
pub type LoadDirective = Box<dyn FnOnce(&mut LoadOptions) + Send>;

/// Where a single configuration document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigPath {
    /// Read the document from standard input.
    Stdin,
    /// Read the document from a file.
    File(PathBuf),
}

impl ConfigPath {
    /// Interpret a caller-supplied path string, recognizing `-` as stdin.
    pub fn parse(raw: &str) -> Self {
        if raw == STDIN_PATH {
            ConfigPath::Stdin
        } else {
            ConfigPath::File(PathBuf::from(raw))
        }
    }

    /// The filesystem path, if this is not the stdin sentinel.
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ConfigPath::Stdin => None,
            ConfigPath::File(path) => Some(path),
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, ConfigPath::Stdin)
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigPath::Stdin => f.write_str(STDIN_PATH),
            ConfigPath::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One parsed input document, tagged with the name it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigFile {
    pub filename: String,
    pub document: Document,
}

/// Everything the external loader needs to build a project.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDetails {
    /// Parsed documents, in override order (later files win).
    pub config_files: Vec<ConfigFile>,
    /// Absolute working directory.
    pub working_dir: PathBuf,
    /// Merged variables available for interpolation.
    pub environment: BTreeMap<String, String>,
}

/// The external loader's own options, shaped by load directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Final project name.
    pub name: String,
    /// Drop `env_file` entries once they have been resolved.
    pub discard_env_files: bool,
}

impl LoadOptions {
    /// Apply directives in order to the default options.
    ///
    /// Later directives observe and may overwrite earlier ones.
    pub fn from_directives(directives: Vec<LoadDirective>) -> Self {
        let mut options = Self::default();
        for directive in directives {
            directive(&mut options);
        }
        options
    }
}

/// A fully loaded project as returned by the external loader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub name: String,
    pub working_dir: PathBuf,
    /// Files the project was built from, as the caller specified them.
    pub compose_files: Vec<String>,
    #[serde(skip)]
    pub environment: BTreeMap<String, String>,
    /// Merged project model.
    pub model: Document,
}
