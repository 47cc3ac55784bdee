//! Project assembly: drives resolution end to end and calls the loader.
//!
//! Responsibilities:
//! - Resolve config paths, read and parse them, pick the working directory
//!   and project name, and invoke the `ProjectLoader`.
//! - Stamp the loaded project with the file list as the caller specified it.
//!
//! Does NOT handle:
//! - Merging, interpolation, or validation of documents (the loader's job).
//!
//! Invariants:
//! - Any failure aborts the whole sequence; no partial project is returned.
//! - The name directive is appended last, so it overrides earlier name directives.
//! - The loader receives the absolute, lexically cleaned working directory.

use std::io::Read;

use super::error::ConfigError;
use super::name::resolve_project_name;
use super::options::ProjectOptions;
use super::paths::{absolute_clean, resolve_config_paths};
use super::reader::read_config_files;
use crate::boundary::{DocumentParser, ProjectLoader};
use crate::types::{ConfigDetails, LoadOptions, Project};

/// Builds a `Project` from `ProjectOptions` using the given collaborators.
pub struct ProjectAssembler<'a> {
    parser: &'a dyn DocumentParser,
    loader: &'a dyn ProjectLoader,
    stdin: Box<dyn Read + 'a>,
}

impl<'a> ProjectAssembler<'a> {
    /// Create an assembler that reads `-` entries from the process stdin.
    pub fn new(parser: &'a dyn DocumentParser, loader: &'a dyn ProjectLoader) -> Self {
        Self {
            parser,
            loader,
            stdin: Box::new(std::io::stdin()),
        }
    }

    /// Replace the source used for `-` entries.
    pub fn with_stdin(mut self, stdin: impl Read + 'a) -> Self {
        self.stdin = Box::new(stdin);
        self
    }

    /// Resolve and load the project described by `options`.
    pub fn build(mut self, options: ProjectOptions) -> Result<Project, ConfigError> {
        let base_dir = options.path_base_dir()?;
        let resolved = resolve_config_paths(options.config_paths(), &base_dir, options.ambient())?;
        tracing::debug!(files = ?resolved.display, "Resolved config paths");

        let config_files = read_config_files(&resolved.open, &mut *self.stdin, self.parser)?;

        let working_dir =
            absolute_clean(&options.working_dir()?).map_err(ConfigError::WorkingDirectory)?;
        let name = resolve_project_name(options.name(), options.ambient(), &working_dir);
        tracing::debug!(
            working_dir = %working_dir.display(),
            project = %name,
            "Resolved project identity"
        );

        let (_, environment, mut directives) = options.into_parts();
        directives.push(Box::new(move |opts: &mut LoadOptions| opts.name = name));

        let details = ConfigDetails {
            config_files,
            working_dir,
            environment: environment.into_map(),
        };
        let mut project = self
            .loader
            .load(details, directives)
            .map_err(ConfigError::Load)?;

        project.compose_files = resolved.display;
        Ok(project)
    }
}
