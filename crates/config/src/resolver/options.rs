//! Option-function builder for project resolution.
//!
//! Responsibilities:
//! - Hold the per-invocation resolution inputs (`ProjectOptions`).
//! - Provide option functions that mutate those inputs in caller order.
//! - Compute the working directory from the inputs gathered so far.
//!
//! Does NOT handle:
//! - Path discovery, file reading, or loading (see assembler.rs).
//!
//! Invariants / Assumptions:
//! - Option functions run in the order given; later ones may overwrite
//!   earlier ones. There is no fixed precedence between sources.
//! - The ambient environment is an injected `EnvSnapshot`, never read implicitly.
//! - A `ProjectOptions` value is consumed by exactly one assembly.

use std::fmt;
use std::path::{Path, PathBuf};

use super::env::EnvSnapshot;
use super::environment::EnvironmentMerger;
use super::error::ConfigError;
use super::paths::absolute_clean;
use crate::constants::STDIN_PATH;
use crate::types::{LoadDirective, LoadOptions};

/// A single configuration-mutation step.
pub type OptionFn = Box<dyn FnOnce(&mut ProjectOptions) -> Result<(), ConfigError>>;

/// Inputs gathered for one project resolution.
pub struct ProjectOptions {
    name: Option<String>,
    working_dir: Option<PathBuf>,
    config_paths: Vec<String>,
    environment: EnvironmentMerger,
    load_directives: Vec<LoadDirective>,
    ambient: EnvSnapshot,
}

impl fmt::Debug for ProjectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectOptions")
            .field("name", &self.name)
            .field("working_dir", &self.working_dir)
            .field("config_paths", &self.config_paths)
            .field("environment", &self.environment.len())
            .field("load_directives", &self.load_directives.len())
            .finish()
    }
}

impl ProjectOptions {
    /// Create options for the given config paths.
    ///
    /// `ambient` is the environment consulted for overrides and by
    /// [`with_os_env`].
    pub fn new(config_paths: Vec<String>, ambient: EnvSnapshot) -> Self {
        Self {
            name: None,
            working_dir: None,
            config_paths,
            environment: EnvironmentMerger::new(),
            load_directives: Vec::new(),
            ambient,
        }
    }

    /// Apply option functions in order, stopping at the first error.
    pub fn apply<I>(mut self, steps: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = OptionFn>,
    {
        for step in steps {
            step(&mut self)?;
        }
        Ok(self)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn explicit_working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub fn set_working_dir(&mut self, dir: impl Into<PathBuf>) {
        self.working_dir = Some(dir.into());
    }

    pub fn config_paths(&self) -> &[String] {
        &self.config_paths
    }

    pub fn environment(&self) -> &EnvironmentMerger {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut EnvironmentMerger {
        &mut self.environment
    }

    pub fn ambient(&self) -> &EnvSnapshot {
        &self.ambient
    }

    pub fn push_load_directive(&mut self, directive: LoadDirective) {
        self.load_directives.push(directive);
    }

    pub fn load_directive_count(&self) -> usize {
        self.load_directives.len()
    }

    /// Working directory for this project.
    ///
    /// The explicit directory wins; otherwise the directory holding the first
    /// non-stdin config path; otherwise the process current directory.
    pub fn working_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = self.working_dir.as_ref().filter(|d| !d.as_os_str().is_empty()) {
            return Ok(dir.clone());
        }
        if let Some(first) = self.config_paths.iter().find(|p| p.as_str() != STDIN_PATH) {
            let absolute =
                absolute_clean(Path::new(first)).map_err(ConfigError::WorkingDirectory)?;
            if let Some(parent) = absolute.parent() {
                return Ok(parent.to_path_buf());
            }
        }
        std::env::current_dir().map_err(ConfigError::WorkingDirectory)
    }

    /// Directory that relative config paths and discovery start from.
    pub(crate) fn path_base_dir(&self) -> Result<PathBuf, ConfigError> {
        match self.working_dir.as_ref().filter(|d| !d.as_os_str().is_empty()) {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(ConfigError::WorkingDirectory),
        }
    }

    pub(crate) fn into_parts(self) -> (Option<String>, EnvironmentMerger, Vec<LoadDirective>) {
        (self.name, self.environment, self.load_directives)
    }
}

/// Set the project name.
pub fn with_name(name: impl Into<String>) -> OptionFn {
    let name = name.into();
    Box::new(move |o: &mut ProjectOptions| {
        o.set_name(name);
        Ok(())
    })
}

/// Set the working directory.
pub fn with_working_directory(dir: impl Into<PathBuf>) -> OptionFn {
    let dir = dir.into();
    Box::new(move |o: &mut ProjectOptions| {
        o.set_working_dir(dir);
        Ok(())
    })
}

/// Import `KEY=VALUE` entries into the interpolation environment.
pub fn with_env<I, S>(entries: I) -> OptionFn
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
    Box::new(move |o: &mut ProjectOptions| o.environment.import_explicit(&entries))
}

/// Import every variable of the ambient environment.
pub fn with_os_env() -> OptionFn {
    Box::new(|o: &mut ProjectOptions| {
        o.environment.import_process(&o.ambient);
        Ok(())
    })
}

/// Import the `.env` file from the working directory known at this point.
pub fn with_dotenv() -> OptionFn {
    Box::new(|o: &mut ProjectOptions| {
        let dir = o.working_dir()?;
        o.environment.import_dotenv(&dir)
    })
}

/// Ask the loader to drop `env_file` entries after resolving them.
pub fn with_discard_env_file() -> OptionFn {
    with_load_directive(Box::new(|opts: &mut LoadOptions| opts.discard_env_files = true))
}

/// Append an arbitrary load directive.
pub fn with_load_directive(directive: LoadDirective) -> OptionFn {
    Box::new(move |o: &mut ProjectOptions| {
        o.push_load_directive(directive);
        Ok(())
    })
}
