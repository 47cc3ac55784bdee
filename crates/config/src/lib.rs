//! Project input resolution for compose-style multi-file configurations.
//!
//! This crate decides which configuration files define a project, which
//! working directory and name it has, and which variables feed
//! interpolation. Parsing and loading are delegated to the collaborators in
//! [`boundary`].

pub mod boundary;
pub mod constants;
mod resolver;
pub mod types;

pub use boundary::{DocumentParser, ProjectLoader, YamlParser};
pub use resolver::{
    ConfigError, EnvSnapshot, EnvironmentMerger, OptionFn, ProjectAssembler, ProjectOptions,
    ResolvedPaths, derive_project_name, discover_config_file, normalize_project_name,
    parse_key_value, read_config_files, resolve_config_paths, resolve_project_name,
    with_discard_env_file, with_dotenv, with_env, with_load_directive, with_name, with_os_env,
    with_working_directory,
};
pub use types::{
    BoxError, ConfigDetails, ConfigFile, ConfigPath, Document, LoadDirective, LoadOptions,
    Project,
};
