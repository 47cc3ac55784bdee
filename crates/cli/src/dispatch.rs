//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build `ProjectOptions` from parsed arguments and the captured environment.
//! - Resolve the project once and route it to the selected output.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup or exit codes (see `main()` and `error` module).

use anyhow::Result;
use compose_config::{EnvSnapshot, Project, ProjectAssembler, ProjectOptions, YamlParser};

use crate::args::{Cli, Commands};
use crate::formatters::{format_lines, format_project};
use crate::loader::MergingLoader;

/// Resolve the project described by `cli` and render the requested output.
pub(crate) fn run_command(cli: Cli, ambient: EnvSnapshot) -> Result<String> {
    let options = ProjectOptions::new(cli.files.clone(), ambient).apply(cli.option_steps())?;

    match cli.command {
        // The merged environment is known before any file is read
        Commands::Env => Ok(format_lines(&options.environment().to_key_value_list())),
        Commands::Config { format } => format_project(&load(options)?, format),
        Commands::Files => Ok(format_lines(&load(options)?.compose_files)),
        Commands::Name => Ok(format!("{}\n", load(options)?.name)),
    }
}

fn load(options: ProjectOptions) -> Result<Project> {
    Ok(ProjectAssembler::new(&YamlParser, &MergingLoader).build(options)?)
}
