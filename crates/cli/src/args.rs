//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Translate parsed flags into an ordered list of option functions.
//!
//! Non-responsibilities:
//! - Does not resolve or load the project (see `dispatch` module).
//! - Does not read `COMPOSE_FILE` or `COMPOSE_PROJECT_NAME`; the resolver
//!   reads those from the environment snapshot.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use compose_config::{
    OptionFn, with_discard_env_file, with_dotenv, with_env, with_name, with_os_env,
    with_working_directory,
};

#[derive(Parser)]
#[command(name = "compose-resolve")]
#[command(about = "Resolve compose project files, name, and environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  compose-resolve config\n  compose-resolve -f compose.yaml -f compose.prod.yaml config --format json\n  cat compose.yaml | compose-resolve -f - name\n  compose-resolve -e TAG=v2 env\n"
)]
pub struct Cli {
    /// Configuration file to load; repeat to layer files, `-` reads stdin
    #[arg(short = 'f', long = "file", global = true, value_name = "FILE")]
    pub files: Vec<String>,

    /// Project name (overrides COMPOSE_PROJECT_NAME and the directory name)
    #[arg(short = 'p', long, global = true)]
    pub project_name: Option<String>,

    /// Working directory of the project (defaults to the first file's directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub project_directory: Option<PathBuf>,

    /// Extra interpolation variable; repeat for several, later ones win
    #[arg(short = 'e', long = "env", global = true, value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Do not import the process environment
    #[arg(long, global = true)]
    pub no_os_env: bool,

    /// Do not read the `.env` file from the working directory
    #[arg(
        long,
        global = true,
        env = "COMPOSE_DISABLE_ENV_FILE",
        value_parser = BoolishValueParser::new()
    )]
    pub disable_env_file: bool,

    /// Drop `env_file` entries from services once they are resolved
    #[arg(long, global = true)]
    pub discard_env_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved project
    Config {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },

    /// Print the configuration files the project was built from
    Files,

    /// Print the project name
    Name,

    /// Print the merged interpolation environment as KEY=VALUE lines
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl Cli {
    /// Option functions in application order; later ones win.
    ///
    /// The project directory is applied first so `.env` is read from it.
    pub fn option_steps(&self) -> Vec<OptionFn> {
        let mut steps = Vec::new();
        if let Some(dir) = &self.project_directory {
            steps.push(with_working_directory(dir.clone()));
        }
        if !self.disable_env_file {
            steps.push(with_dotenv());
        }
        if !self.no_os_env {
            steps.push(with_os_env());
        }
        if !self.env.is_empty() {
            steps.push(with_env(self.env.clone()));
        }
        if let Some(name) = &self.project_name {
            steps.push(with_name(name.clone()));
        }
        if self.discard_env_file {
            steps.push(with_discard_env_file());
        }
        steps
    }
}
