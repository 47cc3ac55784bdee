//! Output formatters for CLI commands.
//!
//! Provides JSON and YAML renderings of the resolved project, plus plain
//! line-oriented output for file lists and environments.

use anyhow::Result;
use compose_config::Project;

use crate::args::OutputFormat;

/// Render the project in the requested format.
pub fn format_project(project: &Project, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(project)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(project)?),
    }
}

/// One entry per line, in order.
pub fn format_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(|line| format!("{}\n", line.as_ref())).collect()
}
