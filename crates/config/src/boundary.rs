//! Collaborator seams: the document parser and the project loader.
//!
//! Responsibilities:
//! - Define the `DocumentParser` and `ProjectLoader` traits the resolver calls into.
//! - Provide `YamlParser`, the `serde_yaml`-backed parser used by default.
//!
//! Does NOT handle:
//! - Merging documents, interpolation, or schema validation. Those belong to
//!   whatever implements `ProjectLoader`.

use crate::types::{BoxError, ConfigDetails, Document, LoadDirective, Project};

/// Turns raw bytes into a structured document.
pub trait DocumentParser {
    fn parse(&self, source: &[u8]) -> Result<Document, BoxError>;
}

/// Builds a project from resolved inputs.
///
/// Directives arrive in application order and are expected to be applied to
/// the loader's options before loading (see `LoadOptions::from_directives`).
pub trait ProjectLoader {
    fn load(
        &self,
        details: ConfigDetails,
        directives: Vec<LoadDirective>,
    ) -> Result<Project, BoxError>;
}

/// YAML document parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl DocumentParser for YamlParser {
    fn parse(&self, source: &[u8]) -> Result<Document, BoxError> {
        Ok(serde_yaml::from_slice(source)?)
    }
}
