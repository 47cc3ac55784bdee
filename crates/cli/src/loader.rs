//! Reference project loader used by the command line.
//!
//! Responsibilities:
//! - Apply load directives to `LoadOptions`.
//! - Deep-merge parsed documents in order (later files win).
//! - Drop `services.*.env_file` entries when asked.
//!
//! Does NOT handle:
//! - Variable interpolation or schema validation.
//!
//! Invariants:
//! - Mappings merge key by key; sequences and scalars are replaced whole.
//! - Every document must be a mapping (or empty).

use compose_config::{
    BoxError, ConfigDetails, Document, LoadDirective, LoadOptions, Project, ProjectLoader,
};
use serde_yaml::Mapping;

/// Merges documents into a single model without interpreting them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergingLoader;

impl ProjectLoader for MergingLoader {
    fn load(
        &self,
        details: ConfigDetails,
        directives: Vec<LoadDirective>,
    ) -> Result<Project, BoxError> {
        let options = LoadOptions::from_directives(directives);

        let mut model = Document::Mapping(Mapping::new());
        let mut compose_files = Vec::with_capacity(details.config_files.len());
        for file in details.config_files {
            match file.document {
                Document::Null => {}
                Document::Mapping(_) => merge(&mut model, file.document),
                _ => {
                    return Err(
                        format!("{}: top-level object must be a mapping", file.filename).into(),
                    );
                }
            }
            compose_files.push(file.filename);
        }

        if options.discard_env_files {
            discard_env_files(&mut model);
        }
        tracing::debug!(project = %options.name, files = compose_files.len(), "Merged project model");

        Ok(Project {
            name: options.name,
            working_dir: details.working_dir,
            compose_files,
            environment: details.environment,
            model,
        })
    }
}

/// Merge `overlay` onto `base`; mappings recurse, anything else replaces.
fn merge(base: &mut Document, overlay: Document) {
    match (base, overlay) {
        (Document::Mapping(base_map), Document::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

fn discard_env_files(model: &mut Document) {
    let Some(services) = model.get_mut("services").and_then(Document::as_mapping_mut) else {
        return;
    };
    for (_, service) in services.iter_mut() {
        if let Some(service) = service.as_mapping_mut() {
            service.remove("env_file");
        }
    }
}
