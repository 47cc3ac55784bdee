//! Project name resolution.
//!
//! Priority: explicit name, then `COMPOSE_PROJECT_NAME`, then the working
//! directory's base name, lower-cased with every character outside
//! `[a-z0-9_-]` deleted. Derivation never fails and may yield an empty name.

use std::path::Path;

use super::env::EnvSnapshot;
use crate::constants::COMPOSE_PROJECT_NAME;

/// Pick the final project name.
pub fn resolve_project_name(
    explicit: Option<&str>,
    ambient: &EnvSnapshot,
    working_dir: &Path,
) -> String {
    if let Some(name) = explicit.filter(|name| !name.is_empty()) {
        return name.to_string();
    }
    if let Some(name) = ambient.var_or_none(COMPOSE_PROJECT_NAME) {
        return name.to_string();
    }
    derive_project_name(working_dir)
}

/// Derive a name from the base name of `working_dir`.
pub fn derive_project_name(working_dir: &Path) -> String {
    working_dir
        .file_name()
        .map(|base| normalize_project_name(&base.to_string_lossy()))
        .unwrap_or_default()
}

/// Lower-case `raw` and delete characters outside `[a-z0-9_-]`.
pub fn normalize_project_name(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_deletes_invalid_characters() {
        assert_eq!(derive_project_name(Path::new("/home/user/My_App!!")), "my_app");
        assert_eq!(normalize_project_name("foo!bar"), "foobar");
        assert_eq!(normalize_project_name("Web-App 2"), "web-app2");
    }

    #[test]
    fn test_derive_may_produce_empty_name() {
        assert_eq!(derive_project_name(Path::new("/tmp/!!!")), "");
        assert_eq!(derive_project_name(Path::new("/")), "");
    }

    #[test]
    fn test_explicit_name_wins_over_env() {
        let ambient: EnvSnapshot = [(COMPOSE_PROJECT_NAME, "from-env")].into_iter().collect();
        let name = resolve_project_name(Some("Explicit"), &ambient, Path::new("/srv/app"));
        // Explicit names are taken as-is
        assert_eq!(name, "Explicit");
    }

    #[test]
    fn test_env_name_wins_over_directory() {
        let ambient: EnvSnapshot = [(COMPOSE_PROJECT_NAME, "from-env")].into_iter().collect();
        assert_eq!(resolve_project_name(None, &ambient, Path::new("/srv/app")), "from-env");
        assert_eq!(resolve_project_name(Some(""), &ambient, Path::new("/srv/app")), "from-env");
    }

    #[test]
    fn test_blank_env_name_falls_back_to_directory() {
        let ambient: EnvSnapshot = [(COMPOSE_PROJECT_NAME, "  ")].into_iter().collect();
        assert_eq!(resolve_project_name(None, &ambient, Path::new("/srv/App")), "app");
    }
}
