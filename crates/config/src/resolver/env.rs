//! Snapshot of the ambient process environment.
//!
//! Responsibilities:
//! - Capture the process environment once, as an explicit value.
//! - Look up override variables with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Merging variables for interpolation (see environment.rs).
//! - Reading `.env` files.
//!
//! Invariants:
//! - Resolution code never calls `std::env::var` directly; it reads a snapshot.
//! - Empty or whitespace-only values are treated as unset by `var_or_none`.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use std::collections::BTreeMap;

/// An immutable copy of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn capture() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Raw value of a variable, including empty values.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Read a variable, returning None if unset, empty, or whitespace-only.
    /// Returns the trimmed value if present.
    pub fn var_or_none(&self, key: &str) -> Option<&str> {
        self.get(key)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_var_or_none_filters_empty_and_whitespace_strings() {
        let snapshot: EnvSnapshot = [
            ("EMPTY", ""),
            ("BLANK", "   "),
            ("PADDED", " value "),
            ("PLAIN", "value"),
        ]
        .into_iter()
        .collect();

        assert!(snapshot.var_or_none("UNSET").is_none());
        assert!(snapshot.var_or_none("EMPTY").is_none());
        assert!(snapshot.var_or_none("BLANK").is_none());
        assert_eq!(snapshot.var_or_none("PADDED"), Some("value"));
        assert_eq!(snapshot.var_or_none("PLAIN"), Some("value"));

        // Raw access keeps the value as-is
        assert_eq!(snapshot.get("EMPTY"), Some(""));
    }

    #[test]
    #[serial]
    fn test_capture_reads_process_environment() {
        let key = "_COMPOSE_TEST_CAPTURE_VAR";
        temp_env::with_vars([(key, Some("captured"))], || {
            let snapshot = EnvSnapshot::capture();
            assert_eq!(snapshot.get(key), Some("captured"));
        });

        let snapshot = EnvSnapshot::capture();
        assert!(snapshot.get(key).is_none());
    }
}
