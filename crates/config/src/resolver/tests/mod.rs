//! Scenario tests for project resolution.
//!
//! Responsibilities:
//! - Test upward discovery against real directory trees.
//! - Test `.env` import through the option functions.
//! - Test end-to-end assembly against a recording loader.
//!
//! Invariants:
//! - Tests that touch process-global state (cwd) hold `env_lock()` and are `#[serial]`.
//! - Temporary directories are cleaned up automatically via `tempfile`.
//! - Ambient environment is always injected via `EnvSnapshot`, never mutated.

use std::path::PathBuf;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use tempfile::TempDir;

use crate::boundary::ProjectLoader;
use crate::types::{BoxError, ConfigDetails, LoadDirective, LoadOptions, Project};


/// Returns the global test lock for process-global state isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Loader double that records what it was given.
#[derive(Default)]
pub struct RecordingLoader {
    pub seen: Mutex<Option<(ConfigDetails, LoadOptions)>>,
    pub fail_with: Option<String>,
}

impl RecordingLoader {
    pub fn failing(message: &str) -> Self {
        Self {
            seen: Mutex::new(None),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn take(&self) -> (ConfigDetails, LoadOptions) {
        self.seen
            .lock()
            .unwrap()
            .take()
            .expect("loader was not called")
    }
}

impl ProjectLoader for RecordingLoader {
    fn load(
        &self,
        details: ConfigDetails,
        directives: Vec<LoadDirective>,
    ) -> Result<Project, BoxError> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone().into());
        }
        let options = LoadOptions::from_directives(directives);
        let project = Project {
            name: options.name.clone(),
            working_dir: details.working_dir.clone(),
            compose_files: details
                .config_files
                .iter()
                .map(|f| f.filename.clone())
                .collect(),
            environment: details.environment.clone(),
            model: details
                .config_files
                .last()
                .map(|f| f.document.clone())
                .unwrap_or_default(),
        };
        *self.seen.lock().unwrap() = Some((details, options));
        Ok(project)
    }
}

/// Minimal in-test tracing subscriber to capture WARN messages without adding dependencies.
#[derive(Clone, Default)]
struct CapturingSubscriber {
    events: Arc<Mutex<Vec<String>>>,
    next_id: Arc<AtomicU64>,
}

struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }
}

impl tracing::Subscriber for CapturingSubscriber {
    fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
        *metadata.level() <= tracing::Level::WARN
    }

    fn new_span(&self, _attrs: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        tracing::span::Id::from_u64(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

    fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        let mut visitor = MessageVisitor { message: None };
        event.record(&mut visitor);
        if let Some(msg) = visitor.message {
            self.events.lock().expect("lock poisoned").push(msg);
        }
    }

    fn enter(&self, _span: &tracing::span::Id) {}

    fn exit(&self, _span: &tracing::span::Id) {}

    fn register_callsite(
        &self,
        _metadata: &'static tracing::Metadata<'static>,
    ) -> tracing::subscriber::Interest {
        tracing::subscriber::Interest::sometimes()
    }
}

/// Run `f` and return the WARN (and above) messages it emitted.
pub fn capture_warn_messages<T, F: FnOnce() -> T>(f: F) -> (T, Vec<String>) {
    let subscriber = CapturingSubscriber::default();
    let dispatch = tracing::Dispatch::new(subscriber.clone());
    let result = tracing::dispatcher::with_default(&dispatch, f);
    let messages = std::mem::take(&mut *subscriber.events.lock().expect("lock poisoned"));
    (result, messages)
}
