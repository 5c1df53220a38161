//! Fail-open failure handling

use super::diagnostics::{DiagnosticSink, StderrDiagnostics};
use super::{failure_message, FailureStrategy};
use crate::core::Result;
use std::sync::Arc;

/// Reports write failures through a diagnostic side-channel and returns
/// normally, so a failing sink never surfaces at the log call site.
///
/// This is the default strategy: logging should not be the reason a host
/// application crashes unless explicitly configured otherwise.
#[derive(Clone)]
pub struct SuppressFailureStrategy {
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl SuppressFailureStrategy {
    /// Suppress with diagnostics going to stderr
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(StderrDiagnostics))
    }

    /// Suppress with a caller-supplied diagnostic sink
    pub fn with_diagnostics(diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self { diagnostics }
    }
}

impl Default for SuppressFailureStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl FailureStrategy for SuppressFailureStrategy {
    fn handle_failure(&self, path: &str, message: &str) -> Result<()> {
        self.diagnostics.report(&failure_message(path, message));
        Ok(())
    }
}
