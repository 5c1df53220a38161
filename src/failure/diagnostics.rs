//! Diagnostic side-channel for suppressed failures
//!
//! The suppress strategy needs somewhere to note failures without touching
//! the primary log output. The sink is an injected dependency rather than a
//! hidden global so tests can intercept it.

use parking_lot::Mutex;
use std::sync::Arc;

/// Accepts diagnostic messages; never fails observably.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, message: &str);
}

/// Writes diagnostics to the process stderr stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl DiagnosticSink for StderrDiagnostics {
    fn report(&self, message: &str) {
        eprintln!("[fanlog] {}", message);
    }
}

/// Collects diagnostics in memory, for tests and inspection.
#[derive(Debug, Clone, Default)]
pub struct MemoryDiagnostics {
    reports: Arc<Mutex<Vec<String>>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all reports received so far
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }
}

impl DiagnosticSink for MemoryDiagnostics {
    fn report(&self, message: &str) {
        self.reports.lock().push(message.to_string());
    }
}
