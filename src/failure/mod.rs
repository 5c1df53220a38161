//! Failure strategies for sink write errors

pub mod diagnostics;
pub mod escalate;
pub mod suppress;

pub use diagnostics::{DiagnosticSink, MemoryDiagnostics, StderrDiagnostics};
pub use escalate::EscalateFailureStrategy;
pub use suppress::SuppressFailureStrategy;

use crate::core::Result;

/// Decides what happens when a handler fails to write to its sink.
///
/// Invoked with the sink path and the platform error description. Returning
/// `Ok` swallows the failure at the log call site; returning an error aborts
/// the current log call.
pub trait FailureStrategy: Send + Sync {
    fn handle_failure(&self, path: &str, message: &str) -> Result<()>;
}

/// Compose the canonical failure text from a path and cause.
pub(crate) fn failure_message(path: &str, message: &str) -> String {
    format!("Failed to write to path: {}. Error: {}", path, message)
}
