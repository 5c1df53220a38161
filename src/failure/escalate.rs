//! Fail-closed failure handling

use super::FailureStrategy;
use crate::core::{LoggerError, Result};

/// Turns a write failure into a fatal error for the current log call,
/// naming the sink path and the underlying cause.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscalateFailureStrategy;

impl EscalateFailureStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl FailureStrategy for EscalateFailureStrategy {
    fn handle_failure(&self, path: &str, message: &str) -> Result<()> {
        Err(LoggerError::sink_write(path, message))
    }
}
