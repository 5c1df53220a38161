//! Handler that discards all log records

use crate::core::{Handler, LogRecord, Result};

/// No-op sink, useful for disabling output or as a test stand-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHandler;

impl NullHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for NullHandler {
    fn handle(&self, _record: &LogRecord) -> Result<()> {
        Ok(())
    }
}
