//! Formatter implementations

pub mod json;
pub mod line;

pub use json::JsonFormatter;
pub use line::LineFormatter;

use crate::core::{LogRecord, Result};

/// Serializes a record into newline-terminated text for a sink.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> Result<String>;
}
