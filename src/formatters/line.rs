//! Single-line human-readable formatter

use super::Formatter;
use crate::core::{LogRecord, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats records as `[timestamp] level: message`, appending the context
/// as a JSON object only when it is non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter;

impl LineFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for LineFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let context = if record.context.is_empty() {
            String::new()
        } else {
            format!(" {}", serde_json::to_string(&record.context)?)
        };

        Ok(format!(
            "[{}] {}: {}{}\n",
            record.timestamp.format(TIMESTAMP_FORMAT),
            record.level,
            record.message,
            context
        ))
    }
}
