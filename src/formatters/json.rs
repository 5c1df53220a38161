//! Single-line JSON formatter

use super::Formatter;
use crate::core::{LogContext, LogLevel, LogRecord, Result};
use serde::Serialize;

/// Formats records as one JSON object per line (JSONL)
///
/// Output carries `timestamp` (RFC 3339), `level`, `message`, and the raw
/// `context` mapping. Compatible with log aggregation tools like ELK, Loki,
/// etc. Unencodable context values fail with an encoding error that
/// propagates to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: String,
    level: LogLevel,
    message: &'a str,
    context: &'a LogContext,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let mut line = serde_json::to_string(&JsonRecord {
            timestamp: record.timestamp.to_rfc3339(),
            level: record.level,
            message: &record.message,
            context: &record.context,
        })?;
        line.push('\n');
        Ok(line)
    }
}
