//! Log record value object

use super::context::LogContext;
use super::level::LogLevel;
use chrono::{DateTime, Utc};

/// Immutable value representing a single log entry.
///
/// Constructed once per log call and shared read-only with every handler;
/// never mutated after construction.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    /// Message text after placeholder interpolation.
    pub message: String,
    /// Context as supplied by the caller, in insertion order.
    pub context: LogContext,
    /// Captured at record-creation time, not caller-supplied.
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: String, context: LogContext) -> Self {
        Self {
            level,
            message,
            context,
            timestamp: Utc::now(),
        }
    }

    /// Replace the captured timestamp, for deterministic formatting tests.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
