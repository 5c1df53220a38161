//! Handler trait for log output destinations

use super::{error::Result, record::LogRecord};

/// Receives records from a [`Logger`](super::logger::Logger).
///
/// Implementations decide whether to filter, format, and write the record.
/// Errors abort the current log call and surface to the caller.
pub trait Handler: Send + Sync {
    fn handle(&self, record: &LogRecord) -> Result<()>;
}
