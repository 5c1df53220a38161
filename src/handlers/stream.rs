//! Handler that appends formatted records to a file path

use crate::core::{Handler, LevelFilter, LogLevel, LogRecord, Result};
use crate::failure::{FailureStrategy, SuppressFailureStrategy};
use crate::formatters::{Formatter, LineFormatter};
use fs2::FileExt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Writes log records to an addressable file path.
///
/// Records below the configured minimum level produce no side effects.
/// Everything else is formatted and appended under an exclusive advisory
/// file lock, so concurrent appends to the same path never interleave
/// within a single record. Write failures are routed through the configured
/// failure strategy; formatting errors always propagate.
pub struct StreamHandler {
    path: PathBuf,
    filter: LevelFilter,
    formatter: Box<dyn Formatter>,
    failure_strategy: Box<dyn FailureStrategy>,
}

impl StreamHandler {
    /// Stream handler with the line formatter and the suppress strategy
    pub fn new(path: impl Into<PathBuf>, min_level: LogLevel) -> Self {
        Self {
            path: path.into(),
            filter: LevelFilter::new(min_level),
            formatter: Box::new(LineFormatter::new()),
            failure_strategy: Box::new(SuppressFailureStrategy::new()),
        }
    }

    /// Replace the formatter
    #[must_use]
    pub fn with_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Replace the failure strategy
    #[must_use]
    pub fn with_failure_strategy(mut self, failure_strategy: Box<dyn FailureStrategy>) -> Self {
        self.failure_strategy = failure_strategy;
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.filter.min_level()
    }

    /// Append bytes under an exclusive advisory lock.
    ///
    /// The file is opened per write so the handler itself carries no shared
    /// mutable state; the lock is released when the handle closes.
    fn append(&self, bytes: &[u8]) -> std::io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.lock_exclusive()?;
        let written = (&file).write_all(bytes);
        let unlocked = FileExt::unlock(&file);
        written?;
        unlocked
    }
}

impl Handler for StreamHandler {
    fn handle(&self, record: &LogRecord) -> Result<()> {
        if !self.filter.allows(record.level) {
            return Ok(());
        }

        let formatted = self.formatter.format(record)?;

        match self.append(formatted.as_bytes()) {
            Ok(()) => Ok(()),
            Err(err) => self
                .failure_strategy
                .handle_failure(&self.path.display().to_string(), &err.to_string()),
        }
    }
}
