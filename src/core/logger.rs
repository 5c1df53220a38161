//! Record creation and dispatch

use super::{
    context::LogContext,
    error::Result,
    handler::Handler,
    interpolator::MessageInterpolator,
    level::LogLevel,
    record::LogRecord,
};

/// Dispatches log calls to an ordered set of handlers.
///
/// The handler set is fixed at construction. A log call interpolates the
/// message, captures the timestamp, builds one immutable [`LogRecord`], and
/// hands it to every handler in registration order. The logger itself holds
/// no other state; it is a pure dispatcher.
pub struct Logger {
    handlers: Vec<Box<dyn Handler>>,
    interpolator: MessageInterpolator,
}

impl Logger {
    pub fn new(handlers: Vec<Box<dyn Handler>>) -> Self {
        Self {
            handlers,
            interpolator: MessageInterpolator::new(),
        }
    }

    pub fn emergency(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Emergency, message, context)
    }

    pub fn alert(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Alert, message, context)
    }

    pub fn critical(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Critical, message, context)
    }

    pub fn error(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Error, message, context)
    }

    pub fn warning(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Warning, message, context)
    }

    pub fn notice(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Notice, message, context)
    }

    pub fn info(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Info, message, context)
    }

    pub fn debug(&self, message: &str, context: LogContext) -> Result<()> {
        self.log(LogLevel::Debug, message, context)
    }

    /// Dispatch one record to every handler in registration order.
    ///
    /// With no handlers registered the call returns immediately: no
    /// interpolation happens and no timestamp is captured. A handler error
    /// aborts the remainder of the call and surfaces to the caller.
    pub fn log(&self, level: LogLevel, message: &str, context: LogContext) -> Result<()> {
        if self.handlers.is_empty() {
            return Ok(());
        }

        let record = self.create_record(level, message, context);

        for handler in &self.handlers {
            handler.handle(&record)?;
        }

        Ok(())
    }

    fn create_record(&self, level: LogLevel, message: &str, context: LogContext) -> LogRecord {
        let message = self.interpolator.interpolate(message, &context);
        LogRecord::new(level, message, context)
    }
}
