//! # Fanlog
//!
//! A synchronous structured logging facility: leveled messages with
//! contextual key/value data, `{key}` placeholder interpolation, pluggable
//! formatters and handlers, and configurable handling of sink write
//! failures.
//!
//! ## Features
//!
//! - **Leveled Dispatch**: Eight-severity vocabulary with strict priorities
//! - **Interpolation**: `{key}` placeholders filled from scalar context values
//! - **Multiple Handlers**: Records fan out to every handler in order
//! - **Failure Policy**: Per-handler choice between fail-open and fail-closed
//!
//! ## Example
//!
//! ```no_run
//! use fanlog::prelude::*;
//!
//! let handler = StreamHandler::new("/var/log/app.log", LogLevel::Info);
//! let logger = Logger::new(vec![Box::new(handler)]);
//!
//! let context = LogContext::new().with_field("name", "John");
//! logger.info("Hello {name}", context).unwrap();
//! ```

pub mod core;
pub mod failure;
pub mod formatters;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        FieldValue, Handler, LevelFilter, LogContext, LogLevel, LogRecord, Logger, LoggerError,
        MessageInterpolator, Result,
    };
    pub use crate::failure::{
        DiagnosticSink, EscalateFailureStrategy, FailureStrategy, MemoryDiagnostics,
        StderrDiagnostics, SuppressFailureStrategy,
    };
    pub use crate::formatters::{Formatter, JsonFormatter, LineFormatter};
    pub use crate::handlers::{NullHandler, StreamHandler};
}

pub use crate::core::{
    FieldValue, Handler, LevelFilter, LogContext, LogLevel, LogRecord, Logger, LoggerError,
    MessageInterpolator, Result,
};
pub use crate::failure::{
    DiagnosticSink, EscalateFailureStrategy, FailureStrategy, MemoryDiagnostics,
    StderrDiagnostics, SuppressFailureStrategy,
};
pub use crate::formatters::{Formatter, JsonFormatter, LineFormatter};
pub use crate::handlers::{NullHandler, StreamHandler};
