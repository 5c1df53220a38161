//! Core record pipeline: levels, context, interpolation, records, dispatch

pub mod context;
pub mod error;
pub mod handler;
pub mod interpolator;
pub mod level;
pub mod logger;
pub mod record;

pub use context::{FieldValue, LogContext};
pub use error::{LoggerError, Result};
pub use handler::Handler;
pub use interpolator::MessageInterpolator;
pub use level::{LevelFilter, LogLevel};
pub use logger::Logger;
pub use record::LogRecord;
