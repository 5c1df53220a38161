//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Severity string outside the recognized vocabulary
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Context or record could not be encoded as JSON
    #[error("JSON encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Sink write failure escalated by the configured failure strategy
    #[error("Failed to write to path: {path}. Error: {message}")]
    SinkWrite { path: String, message: String },
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(level: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(level.into())
    }

    /// Create a sink write error with the failing path and cause
    pub fn sink_write(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkWrite {
            path: path.into(),
            message: message.into(),
        }
    }
}
