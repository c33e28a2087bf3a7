//! Error types module
//!
//! All request-level failures are unified under `AppError`. Each variant describes
//! how it is presented over HTTP through the `ErrorMetadata` trait; the API crate
//! turns that into a response.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like a missing file part
    Debug,
    /// Warning level
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Client-facing message
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;

    /// Short variant name used as a structured log field
    fn error_type(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::Upload(_) | AppError::Internal(_) => 500,
        }
    }

    // Underlying messages are exposed verbatim; there is no production redaction.
    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::Upload(msg)
            | AppError::Internal(msg) => msg.clone(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::Upload(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Upload(_) => "Upload",
            AppError::Internal(_) => "Internal",
        }
    }
}
