//! Tapeshelf Core Library
//!
//! Configuration and error types shared by the storage, database and API crates.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
