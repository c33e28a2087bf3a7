use std::path::PathBuf;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create upload directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Upload directory {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Stream(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
