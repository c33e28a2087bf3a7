//! Tapeshelf Storage Library
//!
//! Disk storage for uploaded images. Files are written into a single flat
//! directory under a server-generated name and exposed over HTTP below
//! [`PUBLIC_PREFIX`].
//!
//! # Naming
//!
//! A generated name is the upload time in milliseconds since the Unix epoch
//! followed by the original file's extension, verbatim: `photo.JPG` uploaded at
//! `1700000000000` is stored as `1700000000000.JPG`. Two uploads with the same
//! extension in the same millisecond share a name and the later write wins.

pub mod error;
pub mod local;
pub mod naming;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use local::{StoredUpload, UploadStore};
pub use naming::{generated_filename, original_extension, public_url, PUBLIC_PREFIX};
