//! API constants

/// Upload endpoint
pub const UPLOAD_PATH: &str = "/api/upload";

/// Database diagnostic endpoint
pub const DIAGNOSTIC_PATH: &str = "/api/test";

/// Mount point of the authentication sub-router
pub const AUTH_PATH: &str = "/api/auth";

/// Mount point of the video-tape sub-router
pub const VIDEOTAPES_PATH: &str = "/api/videotapes";

/// Multipart field that carries the uploaded file
pub const UPLOAD_FIELD: &str = "image";

/// Message returned when a request has no file under [`UPLOAD_FIELD`]
pub const NO_FILE_MESSAGE: &str = "No file uploaded";
