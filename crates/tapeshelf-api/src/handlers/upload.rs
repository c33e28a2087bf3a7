//! Single-file image upload.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tapeshelf_core::AppError;

use crate::constants::{NO_FILE_MESSAGE, UPLOAD_FIELD};
use crate::error::HttpAppError;
use crate::state::UploadState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Store the file sent under the `image` field and return the URL it is served under.
///
/// Other fields are skipped. A body that is not `multipart/form-data` carries
/// no file and gets the same 400 as a form without `image`. The file is written
/// before the response is sent; a write that fails midway is not cleaned up.
#[tracing::instrument(skip(uploads, multipart), fields(operation = "upload_image"))]
pub async fn upload_image(
    State(uploads): State<UploadState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Request is not a multipart form");
            return Err(AppError::InvalidInput(NO_FILE_MESSAGE.to_string()).into());
        }
    };

    let mut stored = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        // A part without a filename is a plain text field, not a file.
        let original_filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        if stored.is_some() {
            return Err(AppError::InvalidInput("Unexpected field".to_string()).into());
        }

        stored = Some(uploads.store.save_stream(&original_filename, field).await?);
    }

    let stored = stored.ok_or_else(|| AppError::InvalidInput(NO_FILE_MESSAGE.to_string()))?;

    tracing::info!(
        filename = %stored.filename,
        size_bytes = stored.size_bytes,
        "Image uploaded"
    );

    Ok(Json(UploadResponse { url: stored.url }))
}
