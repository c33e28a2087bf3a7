//! Upload directory setup

use anyhow::{Context, Result};
use tapeshelf_core::Config;
use tapeshelf_storage::UploadStore;

/// Create the upload directory (and parents) once, before serving.
pub async fn setup_upload_store(config: &Config) -> Result<UploadStore> {
    let store = UploadStore::init(&config.upload_dir)
        .await
        .context("Failed to prepare upload directory")?;

    tracing::info!(
        path = %store.base_path().display(),
        "Upload directory initialized"
    );

    Ok(store)
}
