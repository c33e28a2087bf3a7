//! Application setup and initialization
//!
//! Everything that runs before the listener binds: configuration checks,
//! telemetry, the upload directory, the database handle, state and routes.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::setup::routes::CollaboratorRoutes;
use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use tapeshelf_core::Config;

/// Initialize the entire application
pub async fn initialize_app(
    config: Config,
    collaborators: CollaboratorRoutes,
) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(&config).context("Failed to initialize telemetry")?;

    tracing::info!("Configuration loaded and validated successfully");

    // The upload directory must exist before the first request arrives
    let store = storage::setup_upload_store(&config).await?;

    let database = database::setup_database(&config)?;

    let state = Arc::new(AppState::new(config.clone(), store, database));

    let router = routes::setup_routes(&config, state.clone(), collaborators)?;

    Ok((state, router))
}
