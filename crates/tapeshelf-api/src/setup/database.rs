//! Database setup

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tapeshelf_core::Config;
use tapeshelf_db::{Database, MySqlDatabase, UnconfiguredDatabase};

/// Build the database handle. No connection is opened here; the pool connects
/// on first use so the server can start while the database is unavailable.
pub fn setup_database(config: &Config) -> Result<Arc<dyn Database>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set; /api/test will report the database as unavailable");
        return Ok(Arc::new(UnconfiguredDatabase));
    };

    let database = MySqlDatabase::connect_lazy(
        database_url,
        config.db_max_connections,
        Duration::from_secs(config.db_timeout_seconds),
    )
    .context("Invalid DATABASE_URL")?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Database pool configured"
    );

    Ok(Arc::new(database))
}
