//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use tapeshelf_core::Config;

/// Validate critical configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    if config.is_production() && config.allows_any_origin() {
        tracing::warn!(
            "CORS configured to allow all origins (*) in production - set CORS_ORIGINS to restrict it"
        );
    }

    if config.cors_origins.is_empty() {
        return Err(anyhow::anyhow!("CORS_ORIGINS must list at least one origin"));
    }

    if config.database_url.is_some() {
        if config.db_max_connections == 0 {
            return Err(anyhow::anyhow!("Database max connections cannot be 0"));
        }

        if config.db_timeout_seconds == 0 {
            return Err(anyhow::anyhow!("Database timeout cannot be 0"));
        }
    }

    if config.upload_dir.as_os_str().is_empty() {
        return Err(anyhow::anyhow!("UPLOAD_DIR cannot be empty"));
    }

    Ok(())
}
