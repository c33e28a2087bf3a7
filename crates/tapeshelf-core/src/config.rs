//! Configuration module
//!
//! Process configuration is read from the environment (after loading an optional
//! `.env` file). Every setting has a default except the database URL; without it
//! the diagnostic route reports that no database is configured.

use std::env;
use std::path::PathBuf;

// Common constants
const SERVER_PORT: u16 = 3000;
const UPLOAD_DIR: &str = "assets/images";
const MAX_CONNECTIONS: u32 = 10;
const CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub upload_dir: PathBuf,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: SERVER_PORT,
            upload_dir: PathBuf::from(UPLOAD_DIR),
            database_url: None,
            db_max_connections: MAX_CONNECTIONS,
            db_timeout_seconds: CONNECTION_TIMEOUT_SECS,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number, got '{}'", port))?,
            None => SERVER_PORT,
        };

        let upload_dir = lookup("UPLOAD_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(UPLOAD_DIR));

        let database_url = lookup("DATABASE_URL").filter(|s| !s.trim().is_empty());

        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(MAX_CONNECTIONS);

        let db_timeout_seconds = lookup("DB_TIMEOUT_SECONDS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(CONNECTION_TIMEOUT_SECS);

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        Ok(Config {
            server_port,
            upload_dir,
            database_url,
            db_max_connections,
            db_timeout_seconds,
            cors_origins,
            environment,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}
