use crate::{Database, DbResult, CONNECTIVITY_QUERY};
use async_trait::async_trait;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, MySqlPool};
use std::time::Duration;

/// MySQL-backed database handle
#[derive(Clone)]
pub struct MySqlDatabase {
    pool: MySqlPool,
}

impl MySqlDatabase {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Build a pool without opening a connection.
    ///
    /// Connections are established on first use, so the server starts even
    /// when the database is down; the URL itself is validated here.
    pub fn connect_lazy(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> DbResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl Database for MySqlDatabase {
    #[tracing::instrument(skip(self), fields(db.operation = "select"))]
    async fn connectivity_check(&self) -> DbResult<i64> {
        let result = sqlx::query_scalar::<MySql, i64>(CONNECTIVITY_QUERY)
            .fetch_one(&self.pool)
            .await?;
        Ok(result)
    }
}
