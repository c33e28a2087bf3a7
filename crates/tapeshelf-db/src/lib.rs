//! Tapeshelf Database Library
//!
//! The HTTP layer only needs to know whether the database answers. That
//! contract is the [`Database`] trait; [`MySqlDatabase`] implements it over a
//! `sqlx` pool and [`UnconfiguredDatabase`] stands in when no URL is set.

pub mod error;
pub mod mysql;

use async_trait::async_trait;

pub use error::{DbError, DbResult};
pub use mysql::MySqlDatabase;

/// Query used to verify connectivity. Evaluates to `2`.
pub const CONNECTIVITY_QUERY: &str = "SELECT 1 + 1 AS result";

#[async_trait]
pub trait Database: Send + Sync {
    /// Run [`CONNECTIVITY_QUERY`] and return its `result` column.
    async fn connectivity_check(&self) -> DbResult<i64>;
}

/// Placeholder used when `DATABASE_URL` is not set; every check fails.
#[derive(Clone, Debug, Default)]
pub struct UnconfiguredDatabase;

#[async_trait]
impl Database for UnconfiguredDatabase {
    async fn connectivity_check(&self) -> DbResult<i64> {
        Err(DbError::NotConfigured)
    }
}
