//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits taken from
//! [`DatabaseConfig`].

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Create a PostgreSQL connection pool and check that the store answers.
///
/// # Errors
///
/// Returns an error if no connection can be opened or the ping fails.
///
/// # Example
///
/// ```ignore
/// let config = AppConfig::load("config/config.toml")?;
/// let pool = create_pool(&config.database).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(config, config.connect_options()).await
}

/// Create a pool with the limits from `config` but explicit connect options.
///
/// Lets callers holding a connection URL reuse the configured pool limits.
pub async fn create_pool_with_options(
    config: &DatabaseConfig,
    connect: PgConnectOptions,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(config.conn_max_lifetime())
        .idle_timeout(config.conn_max_lifetime())
        .acquire_timeout(config.acquire_timeout())
        .connect_with(connect)
        .await?;

    ping(&pool).await?;

    tracing::info!(
        max_connections = config.max_connections,
        conn_max_lifetime_secs = config.conn_max_lifetime_secs,
        "database pool ready"
    );

    Ok(pool)
}

/// Round-trip a trivial query.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Whether the store can currently serve queries
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn check(&self) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl StoreHealth for PgPool {
    async fn check(&self) -> Result<(), sqlx::Error> {
        ping(self).await
    }
}
