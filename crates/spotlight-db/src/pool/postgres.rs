//! PostgreSQL connection pool
//!
//! The pool is built from the shared [`DatabaseConfig`]; connection
//! lifecycle tunables are fixed here rather than configurable, since the
//! deployment has a single Postgres behind it.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use spotlight_common::config::DatabaseConfig;
use tracing::debug;

/// Wait this long for a free connection before failing the request
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
/// Close connections idle longer than this
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
/// Recycle connections after this lifetime
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    debug!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Creating connection pool"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect(&config.url)
        .await
}
