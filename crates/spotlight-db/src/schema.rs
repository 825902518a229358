//! Schema bootstrap
//!
//! Creates the tables and indexes on startup when they do not exist yet.
//! Every statement is idempotent, so running this against an existing
//! database is safe.

use sqlx::PgPool;
use tracing::warn;

const CREATE_USERS: &str = r"
CREATE TABLE IF NOT EXISTS users (
    id            BIGSERIAL PRIMARY KEY,
    username      TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    trust_score   INTEGER NOT NULL DEFAULT 100,
    is_matched    BOOLEAN NOT NULL DEFAULT FALSE,
    matched_with  BIGINT REFERENCES users(id),
    is_active     BOOLEAN NOT NULL DEFAULT TRUE,
    created_at    TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
";

const CREATE_REQUESTS: &str = r"
CREATE TABLE IF NOT EXISTS requests (
    id          BIGSERIAL PRIMARY KEY,
    sender_id   BIGINT NOT NULL REFERENCES users(id),
    receiver_id BIGINT NOT NULL REFERENCES users(id),
    status      TEXT NOT NULL DEFAULT 'pending',
    matched     BOOLEAN NOT NULL DEFAULT FALSE,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
";

const CREATE_SPOTLIGHTS: &str = r"
CREATE TABLE IF NOT EXISTS spotlights (
    id         BIGSERIAL PRIMARY KEY,
    user_id    BIGINT NOT NULL UNIQUE REFERENCES users(id),
    lat        DOUBLE PRECISION NOT NULL,
    lon        DOUBLE PRECISION NOT NULL,
    place      TEXT NOT NULL,
    intent     TEXT NOT NULL,
    meet_time  TEXT,
    clue       TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    expires_at TIMESTAMPTZ NOT NULL
)
";

const CREATE_INDEXES: &[&str] = &[
    r"CREATE INDEX IF NOT EXISTS idx_requests_pending_receiver
      ON requests (receiver_id, created_at DESC) WHERE status = 'pending'",
    r"CREATE INDEX IF NOT EXISTS idx_requests_pending_pair
      ON requests (sender_id, receiver_id) WHERE status = 'pending'",
    r"CREATE INDEX IF NOT EXISTS idx_spotlights_expires_at
      ON spotlights (expires_at)",
];

/// Create all tables and indexes if they do not exist
///
/// # Errors
/// Returns the first database error encountered.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_REQUESTS).execute(pool).await?;
    sqlx::query(CREATE_SPOTLIGHTS).execute(pool).await?;

    for stmt in CREATE_INDEXES {
        sqlx::query(stmt).execute(pool).await?;
    }

    Ok(())
}

/// Best-effort schema bootstrap.
///
/// A failure here usually means the database user lacks DDL rights and the
/// tables were provisioned out of band, so the error is logged and startup
/// continues.
pub async fn ensure_schema(pool: &PgPool) {
    if let Err(e) = init_schema(pool).await {
        warn!(error = %e, "Schema bootstrap failed, assuming tables exist");
    }
}
