//! # spotlight-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, verify_password, SessionClaims, SessionService, SESSION_COOKIE,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, ServerConfig,
    SessionConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
