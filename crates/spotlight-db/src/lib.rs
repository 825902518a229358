//! # spotlight-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `spotlight-core`. It handles:
//!
//! - Connection pool management
//! - Schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spotlight_common::AppConfig;
//! use spotlight_db::pool::create_pool;
//! use spotlight_db::repositories::PgUserRepository;
//! use spotlight_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, PgPool};
pub use repositories::{PgRequestRepository, PgSpotlightRepository, PgUserRepository};
pub use schema::{ensure_schema, init_schema};
