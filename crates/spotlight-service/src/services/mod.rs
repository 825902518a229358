//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod matching;
pub mod spotlight;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use auth::{AuthOutcome, AuthService};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use matching::MatchService;
pub use spotlight::SpotlightService;
