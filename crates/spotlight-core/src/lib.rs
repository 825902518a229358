//! # spotlight-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{MatchRequest, RequestAction, RequestStatus, Spotlight, User};
pub use error::DomainError;
pub use traits::{
    ActiveSpotlight, CheckIn, IncomingRequest, RepoResult, RequestRepository,
    SpotlightRepository, UserRepository,
};
pub use value_objects::{Coordinates, RequestId, SpotlightId, UserId};
