//! Repository traits (ports) for data access

mod repositories;

pub use repositories::{
    ActiveSpotlight, CheckIn, IncomingRequest, RepoResult, RequestRepository,
    SpotlightRepository, UserRepository,
};
