//! Value objects - immutable types that represent domain concepts

mod geo;
mod ids;

pub use geo::Coordinates;
pub use ids::{IdParseError, RequestId, SpotlightId, UserId};
