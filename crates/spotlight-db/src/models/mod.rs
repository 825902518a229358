//! Database models with SQLx FromRow derives

mod request;
mod spotlight;
mod user;

pub use request::{IncomingRequestModel, RequestModel};
pub use spotlight::{ActiveSpotlightModel, SpotlightModel};
pub use user::UserModel;
