//! Domain entities - core business objects

mod request;
mod spotlight;
mod user;

pub use request::{MatchRequest, RequestAction, RequestStatus};
pub use spotlight::Spotlight;
pub use user::User;
