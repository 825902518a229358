//! PostgreSQL repository implementations

mod error;
mod request;
mod spotlight;
mod user;

pub use request::PgRequestRepository;
pub use spotlight::PgSpotlightRepository;
pub use user::PgUserRepository;
