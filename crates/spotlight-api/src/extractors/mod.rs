//! Request extractors

mod session;

pub use session::{OptionalSessionUser, SessionUser};
