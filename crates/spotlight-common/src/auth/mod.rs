//! Authentication utilities - password hashing and session tokens

mod password;
mod session;

pub use password::{hash_password, verify_password};
pub use session::{SessionClaims, SessionService, SESSION_COOKIE};
