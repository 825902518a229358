//! Entity <-> model mappers

mod request;
mod spotlight;
mod user;
