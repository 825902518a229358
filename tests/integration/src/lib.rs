//! Integration test utilities for the spotlight server
//!
//! This crate provides helpers for running end-to-end tests against
//! the HTTP API with cookie-based sessions.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
