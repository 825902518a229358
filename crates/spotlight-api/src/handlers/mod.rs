//! Request handlers

pub mod auth;
pub mod health;
pub mod pages;
pub mod requests;
pub mod spotlights;
pub mod users;
