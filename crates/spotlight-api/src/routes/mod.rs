//! Route definitions
//!
//! Browser-facing pages and the JSON API, mounted under /api.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, pages, requests, spotlights, users};
use crate::state::AppState;

/// Create the main router with pages and API routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass the middleware stack)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Browser pages and form endpoints
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/auth", get(pages::auth_page))
        .route("/index.html", get(pages::index_page))
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup))
        .route("/logout", get(auth::logout))
}

/// JSON API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/user_info", get(users::user_info))
        .route("/checkin", post(spotlights::checkin))
        .route("/checkout", post(spotlights::checkout))
        .route("/nearby", get(spotlights::nearby))
        .route("/send_request", post(requests::send_request))
        .route("/check_requests", get(requests::check_requests))
        .route("/respond_request", post(requests::respond_request))
        .route("/match_status", get(requests::match_status))
}
