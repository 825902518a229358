//! HTML page handlers
//!
//! Pages are compiled into the binary; the auth page carries a single
//! `{{error}}` placeholder filled per response.

use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::extractors::OptionalSessionUser;

const HOME_PAGE: &str = include_str!("../templates/home.html");
const AUTH_PAGE: &str = include_str!("../templates/auth.html");
const INDEX_PAGE: &str = include_str!("../templates/index.html");

/// Render the auth page with an error line
pub fn auth_page_with_error(message: &str) -> Html<String> {
    Html(AUTH_PAGE.replace("{{error}}", message))
}

/// Landing page
///
/// GET /
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// Login / signup page
///
/// GET /auth
pub async fn auth_page() -> Html<String> {
    auth_page_with_error("")
}

/// Main app page; bounces unauthenticated visitors to the auth page
///
/// GET /index.html
pub async fn index_page(OptionalSessionUser(session): OptionalSessionUser) -> Response {
    match session {
        Some(_) => Html(INDEX_PAGE).into_response(),
        None => Redirect::to("/auth").into_response(),
    }
}
