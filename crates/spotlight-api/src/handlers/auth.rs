//! Authentication handlers
//!
//! Form-based login and signup, plus logout. Successful authentication sets
//! the session cookie and redirects into the app; failures re-render the
//! auth page with an error line, as browser form posts expect.

use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use spotlight_common::SESSION_COOKIE;
use spotlight_service::dto::{LoginRequest, RegisterRequest};
use spotlight_service::AuthService;

use crate::handlers::pages::auth_page_with_error;
use crate::state::AppState;

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Login with username and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(request): Form<LoginRequest>,
) -> Response {
    let service = AuthService::new(state.service_context());

    match service.login(request).await {
        Ok(outcome) => {
            let jar = jar.add(session_cookie(outcome.session_token));
            (jar, Redirect::to("/index.html")).into_response()
        }
        // Unknown user and bad password render the same line, and the
        // page comes back as a plain 200 without a session cookie
        Err(_) => auth_page_with_error("Invalid credentials").into_response(),
    }
}

/// Create an account
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(request): Form<RegisterRequest>,
) -> Response {
    let service = AuthService::new(state.service_context());

    match service.register(request).await {
        Ok(outcome) => {
            let jar = jar.add(session_cookie(outcome.session_token));
            (jar, Redirect::to("/index.html")).into_response()
        }
        Err(e) if e.error_code() == "USERNAME_TAKEN" => {
            auth_page_with_error("Username already exists").into_response()
        }
        Err(e) => crate::response::ApiError::from(e).into_response(),
    }
}

/// Clear the session and return to the landing page
///
/// GET /logout
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    (jar, Redirect::to("/"))
}
