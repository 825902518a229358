//! Session extractors
//!
//! Pull the session cookie out of the request and validate it against the
//! session service. `SessionUser` rejects unauthenticated callers with 401;
//! `OptionalSessionUser` lets handlers degrade to an anonymous response.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;
use spotlight_common::SESSION_COOKIE;
use spotlight_core::value_objects::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the session cookie
#[derive(Debug, Clone, Copy)]
pub struct SessionUser {
    /// User ID the session is bound to
    pub user_id: UserId,
}

impl SessionUser {
    /// Create a new SessionUser
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

fn validate_cookie(jar: &CookieJar, state: &AppState) -> Result<Option<SessionUser>, ApiError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };

    let claims = state
        .session_service()
        .validate(cookie.value())
        .map_err(|e| {
            tracing::warn!(error = %e, "Invalid session token");
            ApiError::InvalidSession
        })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!(error = %e, "Invalid user ID in session token");
        ApiError::InvalidSession
    })?;

    Ok(Some(SessionUser::new(user_id)))
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingAuth)?;
        let app_state = AppState::from_ref(state);

        validate_cookie(&jar, &app_state)?.ok_or(ApiError::MissingAuth)
    }
}

/// Optional session user
///
/// Resolves to None both when no session cookie is present and when the
/// cookie fails validation; read-only endpoints fall back to their
/// anonymous shape rather than erroring.
#[derive(Debug, Clone, Copy)]
pub struct OptionalSessionUser(pub Option<SessionUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalSessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = match CookieJar::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };
        let app_state = AppState::from_ref(state);

        Ok(OptionalSessionUser(
            validate_cookie(&jar, &app_state).unwrap_or(None),
        ))
    }
}
