//! User profile handlers

use axum::{extract::State, Json};
use spotlight_service::dto::UserInfoResponse;
use spotlight_service::AuthService;

use crate::extractors::SessionUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Current user's profile projection
///
/// GET /api/user_info
pub async fn user_info(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<UserInfoResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.user_info(session.user_id).await?;
    Ok(Json(response))
}
