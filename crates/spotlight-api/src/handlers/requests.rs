//! Match request handlers

use axum::{extract::State, Json};
use spotlight_service::dto::{
    CheckRequestsResponse, MatchStatusResponse, RespondRequestRequest, SendRequestRequest,
    StatusResponse,
};
use spotlight_service::MatchService;

use crate::extractors::{OptionalSessionUser, SessionUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Send a match request to another user
///
/// POST /api/send_request
pub async fn send_request(
    State(state): State<AppState>,
    session: SessionUser,
    Json(request): Json<SendRequestRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let service = MatchService::new(state.service_context());
    service.send_request(session.user_id, request).await?;
    Ok(Json(StatusResponse::sent()))
}

/// Poll for the latest pending incoming request
///
/// GET /api/check_requests
pub async fn check_requests(
    State(state): State<AppState>,
    OptionalSessionUser(session): OptionalSessionUser,
) -> ApiResult<Json<CheckRequestsResponse>> {
    let Some(session) = session else {
        return Ok(Json(CheckRequestsResponse::None));
    };

    let service = MatchService::new(state.service_context());
    let response = service.check_requests(session.user_id).await?;
    Ok(Json(response))
}

/// Accept or decline a pending request
///
/// POST /api/respond_request
pub async fn respond_request(
    State(state): State<AppState>,
    _session: SessionUser,
    Json(request): Json<RespondRequestRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let service = MatchService::new(state.service_context());
    let action = service.respond(request).await?;
    Ok(Json(StatusResponse::new(action.as_str())))
}

/// Current match state
///
/// GET /api/match_status
pub async fn match_status(
    State(state): State<AppState>,
    OptionalSessionUser(session): OptionalSessionUser,
) -> ApiResult<Json<MatchStatusResponse>> {
    let Some(session) = session else {
        return Ok(Json(MatchStatusResponse::unmatched()));
    };

    let service = MatchService::new(state.service_context());
    let response = service.match_status(session.user_id).await?;
    Ok(Json(response))
}
