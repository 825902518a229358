//! Check-in, check-out, and discovery handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use spotlight_service::dto::{CheckInRequest, NearbyUser, StatusResponse};
use spotlight_service::SpotlightService;

use crate::extractors::{OptionalSessionUser, SessionUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Go live at the given position
///
/// POST /api/checkin
pub async fn checkin(
    State(state): State<AppState>,
    session: SessionUser,
    Json(request): Json<CheckInRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let service = SpotlightService::new(state.service_context());
    service.check_in(session.user_id, request).await?;
    Ok(Json(StatusResponse::live()))
}

/// Leave the discovery pool
///
/// POST /api/checkout
pub async fn checkout(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<StatusResponse>> {
    let service = SpotlightService::new(state.service_context());
    service.check_out(session.user_id).await?;
    Ok(Json(StatusResponse::off()))
}

/// Query parameters for the nearby scan
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Live, unmatched users within range of the given position
///
/// GET /api/nearby
pub async fn nearby(
    State(state): State<AppState>,
    OptionalSessionUser(session): OptionalSessionUser,
    Query(query): Query<NearbyQuery>,
) -> ApiResult<Json<Vec<NearbyUser>>> {
    let Some(session) = session else {
        return Ok(Json(Vec::new()));
    };

    let service = SpotlightService::new(state.service_context());
    let response = service.nearby(session.user_id, query.lat, query.lon).await?;
    Ok(Json(response))
}
