//! Request DTOs for API endpoints

use serde::Deserialize;

use spotlight_core::entities::RequestAction;
use spotlight_core::value_objects::{RequestId, UserId};

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration form
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// User login form
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Check-in Requests
// ============================================================================

/// Check-in payload. Fields are trusted as supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    pub lat: f64,
    pub lon: f64,
    pub place: String,
    pub intent: String,
    #[serde(default)]
    pub meet_time: Option<String>,
    pub clue: String,
}

// ============================================================================
// Match Requests
// ============================================================================

/// Send a match request to another user
#[derive(Debug, Clone, Deserialize)]
pub struct SendRequestRequest {
    pub receiver_id: UserId,
}

/// Accept or decline a pending incoming request
#[derive(Debug, Clone, Deserialize)]
pub struct RespondRequestRequest {
    pub request_id: RequestId,
    pub action: RequestAction,
}
