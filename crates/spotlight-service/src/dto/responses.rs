//! Response DTOs for API endpoints

use serde::Serialize;

use spotlight_core::value_objects::{RequestId, UserId};

/// Minimal `{"status": ...}` acknowledgement body
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    /// Check-in went live
    pub fn live() -> Self {
        Self::new("live")
    }

    /// Check-out completed
    pub fn off() -> Self {
        Self::new("off")
    }

    /// Match request sent
    pub fn sent() -> Self {
        Self::new("sent")
    }
}

/// Current user projection for the profile widget
#[derive(Debug, Clone, Serialize)]
pub struct UserInfoResponse {
    pub trust_score: i32,
    pub is_matched: bool,
    pub matched_with: Option<UserId>,
}

/// One discoverable user on the map
#[derive(Debug, Clone, Serialize)]
pub struct NearbyUser {
    /// Owner's user id
    pub id: UserId,
    pub lat: f64,
    pub lon: f64,
    pub username: String,
    pub trust_score: i32,
}

/// Sender details surfaced to the polling receiver
#[derive(Debug, Clone, Serialize)]
pub struct IncomingRequestData {
    pub id: RequestId,
    pub username: String,
}

/// Poll result for pending incoming requests
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CheckRequestsResponse {
    Incoming { data: IncomingRequestData },
    None,
}

/// Current match state, with the partner's username once matched
#[derive(Debug, Clone, Serialize)]
pub struct MatchStatusResponse {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
}

impl MatchStatusResponse {
    pub fn unmatched() -> Self {
        Self {
            matched: false,
            partner: None,
        }
    }

    pub fn matched_with(partner: impl Into<String>) -> Self {
        Self {
            matched: true,
            partner: Some(partner.into()),
        }
    }
}
