//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Each test gets its
//! own coordinate patch far away from every other test, so nearby scans
//! against a shared database never see another test's users.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    let pid = u64::from(std::process::id());
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    pid * 10_000 + n
}

/// A coordinate origin unique to this test, roughly 55 km away from the
/// origins of all other tests
pub fn unique_origin() -> (f64, f64) {
    let n = unique_suffix() % 240;
    #[allow(clippy::cast_precision_loss)]
    let lat = -60.0 + n as f64 * 0.5;
    (lat, 120.0)
}

/// Signup / login form body
#[derive(Debug, Clone, Serialize)]
pub struct AuthForm {
    pub username: String,
    pub password: String,
}

impl AuthForm {
    pub fn unique() -> Self {
        Self {
            username: format!("testuser{}", unique_suffix()),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Check-in request body
#[derive(Debug, Clone, Serialize)]
pub struct CheckInBody {
    pub lat: f64,
    pub lon: f64,
    pub place: String,
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meet_time: Option<String>,
    pub clue: String,
}

impl CheckInBody {
    pub fn at(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            place: "corner cafe".to_string(),
            intent: "coffee".to_string(),
            meet_time: None,
            clue: "red scarf".to_string(),
        }
    }
}

/// Match request body
#[derive(Debug, Serialize)]
pub struct SendRequestBody {
    pub receiver_id: i64,
}

/// Respond body
#[derive(Debug, Serialize)]
pub struct RespondBody {
    pub request_id: i64,
    pub action: String,
}

impl RespondBody {
    pub fn accept(request_id: i64) -> Self {
        Self {
            request_id,
            action: "accept".to_string(),
        }
    }

    pub fn decline(request_id: i64) -> Self {
        Self {
            request_id,
            action: "decline".to_string(),
        }
    }
}

/// Simple status response
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

/// User info response
#[derive(Debug, Deserialize)]
pub struct UserInfoBody {
    pub trust_score: i32,
    pub is_matched: bool,
    pub matched_with: Option<i64>,
}

/// One entry of the nearby scan
#[derive(Debug, Deserialize)]
pub struct NearbyEntry {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub username: String,
    pub trust_score: i32,
}

/// Match status response
#[derive(Debug, Deserialize)]
pub struct MatchStatusBody {
    pub matched: bool,
    pub partner: Option<String>,
}
