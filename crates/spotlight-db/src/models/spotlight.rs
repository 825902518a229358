//! Spotlight (check-in) database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for spotlights table
#[derive(Debug, Clone, FromRow)]
pub struct SpotlightModel {
    pub id: i64,
    pub user_id: i64,
    pub lat: f64,
    pub lon: f64,
    pub place: String,
    pub intent: String,
    pub meet_time: Option<String>,
    pub clue: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Row shape for the discovery scan, joined with the owner's profile fields
#[derive(Debug, Clone, FromRow)]
pub struct ActiveSpotlightModel {
    pub user_id: i64,
    pub lat: f64,
    pub lon: f64,
    pub username: String,
    pub trust_score: i32,
}
