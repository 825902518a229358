//! Match request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for requests table
#[derive(Debug, Clone, FromRow)]
pub struct RequestModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub status: String,
    pub matched: bool,
    pub created_at: DateTime<Utc>,
}

/// Row shape for the pending-request poll, joined with the sender's username
#[derive(Debug, Clone, FromRow)]
pub struct IncomingRequestModel {
    pub id: i64,
    pub sender_id: i64,
    pub sender_username: String,
}
