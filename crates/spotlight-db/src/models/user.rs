//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table.
///
/// The password hash is deliberately absent; it is only ever read through
/// the dedicated credential lookup.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub trust_score: i32,
    pub is_matched: bool,
    pub matched_with: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
