//! User entity - represents a registered account

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// A registered user account.
///
/// Invariant: when `is_matched` is true, `matched_with` references a user
/// whose own `matched_with` points back. The accept transition establishes
/// both sides atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub trust_score: i32,
    pub is_matched: bool,
    pub matched_with: Option<UserId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Trust score assigned at registration; matching logic never changes it
    pub const INITIAL_TRUST_SCORE: i32 = 100;

    /// Create a new unmatched, active user
    pub fn new(id: UserId, username: String) -> Self {
        Self {
            id,
            username,
            trust_score: Self::INITIAL_TRUST_SCORE,
            is_matched: false,
            matched_with: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Whether the user can appear in discovery and accept matches
    #[inline]
    pub fn is_available(&self) -> bool {
        !self.is_matched
    }
}
