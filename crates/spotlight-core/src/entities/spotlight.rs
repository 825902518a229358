//! Spotlight entity - a user's time-bounded, geolocated check-in

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::{Coordinates, SpotlightId, UserId};

/// A live check-in broadcasting availability and intent at a location.
///
/// Each user holds at most one spotlight at a time; checking in again
/// replaces the previous one. Expired rows are ignored on read rather than
/// proactively purged.
#[derive(Debug, Clone, PartialEq)]
pub struct Spotlight {
    pub id: SpotlightId,
    pub user_id: UserId,
    pub position: Coordinates,
    pub place: String,
    pub intent: String,
    pub meet_time: Option<String>,
    pub clue: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Spotlight {
    /// Lifetime when a meet time was announced: 2 hours
    pub const TTL_WITH_MEET_TIME_SECS: i64 = 7200;
    /// Default lifetime: 90 minutes
    pub const TTL_DEFAULT_SECS: i64 = 5400;

    /// Compute the expiry for a check-in created at `created_at`
    pub fn expiry_for(created_at: DateTime<Utc>, has_meet_time: bool) -> DateTime<Utc> {
        let ttl = if has_meet_time {
            Self::TTL_WITH_MEET_TIME_SECS
        } else {
            Self::TTL_DEFAULT_SECS
        };
        created_at + Duration::seconds(ttl)
    }

    /// A spotlight is live only while `expires_at` lies strictly in the future
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
