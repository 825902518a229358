//! Match request entity and its two-party protocol states

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{RequestId, UserId};

/// Lifecycle state of a match request.
///
/// Created `Pending` by the sender; `Accepted` and `Declined` are terminal.
/// There is no sender-side cancellation and no expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

impl RequestStatus {
    /// Storage representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    /// Parse from the storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "declined" => Some(Self::Declined),
            _ => None,
        }
    }

    /// Whether the request can no longer change state
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The receiver's verdict on a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestAction {
    Accept,
    Decline,
}

impl RequestAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Decline => "decline",
        }
    }
}

impl fmt::Display for RequestAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A match request from one user to another.
///
/// The `matched` flag is redundant with `status == Accepted`; it is kept
/// because the stored data model carries both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRequest {
    pub id: RequestId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub status: RequestStatus,
    pub matched: bool,
    pub created_at: DateTime<Utc>,
}

impl MatchRequest {
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}
