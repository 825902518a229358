//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The matching logic never sees query text.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{MatchRequest, Spotlight, User};
use crate::error::DomainError;
use crate::value_objects::{Coordinates, RequestId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user with the given credential hash.
    /// Fails with `UsernameTaken` when the username is in use.
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Request Repository
// ============================================================================

/// A pending incoming request joined with its sender's username,
/// as surfaced to the polling receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingRequest {
    pub id: RequestId,
    pub sender_id: UserId,
    pub sender_username: String,
}

#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Insert a new pending request
    async fn create(&self, sender_id: UserId, receiver_id: UserId) -> RepoResult<MatchRequest>;

    /// Find request by ID
    async fn find_by_id(&self, id: RequestId) -> RepoResult<Option<MatchRequest>>;

    /// Whether a pending request already exists for this ordered pair
    async fn pending_exists(&self, sender_id: UserId, receiver_id: UserId) -> RepoResult<bool>;

    /// The receiver's most recent pending incoming request, if any
    async fn latest_pending_for(&self, receiver_id: UserId) -> RepoResult<Option<IncomingRequest>>;

    /// Accept a pending request in a single atomic transition:
    /// the request moves to `accepted`, both users go from unmatched to
    /// mutually matched conditioned on both currently being unmatched, and
    /// both users' spotlights are removed. Fails with
    /// `RequestAlreadyResolved` when the request is no longer pending, or
    /// `AlreadyMatched` when either user has been matched in the meantime;
    /// in either case no state changes.
    async fn accept(&self, request: &MatchRequest) -> RepoResult<()>;

    /// Decline a pending request. Fails with `RequestAlreadyResolved`
    /// when the request is no longer pending.
    async fn decline(&self, id: RequestId) -> RepoResult<()>;
}

// ============================================================================
// Spotlight Repository
// ============================================================================

/// Payload for creating or replacing a user's check-in
#[derive(Debug, Clone, PartialEq)]
pub struct CheckIn {
    pub user_id: UserId,
    pub position: Coordinates,
    pub place: String,
    pub intent: String,
    pub meet_time: Option<String>,
    pub clue: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// A live check-in joined with its owner's public profile fields,
/// as returned by the discovery scan
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSpotlight {
    pub user_id: UserId,
    pub position: Coordinates,
    pub username: String,
    pub trust_score: i32,
}

#[async_trait]
pub trait SpotlightRepository: Send + Sync {
    /// Create or replace the user's check-in. At most one row per user,
    /// enforced structurally by the keyed store.
    async fn upsert(&self, check_in: &CheckIn) -> RepoResult<Spotlight>;

    /// Remove the user's check-in; no-op when none exists
    async fn delete_for_user(&self, user_id: UserId) -> RepoResult<()>;

    /// All unexpired check-ins excluding the given user's own and those of
    /// matched owners. The distance predicate is applied by the caller.
    async fn active_excluding(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> RepoResult<Vec<ActiveSpotlight>>;
}
