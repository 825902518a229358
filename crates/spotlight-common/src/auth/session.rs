//! Session tokens carried in an HttpOnly cookie
//!
//! A session is a signed JWT binding the browser to exactly one user id for
//! the token's lifetime. There is no server-side session table; logout
//! simply clears the cookie.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spotlight_core::UserId;

use crate::error::AppError;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "spotlight_session";

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Session ID, for correlating log lines
    pub sid: String,
}

impl SessionClaims {
    /// Get the user ID this session is bound to
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as a user id
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub
            .parse::<UserId>()
            .map_err(|_| AppError::InvalidSession)
    }

    /// Check if the session has expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Issues and validates session tokens
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl SessionService {
    /// Create a new session service with the given signing secret and TTL
    #[must_use]
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Issue a session token for a user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, user_id: UserId) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
            sid: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode session token")))
    }

    /// Validate a session token and return its claims
    ///
    /// # Errors
    /// Returns `InvalidSession` for malformed, mis-signed, or expired tokens
    pub fn validate(&self, token: &str) -> Result<SessionClaims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::InvalidSession)?;

        Ok(token_data.claims)
    }

    /// Session lifetime in seconds
    #[must_use]
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> SessionService {
        SessionService::new("test-secret-key-that-is-long-enough", 86400)
    }

    #[test]
    fn test_issue_and_validate() {
        let service = create_test_service();
        let user_id = UserId::new(12345);

        let token = service.issue(user_id).unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.sub, "12345");
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert!(!claims.is_expired());
        assert!(!claims.sid.is_empty());
    }

    #[test]
    fn test_distinct_session_ids() {
        let service = create_test_service();
        let user_id = UserId::new(1);

        let a = service.validate(&service.issue(user_id).unwrap()).unwrap();
        let b = service.validate(&service.issue(user_id).unwrap()).unwrap();
        assert_ne!(a.sid, b.sid);
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();
        let result = service.validate("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidSession)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = create_test_service();
        let other = SessionService::new("a-completely-different-secret", 86400);

        let token = service.issue(UserId::new(7)).unwrap();
        assert!(matches!(other.validate(&token), Err(AppError::InvalidSession)));
    }

    #[test]
    fn test_claims_bad_subject() {
        let claims = SessionClaims {
            sub: "not-a-number".to_string(),
            iat: 0,
            exp: i64::MAX,
            sid: "s".to_string(),
        };
        assert!(matches!(claims.user_id(), Err(AppError::InvalidSession)));
    }
}
