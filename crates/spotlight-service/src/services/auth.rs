//! Authentication service
//!
//! Handles user registration, login, and the current-user projection.

use tracing::{info, instrument, warn};

use spotlight_common::auth::{hash_password, verify_password};
use spotlight_common::AppError;
use spotlight_core::entities::User;
use spotlight_core::error::DomainError;
use spotlight_core::value_objects::UserId;

use crate::dto::{LoginRequest, RegisterRequest, UserInfoResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A successfully authenticated user together with their session token
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub user: User,
    pub session_token: String,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and start a session.
    ///
    /// Unlike login, a taken username is reported as such; the original
    /// product surfaces "Username already exists" on the signup page.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthOutcome> {
        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(DomainError::UsernameTaken.into());
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // A concurrent signup may still win the race; the unique constraint
        // surfaces as UsernameTaken here too.
        let user = self
            .ctx
            .user_repo()
            .create(&request.username, &password_hash)
            .await?;

        info!(user_id = %user.id, "User registered");

        let session_token = self.issue_session(user.id)?;
        Ok(AuthOutcome {
            user,
            session_token,
        })
    }

    /// Login with username and password.
    ///
    /// Unknown user and wrong password are indistinguishable to the caller.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthOutcome> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in");

        let session_token = self.issue_session(user.id)?;
        Ok(AuthOutcome {
            user,
            session_token,
        })
    }

    /// Load the session's user
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    /// Profile projection for the authenticated user
    #[instrument(skip(self))]
    pub async fn user_info(&self, user_id: UserId) -> ServiceResult<UserInfoResponse> {
        let user = self.current_user(user_id).await?;
        Ok(UserInfoResponse {
            trust_score: user.trust_score,
            is_matched: user.is_matched,
            matched_with: user.matched_with,
        })
    }

    fn issue_session(&self, user_id: UserId) -> ServiceResult<String> {
        self.ctx
            .session_service()
            .issue(user_id)
            .map_err(ServiceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::test_context;

    #[tokio::test]
    async fn test_register_and_login() {
        let (ctx, _repos) = test_context();
        let auth = AuthService::new(&ctx);

        let outcome = auth
            .register(RegisterRequest {
                username: "alice".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.user.username, "alice");
        assert_eq!(outcome.user.trust_score, 100);
        assert!(!outcome.session_token.is_empty());

        // Token binds to the registered user
        let claims = ctx
            .session_service()
            .validate(&outcome.session_token)
            .unwrap();
        assert_eq!(claims.user_id().unwrap(), outcome.user.id);

        let login = auth
            .login(LoginRequest {
                username: "alice".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(login.user.id, outcome.user.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let (ctx, _repos) = test_context();
        let auth = AuthService::new(&ctx);

        let request = RegisterRequest {
            username: "alice".to_string(),
            password: "hunter2hunter2".to_string(),
        };
        auth.register(request.clone()).await.unwrap();

        let err = auth.register(request).await.unwrap_err();
        assert_eq!(err.error_code(), "USERNAME_TAKEN");
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_generic() {
        let (ctx, _repos) = test_context();
        let auth = AuthService::new(&ctx);

        auth.register(RegisterRequest {
            username: "alice".to_string(),
            password: "hunter2hunter2".to_string(),
        })
        .await
        .unwrap();

        let wrong_password = auth
            .login(LoginRequest {
                username: "alice".to_string(),
                password: "nope".to_string(),
            })
            .await
            .unwrap_err();

        let unknown_user = auth
            .login(LoginRequest {
                username: "mallory".to_string(),
                password: "whatever".to_string(),
            })
            .await
            .unwrap_err();

        // Same code and status either way, no user enumeration
        assert_eq!(wrong_password.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(unknown_user.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(wrong_password.status_code(), 401);
        assert_eq!(unknown_user.status_code(), 401);
    }

    #[tokio::test]
    async fn test_user_info_projection() {
        let (ctx, _repos) = test_context();
        let auth = AuthService::new(&ctx);

        let outcome = auth
            .register(RegisterRequest {
                username: "alice".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();

        let info = auth.user_info(outcome.user.id).await.unwrap();
        assert_eq!(info.trust_score, 100);
        assert!(!info.is_matched);
        assert!(info.matched_with.is_none());
    }
}
