//! Service context - dependency container for services
//!
//! Holds the repositories, session service, and database pool that every
//! service call borrows.

use std::sync::Arc;

use spotlight_common::SessionService;
use spotlight_core::traits::{RequestRepository, SpotlightRepository, UserRepository};
use spotlight_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - The database pool (for health checks)
/// - Repositories
/// - The session token service
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    user_repo: Arc<dyn UserRepository>,
    request_repo: Arc<dyn RequestRepository>,
    spotlight_repo: Arc<dyn SpotlightRepository>,

    session_service: Arc<SessionService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        request_repo: Arc<dyn RequestRepository>,
        spotlight_repo: Arc<dyn SpotlightRepository>,
        session_service: Arc<SessionService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            request_repo,
            spotlight_repo,
            session_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the request repository
    pub fn request_repo(&self) -> &dyn RequestRepository {
        self.request_repo.as_ref()
    }

    /// Get the spotlight repository
    pub fn spotlight_repo(&self) -> &dyn SpotlightRepository {
        self.spotlight_repo.as_ref()
    }

    /// Get the session token service
    pub fn session_service(&self) -> &SessionService {
        self.session_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    request_repo: Option<Arc<dyn RequestRepository>>,
    spotlight_repo: Option<Arc<dyn SpotlightRepository>>,
    session_service: Option<Arc<SessionService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn request_repo(mut self, repo: Arc<dyn RequestRepository>) -> Self {
        self.request_repo = Some(repo);
        self
    }

    pub fn spotlight_repo(mut self, repo: Arc<dyn SpotlightRepository>) -> Self {
        self.spotlight_repo = Some(repo);
        self
    }

    pub fn session_service(mut self, service: Arc<SessionService>) -> Self {
        self.session_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.request_repo
                .ok_or_else(|| ServiceError::validation("request_repo is required"))?,
            self.spotlight_repo
                .ok_or_else(|| ServiceError::validation("spotlight_repo is required"))?,
            self.session_service
                .ok_or_else(|| ServiceError::validation("session_service is required"))?,
        ))
    }
}
