//! Application state
//!
//! Handlers share one [`ServiceContext`] behind an `Arc`; cloning the state
//! per connection is a pointer copy. Configuration is consumed during
//! startup in `server::create_app_state` and not retained here.

use std::sync::Arc;

use spotlight_common::SessionService;
use spotlight_service::ServiceContext;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
}

impl AppState {
    /// Wrap a service context for sharing across handlers
    pub fn new(service_context: ServiceContext) -> Self {
        Self {
            service_context: Arc::new(service_context),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the session token service, used by the cookie extractors
    pub fn session_service(&self) -> &SessionService {
        self.service_context.session_service()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
