//! Application state for dependency injection.

use std::sync::Arc;

use auth_service_lib::{AccessGate, AuthService, ServiceContainer, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub gate: Arc<AccessGate>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        gate: Arc<AccessGate>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            gate,
        }
    }

    /// Build state from a service container.
    pub fn from_services(services: &impl ServiceContainer) -> Self {
        Self::new(services.auth(), services.users(), services.gate())
    }
}
