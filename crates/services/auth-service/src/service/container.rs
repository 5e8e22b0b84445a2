//! Service Container - wires the directory, hasher and token service into
//! the use-case services and the access gate.

use std::sync::Arc;

use common::AppResult;
use domain::{Argon2Hasher, SecretHasher};

use super::{AuthService, Authenticator, UserManager, UserService};
use crate::config::AuthServiceConfig;
use crate::directory::UserDirectory;
use crate::gate::{AccessGate, AccessPolicy};
use crate::token::TokenService;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get the access gate
    fn gate(&self) -> Arc<AccessGate>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    gate: Arc<AccessGate>,
}

impl Services {
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

    /// Build all services over one directory, hasher and token service.
    pub fn build(
        directory: Arc<dyn UserDirectory>,
        hasher: Arc<dyn SecretHasher>,
        tokens: Arc<TokenService>,
        policy: AccessPolicy,
    ) -> AppResult<Self> {
        let auth_service = Arc::new(Authenticator::new(
            directory.clone(),
            hasher.clone(),
            tokens.clone(),
        )?);
        let user_service = Arc::new(UserManager::new(directory, hasher));
        let gate = Arc::new(AccessGate::new(tokens, policy));

        Ok(Self::new(auth_service, user_service, gate))
    }

    /// Create the container from configuration with the standard policy
    pub fn from_config(
        config: &AuthServiceConfig,
        directory: Arc<dyn UserDirectory>,
    ) -> AppResult<Self> {
        let hasher = Arc::new(Argon2Hasher::new(config.hash.cost())?);
        let tokens = Arc::new(TokenService::from_config(&config.jwt));

        Self::build(directory, hasher, tokens, AccessPolicy::standard())
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn gate(&self) -> Arc<AccessGate> {
        self.gate.clone()
    }
}
