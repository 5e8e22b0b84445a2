//! Auth service configuration.

use common::{ConfigError, HashConfig, JwtConfig};

/// Auth service configuration.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Token signing secret and lifetime
    pub jwt: JwtConfig,
    /// Argon2 cost parameters
    pub hash: HashConfig,
}

impl AuthServiceConfig {
    pub fn new(jwt: JwtConfig, hash: HashConfig) -> Self {
        Self { jwt, hash }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `JWT_SECRET`, `JWT_EXPIRATION_HOURS` and the
    /// `PASSWORD_HASH_*` cost variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
            hash: HashConfig::from_env()?,
        })
    }
}
