//! Gateway configuration.

use auth_service_lib::AuthServiceConfig;
use common::{env_opt, env_or, ConfigError};
use domain::ROLE_ADMIN;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Administrator account created at startup when configured.
#[derive(Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl std::fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeed")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

impl AdminSeed {
    /// Read `ADMIN_EMAIL`, `ADMIN_PASSWORD` and `ADMIN_NAME`.
    ///
    /// Seeding is off unless both email and password are set.
    pub fn from_env() -> Option<Self> {
        let email = env_opt("ADMIN_EMAIL")?;
        let password = env_opt("ADMIN_PASSWORD")?;
        let name = env_opt("ADMIN_NAME").unwrap_or_else(|| ROLE_ADMIN.to_string());
        Some(Self {
            email,
            password,
            name,
        })
    }
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Token and hashing settings
    pub auth: AuthServiceConfig,
    /// Optional bootstrap administrator
    pub admin: Option<AdminSeed>,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_opt("GATEWAY_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: env_or("GATEWAY_PORT", DEFAULT_PORT)?,
            auth: AuthServiceConfig::from_env()?,
            admin: AdminSeed::from_env(),
        })
    }

    /// Override the listen address (command-line flags win over the environment)
    pub fn with_addr(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{HashConfig, JwtConfig};

    fn config() -> GatewayConfig {
        GatewayConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            auth: AuthServiceConfig::new(
                JwtConfig::new("gateway-config-test-secret-32-bytes!", 1).unwrap(),
                HashConfig::default(),
            ),
            admin: Some(AdminSeed {
                email: "root@example.com".to_string(),
                password: "super-secret".to_string(),
                name: "root".to_string(),
            }),
        }
    }

    #[test]
    fn test_flags_override_address() {
        let config = config().with_addr(Some("127.0.0.1".to_string()), Some(8080));
        assert_eq!(config.addr(), "127.0.0.1:8080");

        let config = config.with_addr(None, None);
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", config());
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("gateway-config-test-secret"));
    }
}
