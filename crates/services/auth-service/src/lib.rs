//! Auth Service Library
//!
//! Password hashing, session tokens, the authentication flow and the
//! role-based access gate, over a pluggable user directory.

pub mod config;
pub mod directory;
pub mod gate;
pub mod pagination;
pub mod service;
pub mod token;

pub use config::AuthServiceConfig;
pub use directory::{DirectoryResult, InMemoryDirectory, UserDirectory};
pub use gate::{AccessGate, AccessPolicy, Operation, Principal, Rule};
pub use pagination::PageRequest;
pub use service::{AuthService, Authenticator, ServiceContainer, Services, UserManager, UserService};
pub use token::{Claims, IssuedToken, TokenError, TokenService};

#[cfg(any(test, feature = "test-utils"))]
pub use directory::MockUserDirectory;
