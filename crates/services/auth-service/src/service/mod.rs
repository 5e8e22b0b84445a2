//! Authentication flow and user use cases.

mod auth_service;
mod container;
mod hashing;
mod user_service;

pub use auth_service::{AuthService, Authenticator};
pub use container::{ServiceContainer, Services};
pub use user_service::{UserManager, UserService};
