//! HTTP handlers.

mod auth_handler;
mod health_handler;
mod user_handler;

pub use auth_handler::{auth_routes, LoginRequest, LoginResponse, SignupRequest};
pub use health_handler::health_routes;
pub use user_handler::{user_routes, ListMeta, UpdateUserRequest, UserListResponse};
