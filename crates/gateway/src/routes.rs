//! Route configuration.

use axum::{middleware, Router};

use crate::handlers::{auth_routes, health_routes, user_routes};
use crate::middleware::auth_middleware;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (no auth)
        .nest("/health", health_routes())
        // Signup and login (no auth)
        .nest("/auth", auth_routes())
        // User routes (bearer token required)
        .nest(
            "/users",
            user_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .with_state(state)
}
