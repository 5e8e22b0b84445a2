//! API Gateway Library
//!
//! HTTP boundary over the authentication flow and access gate.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use auth_service_lib::{AuthService, InMemoryDirectory, ServiceContainer, Services};
use common::{AppError, AppResult};
use domain::{NewUser, UserRole};

use crate::config::{AdminSeed, GatewayConfig};
use crate::routes::create_router;
use crate::state::AppState;

/// Build services over a fresh in-memory directory, seeding the admin if configured.
pub async fn build_state(config: &GatewayConfig) -> AppResult<AppState> {
    let directory = Arc::new(InMemoryDirectory::new());
    let services = Services::from_config(&config.auth, directory)?;

    if let Some(seed) = &config.admin {
        seed_admin(services.auth().as_ref(), seed).await?;
    }

    Ok(AppState::from_services(&services))
}

/// Create the administrator account; an existing account is left alone.
pub async fn seed_admin(auth: &dyn AuthService, seed: &AdminSeed) -> AppResult<()> {
    let new_user = NewUser {
        email: seed.email.clone(),
        password: seed.password.clone(),
        name: seed.name.clone(),
    };

    match auth.provision(new_user, UserRole::Admin).await {
        Ok(user) => {
            info!(user_id = %user.id, "Seeded admin account");
            Ok(())
        }
        Err(AppError::IdentifierAlreadyExists) => {
            warn!("Admin account already exists, skipping seed");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config).await?;

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.addr().parse()?;
    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
