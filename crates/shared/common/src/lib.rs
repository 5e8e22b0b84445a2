//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - The unified error type and its HTTP mapping
//! - Configuration structures loaded from the environment

pub mod config;
pub mod error;

pub use config::{env_opt, env_or, ConfigError, HashConfig, JwtConfig};
pub use error::{AppError, AppResult};
