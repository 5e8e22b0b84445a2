//! Run the CPU-bound hasher off the async worker threads.

use std::sync::Arc;

use tokio::task;

use common::{AppError, AppResult};
use domain::{Password, SecretHasher};

/// Hash a plaintext secret on the blocking pool.
pub async fn hash_secret(hasher: Arc<dyn SecretHasher>, plain_text: String) -> AppResult<Password> {
    task::spawn_blocking(move || hasher.hash(&plain_text))
        .await
        .map_err(|e| AppError::internal(format!("hashing task failed: {}", e)))?
        .map_err(AppError::from)
}

/// Verify a candidate against a stored hash on the blocking pool.
pub async fn verify_secret(
    hasher: Arc<dyn SecretHasher>,
    stored: Password,
    candidate: String,
) -> AppResult<bool> {
    task::spawn_blocking(move || hasher.verify(&stored, &candidate))
        .await
        .map_err(|e| AppError::internal(format!("verification task failed: {}", e)))?
        .map_err(AppError::from)
}
