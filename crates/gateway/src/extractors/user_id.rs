//! Path extractor for numeric user ids.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::AppError;
use domain::UserId;

/// `:user_id` path segment parsed as a `UserId`.
///
/// Anything that is not an unsigned integer is `InvalidInput`, never a
/// routing miss.
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid_input(e.body_text()))?;

        raw.parse::<UserId>()
            .map(UserIdPath)
            .map_err(|_| AppError::invalid_input("user_id must be an unsigned integer"))
    }
}
