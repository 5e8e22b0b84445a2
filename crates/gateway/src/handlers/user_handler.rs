//! User handlers.
//!
//! Every route here sits behind `auth_middleware`; each handler asks the
//! access gate about its own operation before touching the user service.

use axum::{
    extract::{rejection::QueryRejection, Extension, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use auth_service_lib::{Operation, PageRequest, Principal};
use common::{AppError, AppResult};
use domain::{BriefUser, UserChanges, UserResponse};

use crate::extractors::{UserIdPath, ValidatedJson};
use crate::state::AppState;

/// Profile update request; empty fields are left unchanged
#[derive(Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 20, message = "Name must be at most 20 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub password: Option<String>,
}

/// Read a blank string as an absent field
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Raw pagination query; parsed by `PageRequest`
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListMeta {
    pub page: u64,
    pub limit: u64,
}

/// Paginated user listing
#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub data: Vec<BriefUser>,
    pub meta: ListMeta,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).put(update_own_profile))
        .route("/:user_id", get(get_user).delete(delete_user))
}

/// Get a user's profile
pub async fn get_user(
    Extension(principal): Extension<Principal>,
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> AppResult<Json<UserResponse>> {
    state
        .gate
        .authorize(&principal, Operation::ReadUser, Some(user_id))?;

    let user = state.user_service.get_user(user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// List users (admin only)
pub async fn list_users(
    Extension(principal): Extension<Principal>,
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Json<UserListResponse>> {
    state
        .gate
        .authorize(&principal, Operation::ListUsers, None)?;

    let Query(query) = query.map_err(|e| AppError::invalid_input(e.body_text()))?;
    let page = PageRequest::parse(query.page.as_deref(), query.limit.as_deref())?;

    let data = state.user_service.list_users(page).await?;
    Ok(Json(UserListResponse {
        data,
        meta: ListMeta {
            page: page.page(),
            limit: page.limit(),
        },
    }))
}

/// Update the caller's own profile; the target always comes from the token
pub async fn update_own_profile(
    Extension(principal): Extension<Principal>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let target = principal.user_id;
    state
        .gate
        .authorize(&principal, Operation::UpdateOwnProfile, Some(target))?;

    let changes = UserChanges {
        name: payload.name,
        email: payload.email,
        password: payload.password,
    };
    let user = state.user_service.update_user(target, changes).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete a user (admin only)
pub async fn delete_user(
    Extension(principal): Extension<Principal>,
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> AppResult<Json<MessageResponse>> {
    state
        .gate
        .authorize(&principal, Operation::DeleteUser, Some(user_id))?;

    state.user_service.delete_user(user_id).await?;
    Ok(Json(MessageResponse {
        message: format!("User {} deleted", user_id),
    }))
}
