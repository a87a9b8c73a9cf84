//! User REST API handlers
//!
//! `register` and `login` are public. Everything else sits behind
//! [`require_identity`](crate::middleware::auth::require_identity), which
//! puts an [`AuthenticatedIdentity`] into the request extensions.

use crate::{
    ApiError, ApiJson, ApiResult, AppState, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, UpdateUserRequest, UserDto,
};

use ud_auth::AuthenticatedIdentity;
use ud_core::{UserChanges, require_field};

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use log::info;

// =============================================================================
// Public
// =============================================================================

/// POST /users
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    state.registration.register(request).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("User created"))))
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let token = state.login.login(request).await?;

    Ok(Json(LoginResponse { token }))
}

// =============================================================================
// Protected
// =============================================================================

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state.store.find_all().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let user_id = parse_user_id(&id)?;

    let user = state
        .store
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))?;

    Ok(Json(user.into()))
}

/// PUT /users/{id}
///
/// Partial update; a new password is re-hashed before it is stored.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let user_id = parse_user_id(&id)?;

    if request.is_empty() {
        return Err(ApiError::validation("no fields to update", None));
    }

    let username = match request.username.as_deref() {
        Some(name) => Some(require_field("username", Some(name))?.to_string()),
        None => None,
    };

    let credential_digest = match request.password.as_deref() {
        Some(password) => {
            let password = require_field("password", Some(password))?;
            Some(state.hasher.hash_blocking(password.to_string()).await?)
        }
        None => None,
    };

    let changes = UserChanges {
        username,
        credential_digest,
        email: request.email,
        is_active: request.is_active,
    };

    let rows = state.store.update(user_id, &changes).await?;
    if rows == 0 {
        return Err(ApiError::not_found(format!("User {} not found", user_id)));
    }

    info!("User {} updated by user {}", user_id, identity.id);
    Ok(Json(MessageResponse::new("User updated")))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let user_id = parse_user_id(&id)?;

    let rows = state.store.delete(user_id).await?;
    if rows == 0 {
        return Err(ApiError::not_found(format!("User {} not found", user_id)));
    }

    info!("User {} deleted by user {}", user_id, identity.id);
    Ok(Json(MessageResponse::new("User deleted")))
}

#[track_caller]
fn parse_user_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::validation(format!("Invalid user id: {}", raw), Some("id")))
}
