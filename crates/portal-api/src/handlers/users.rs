//! User handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use portal_service::dto::requests::{AdminUpdateUserRequest, UpdateProfileRequest};
use portal_service::dto::responses::UserResponse;
use portal_service::UserService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Everyone except the caller; feeds the conversation picker
///
/// GET /users/directory
pub async fn directory(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.directory(auth.user_id).await?;
    Ok(Json(response))
}

/// Every account, staff only
///
/// GET /users
pub async fn list_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list_all(auth.role).await?;
    Ok(Json(response))
}

/// Update the caller's own profile
///
/// PATCH /users/@me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Staff edit of another user's account
///
/// PATCH /users/:user_id
pub async fn admin_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<AdminUpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.admin_update(auth.role, user_id, request).await?;
    Ok(Json(response))
}

/// Delete an account, admin only
///
/// DELETE /users/:user_id
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.remove(auth.user_id, auth.role, user_id).await?;
    Ok(NoContent)
}
