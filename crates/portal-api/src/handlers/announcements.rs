//! Announcement handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use portal_service::dto::requests::CreateAnnouncementRequest;
use portal_service::dto::responses::AnnouncementResponse;
use portal_service::AnnouncementService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Publish an announcement, staff only
///
/// POST /announcements
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateAnnouncementRequest>,
) -> ApiResult<Created<Json<AnnouncementResponse>>> {
    let service = AnnouncementService::new(state.service_context());
    let response = service.create(auth.user_id, auth.role, request).await?;
    Ok(Created(Json(response)))
}

/// Unexpired announcements addressed to the caller
///
/// GET /announcements
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<AnnouncementResponse>>> {
    let service = AnnouncementService::new(state.service_context());
    let response = service.list_for_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Every announcement, staff only
///
/// GET /announcements/all
pub async fn list_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<AnnouncementResponse>>> {
    let service = AnnouncementService::new(state.service_context());
    let response = service.list_all(auth.role).await?;
    Ok(Json(response))
}

/// Mark one announcement viewed by the caller
///
/// POST /announcements/:announcement_id/view
pub async fn mark_viewed(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(announcement_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = AnnouncementService::new(state.service_context());
    service.mark_viewed(announcement_id, auth.user_id).await?;
    Ok(NoContent)
}
