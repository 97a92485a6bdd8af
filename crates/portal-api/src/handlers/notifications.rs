//! Notification handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use portal_service::dto::responses::{NotificationResponse, UnreadCountResponse};
use portal_service::NotificationService;

use crate::extractors::AuthUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// The caller's notifications, newest first
///
/// GET /notifications
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let response = service.list(auth.user_id).await?;
    Ok(Json(response))
}

/// Unread badge count
///
/// GET /notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UnreadCountResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service.unread_count(auth.user_id).await?;
    Ok(Json(response))
}

/// Mark one notification read
///
/// POST /notifications/:notification_id/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.mark_read(notification_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Count of rows flipped by a bulk mark-read
#[derive(Debug, Serialize)]
pub struct MarkedAllResponse {
    pub marked: u64,
}

/// Mark every notification read
///
/// POST /notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MarkedAllResponse>> {
    let service = NotificationService::new(state.service_context());
    let marked = service.mark_all_read(auth.user_id).await?;
    Ok(Json(MarkedAllResponse { marked }))
}
