//! Audit log handlers

use axum::{
    extract::{Query, State},
    Json,
};

use portal_service::dto::requests::AuditQuery;
use portal_service::dto::responses::AuditLogResponse;
use portal_service::AuditService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Filtered audit listing, admin only
///
/// GET /audit-logs
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<AuditQuery>,
) -> ApiResult<Json<Vec<AuditLogResponse>>> {
    let service = AuditService::new(state.service_context());
    let response = service.list(auth.role, query).await?;
    Ok(Json(response))
}
