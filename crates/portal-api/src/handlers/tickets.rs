//! Support ticket handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use portal_service::dto::requests::{CreateTicketRequest, UpdateTicketRequest};
use portal_service::dto::responses::TicketResponse;
use portal_service::SupportService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Open a new ticket
///
/// POST /tickets
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTicketRequest>,
) -> ApiResult<Created<Json<TicketResponse>>> {
    let service = SupportService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// The caller's own tickets
///
/// GET /tickets
pub async fn my_tickets(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<TicketResponse>>> {
    let service = SupportService::new(state.service_context());
    let response = service.my_tickets(auth.user_id).await?;
    Ok(Json(response))
}

/// The triage queue, staff only
///
/// GET /tickets/all
pub async fn list_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<TicketResponse>>> {
    let service = SupportService::new(state.service_context());
    let response = service.list_all(auth.role).await?;
    Ok(Json(response))
}

/// Update status/assignee, staff only
///
/// PATCH /tickets/:ticket_id
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(ticket_id): Path<Uuid>,
    Json(request): Json<UpdateTicketRequest>,
) -> ApiResult<Json<TicketResponse>> {
    let service = SupportService::new(state.service_context());
    let response = service.update(auth.role, ticket_id, request).await?;
    Ok(Json(response))
}
