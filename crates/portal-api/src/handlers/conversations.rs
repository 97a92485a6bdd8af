//! Conversation and message handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use portal_service::dto::requests::SendMessageRequest;
use portal_service::dto::responses::{ConversationResponse, MessageResponse, ThreadResponse};
use portal_service::{ConversationService, MessageService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// The caller's inbox, one entry per counterpart
///
/// GET /conversations
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ConversationResponse>>> {
    let service = ConversationService::new(state.service_context());
    let response = service.list(auth.user_id).await?;
    Ok(Json(response))
}

/// Open the thread with one counterpart, marking their messages read
///
/// GET /conversations/:counterpart_id
pub async fn open_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(counterpart_id): Path<Uuid>,
) -> ApiResult<Json<ThreadResponse>> {
    let service = ConversationService::new(state.service_context());
    let response = service.open_thread(auth.user_id, counterpart_id).await?;
    Ok(Json(response))
}

/// Send a message
///
/// POST /messages
pub async fn send(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.dispatch(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete one of the caller's own sent messages
///
/// DELETE /messages/:message_id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(message_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = MessageService::new(state.service_context());
    service.delete(auth.user_id, message_id).await?;
    Ok(NoContent)
}
