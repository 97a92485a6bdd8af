//! SMS relay stub handler
//!
//! Stands in for the external SMS provider during local development: it
//! accepts the relay wire format and records the send as a broadcast
//! message row.

use axum::{extract::State, Json};

use portal_service::dto::requests::SmsStubRequest;
use portal_service::dto::responses::SmsSendResponse;
use portal_service::MessageService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Accept an SMS send and record it
///
/// POST /sms/send
pub async fn send(
    State(state): State<AppState>,
    Json(request): Json<SmsStubRequest>,
) -> ApiResult<Json<SmsSendResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service.record_relay_send(request).await?;
    Ok(Json(response))
}
