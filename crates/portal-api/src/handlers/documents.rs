//! Document handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use portal_service::dto::requests::{ReviewDocumentRequest, SubmitDocumentRequest};
use portal_service::dto::responses::{ComplianceResponse, DocumentResponse, DocumentTypeResponse};
use portal_service::DocumentService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// All document types
///
/// GET /documents/types
pub async fn list_types(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<DocumentTypeResponse>>> {
    let service = DocumentService::new(state.service_context());
    let response = service.list_types().await?;
    Ok(Json(response))
}

/// The caller's own submissions
///
/// GET /documents
pub async fn my_documents(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<DocumentResponse>>> {
    let service = DocumentService::new(state.service_context());
    let response = service.my_documents(auth.user_id).await?;
    Ok(Json(response))
}

/// The full review queue, staff only
///
/// GET /documents/all
pub async fn all_documents(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<DocumentResponse>>> {
    let service = DocumentService::new(state.service_context());
    let response = service.all_documents(auth.role).await?;
    Ok(Json(response))
}

/// Submit a document for review
///
/// POST /documents
pub async fn submit(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SubmitDocumentRequest>,
) -> ApiResult<Created<Json<DocumentResponse>>> {
    let service = DocumentService::new(state.service_context());
    let response = service.submit(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Approve or reject a pending document, staff only
///
/// POST /documents/:document_id/review
pub async fn review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(document_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<ReviewDocumentRequest>,
) -> ApiResult<Json<DocumentResponse>> {
    let service = DocumentService::new(state.service_context());
    let response = service
        .review(auth.user_id, auth.role, document_id, request)
        .await?;
    Ok(Json(response))
}

/// Required-document compliance for the caller
///
/// GET /documents/compliance
pub async fn compliance(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ComplianceResponse>> {
    let service = DocumentService::new(state.service_context());
    let response = service.compliance(auth.user_id).await?;
    Ok(Json(response))
}
