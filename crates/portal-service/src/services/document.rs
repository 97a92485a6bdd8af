//! Document service
//!
//! Submission stores the file bytes first, then the row; review is an
//! atomic guarded transition applied at the store so two concurrent
//! reviewers cannot both win.

use base64::Engine;
use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use portal_core::entities::{Document, DocumentMetadata};
use portal_core::error::DomainError;
use portal_core::traits::ReviewUpdate;
use portal_core::value_objects::{DocumentStatus, Role};

use crate::dto::requests::{ReviewDecision, ReviewDocumentRequest, SubmitDocumentRequest};
use crate::dto::responses::{ComplianceResponse, DocumentResponse, DocumentTypeResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Document service
pub struct DocumentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DocumentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All known document types
    pub async fn list_types(&self) -> ServiceResult<Vec<DocumentTypeResponse>> {
        let types = self.ctx.document_type_repo().list().await?;
        Ok(types.iter().map(DocumentTypeResponse::from).collect())
    }

    /// The caller's own submissions, newest first
    #[instrument(skip(self))]
    pub async fn my_documents(&self, user_id: Uuid) -> ServiceResult<Vec<DocumentResponse>> {
        let documents = self.ctx.document_repo().find_by_user(user_id).await?;
        Ok(documents.iter().map(DocumentResponse::from).collect())
    }

    /// The full review queue, staff only
    #[instrument(skip(self))]
    pub async fn all_documents(&self, caller_role: Role) -> ServiceResult<Vec<DocumentResponse>> {
        if !caller_role.is_staff() {
            return Err(DomainError::StaffRequired.into());
        }
        let documents = self.ctx.document_repo().find_all().await?;
        Ok(documents.iter().map(DocumentResponse::from).collect())
    }

    /// Submit a document for review.
    ///
    /// The object store write happens before the row insert: an orphaned
    /// file is harmless, a row pointing at nothing is not.
    #[instrument(skip(self, request), fields(user_id = %user_id, document_type_id = request.document_type_id))]
    pub async fn submit(
        &self,
        user_id: Uuid,
        request: SubmitDocumentRequest,
    ) -> ServiceResult<DocumentResponse> {
        request.validate()?;

        self.ctx
            .document_type_repo()
            .find_by_id(request.document_type_id)
            .await?
            .ok_or(DomainError::DocumentTypeNotFound(request.document_type_id))?;

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(request.content.as_bytes())
            .map_err(|_| ServiceError::validation("File content is not valid base64"))?;

        if bytes.is_empty() {
            return Err(ServiceError::validation("File is empty"));
        }
        if bytes.len() as u64 > self.ctx.max_upload_bytes() {
            return Err(ServiceError::validation(format!(
                "File exceeds the maximum size of {} bytes",
                self.ctx.max_upload_bytes()
            )));
        }

        let file_hash = hex::encode(Sha256::digest(&bytes));

        let now = Utc::now();
        let file_name = request.file_name.replace(['/', '\\'], "_");
        let path = format!("{}/{}_{}", user_id, now.timestamp_millis(), file_name);

        let stored = self.ctx.object_store().upload(&path, &bytes).await?;
        let file_url = self.ctx.object_store().public_url(&stored.path);

        let metadata = DocumentMetadata {
            file_name,
            file_size: bytes.len() as u64,
            uploaded_at: now,
        };

        let mut document = Document::new_submission(
            Uuid::new_v4(),
            user_id,
            request.document_type_id,
            file_url,
            file_hash,
            metadata,
        );
        document.expires_at = request.expires_at;

        self.ctx.document_repo().create(&document).await?;

        info!(document_id = %document.id, path = %stored.path, "document submitted");
        Ok(DocumentResponse::from(document))
    }

    /// Approve or reject a pending document, staff only.
    ///
    /// The transition is guarded by `status = pending` at the store; when
    /// the guard matches nothing the loser of a double review gets
    /// `NotPending` with the status the winner left behind.
    #[instrument(skip(self, request), fields(document_id = %document_id, reviewer_id = %reviewer_id))]
    pub async fn review(
        &self,
        reviewer_id: Uuid,
        caller_role: Role,
        document_id: Uuid,
        request: ReviewDocumentRequest,
    ) -> ServiceResult<DocumentResponse> {
        if !caller_role.is_staff() {
            return Err(DomainError::StaffRequired.into());
        }
        request.validate()?;

        let status = match request.decision {
            ReviewDecision::Approved => DocumentStatus::Approved,
            ReviewDecision::Rejected => DocumentStatus::Rejected,
        };

        let update = ReviewUpdate {
            document_id,
            reviewer_id,
            status,
            notes: request.notes,
        };

        let updated = self.ctx.document_repo().apply_review(&update).await?;
        if updated == 0 {
            let current = self
                .ctx
                .document_repo()
                .find_by_id(document_id)
                .await?
                .ok_or(DomainError::DocumentNotFound(document_id))?;
            return Err(DomainError::NotPending {
                id: document_id,
                status: current.status,
            }
            .into());
        }

        let document = self
            .ctx
            .document_repo()
            .find_by_id(document_id)
            .await?
            .ok_or(DomainError::DocumentNotFound(document_id))?;

        info!(document_id = %document_id, status = %document.status, "document reviewed");
        Ok(DocumentResponse::from(document))
    }

    /// Required-document compliance, derived at read time: a required type
    /// is satisfied by an approved, unexpired document
    #[instrument(skip(self))]
    pub async fn compliance(&self, user_id: Uuid) -> ServiceResult<ComplianceResponse> {
        let now = Utc::now();
        let types = self.ctx.document_type_repo().list().await?;
        let documents = self.ctx.document_repo().find_by_user(user_id).await?;

        let mut satisfied = Vec::new();
        let mut missing = Vec::new();
        for t in types.iter().filter(|t| t.required) {
            let ok = documents
                .iter()
                .any(|d| d.document_type_id == t.id && d.satisfies_requirement_at(now));
            if ok {
                satisfied.push(t.id);
            } else {
                missing.push(t.id);
            }
        }

        Ok(ComplianceResponse {
            compliant: missing.is_empty(),
            satisfied,
            missing,
        })
    }
}
