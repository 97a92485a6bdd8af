//! PostgreSQL implementations of the document repositories
//!
//! The review transition is a single conditional UPDATE guarded by
//! `status = 'pending'`: concurrent reviews race on the guard and exactly one
//! wins. The losing caller sees zero rows affected and reports the conflict.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::{Document, DocumentType};
use portal_core::{DocumentRepository, DocumentTypeRepository, RepoResult, ReviewUpdate};

use crate::models::{DocumentModel, DocumentTypeModel};

use super::error::map_db_error;

const DOCUMENT_SELECT: &str = r"
    SELECT id, user_id, document_type_id, status, file_url, file_hash,
           expires_at, verification_notes, verified_by, created_at, updated_at, metadata
    FROM documents
";

/// PostgreSQL implementation of DocumentRepository
#[derive(Clone)]
pub struct PgDocumentRepository {
    pool: PgPool,
}

impl PgDocumentRepository {
    /// Create a new PgDocumentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Document>> {
        let query = format!("{DOCUMENT_SELECT} WHERE id = $1");

        let result = sqlx::query_as::<_, DocumentModel>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Document::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Document>> {
        let query = format!("{DOCUMENT_SELECT} WHERE user_id = $1 ORDER BY created_at DESC");

        let rows = sqlx::query_as::<_, DocumentModel>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Document>> {
        let query = format!("{DOCUMENT_SELECT} ORDER BY created_at DESC");

        let rows = sqlx::query_as::<_, DocumentModel>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    #[instrument(skip(self, document), fields(document_id = %document.id))]
    async fn create(&self, document: &Document) -> RepoResult<()> {
        let metadata = document
            .metadata
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| portal_core::DomainError::InternalError(e.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO documents (id, user_id, document_type_id, status, file_url, file_hash,
                                   expires_at, created_at, updated_at, metadata)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(document.id)
        .bind(document.user_id)
        .bind(document.document_type_id)
        .bind(document.status.as_str())
        .bind(&document.file_url)
        .bind(&document.file_hash)
        .bind(document.expires_at)
        .bind(document.created_at)
        .bind(document.updated_at)
        .bind(metadata)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, update), fields(document_id = %update.document_id))]
    async fn apply_review(&self, update: &ReviewUpdate) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE documents
            SET status = $2, verification_notes = $3, verified_by = $4, updated_at = NOW()
            WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(update.document_id)
        .bind(update.status.as_str())
        .bind(&update.notes)
        .bind(update.reviewer_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

/// PostgreSQL implementation of DocumentTypeRepository
#[derive(Clone)]
pub struct PgDocumentTypeRepository {
    pool: PgPool,
}

impl PgDocumentTypeRepository {
    /// Create a new PgDocumentTypeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentTypeRepository for PgDocumentTypeRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<DocumentType>> {
        let rows = sqlx::query_as::<_, DocumentTypeModel>(
            r"
            SELECT id, name, description, required
            FROM document_types
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(DocumentType::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<DocumentType>> {
        let result = sqlx::query_as::<_, DocumentTypeModel>(
            r"
            SELECT id, name, description, required
            FROM document_types
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DocumentType::from))
    }
}
