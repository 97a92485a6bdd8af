//! Document database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the documents table
#[derive(Debug, Clone, FromRow)]
pub struct DocumentModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_type_id: i32,
    pub status: String,
    pub file_url: String,
    pub file_hash: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub verification_notes: Option<String>,
    pub verified_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub metadata: Option<serde_json::Value>,
}

/// Database model for the document_types table
#[derive(Debug, Clone, FromRow)]
pub struct DocumentTypeModel {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub required: bool,
}
