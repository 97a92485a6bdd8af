//! Document entity <-> model mappers

use portal_core::entities::{Document, DocumentMetadata, DocumentType};
use portal_core::DocumentStatus;

use crate::models::{DocumentModel, DocumentTypeModel};

impl From<DocumentModel> for Document {
    fn from(model: DocumentModel) -> Self {
        // Malformed metadata JSON is dropped rather than failing the row
        let metadata = model
            .metadata
            .and_then(|v| serde_json::from_value::<DocumentMetadata>(v).ok());

        Document {
            id: model.id,
            user_id: model.user_id,
            document_type_id: model.document_type_id,
            status: DocumentStatus::from_str_lossy(&model.status),
            file_url: model.file_url,
            file_hash: model.file_hash,
            expires_at: model.expires_at,
            verification_notes: model.verification_notes,
            verified_by: model.verified_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
            metadata,
        }
    }
}

impl From<DocumentTypeModel> for DocumentType {
    fn from(model: DocumentTypeModel) -> Self {
        DocumentType {
            id: model.id,
            name: model.name,
            description: model.description,
            required: model.required,
        }
    }
}
