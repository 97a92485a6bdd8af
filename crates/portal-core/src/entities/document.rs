//! Document entities - uploaded files and their review lifecycle

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::DocumentStatus;

/// Window before expiry in which a document is flagged as expiring soon
const EXPIRY_WARNING_DAYS: i64 = 30;

/// A kind of document the embassy may require (passport, enrollment proof, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentType {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Upload metadata captured at submission time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileSize")]
    pub file_size: u64,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

/// Document entity
///
/// Created by a student upload in `pending` state; only staff mutate the
/// status, and `verified_by`/`verification_notes` are set together with the
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_type_id: i32,
    pub status: DocumentStatus,
    pub file_url: String,
    pub file_hash: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub verification_notes: Option<String>,
    pub verified_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub metadata: Option<DocumentMetadata>,
}

impl Document {
    /// Create a freshly submitted document in `pending` state
    pub fn new_submission(
        id: Uuid,
        user_id: Uuid,
        document_type_id: i32,
        file_url: String,
        file_hash: String,
        metadata: DocumentMetadata,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            document_type_id,
            status: DocumentStatus::Pending,
            file_url,
            file_hash,
            expires_at: None,
            verification_notes: None,
            verified_by: None,
            created_at: now,
            updated_at: now,
            metadata: Some(metadata),
        }
    }

    /// Expired documents no longer satisfy requirements, even if approved
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| expiry <= now)
    }

    /// Advisory flag: expiry is set and falls within the next 30 days
    pub fn is_expiring_soon_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at
            .is_some_and(|expiry| expiry <= now + Duration::days(EXPIRY_WARNING_DAYS))
    }

    /// Whether this document counts towards a required-document check at `now`
    pub fn satisfies_requirement_at(&self, now: DateTime<Utc>) -> bool {
        self.status == DocumentStatus::Approved && !self.is_expired_at(now)
    }
}
