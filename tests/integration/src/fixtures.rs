//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            full_name: format!("Test User {suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            phone: None,
        }
    }

    pub fn unique_with_phone() -> Self {
        let suffix = unique_suffix();
        Self {
            phone: Some(format!("+55119{suffix:08}")),
            ..Self::unique()
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub phone: Option<String>,
    pub created_at: String,
}

/// Send message request
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub receiver_id: Option<Uuid>,
    pub receiver_email: Option<String>,
    pub content: String,
    pub channel: String,
}

impl SendMessageRequest {
    pub fn to_user(receiver_id: Uuid, content: &str) -> Self {
        Self {
            receiver_id: Some(receiver_id),
            receiver_email: None,
            content: content.to_string(),
            channel: "message".to_string(),
        }
    }

    pub fn to_email(receiver_email: &str, content: &str) -> Self {
        Self {
            receiver_id: None,
            receiver_email: Some(receiver_email.to_string()),
            content: content.to_string(),
            channel: "message".to_string(),
        }
    }

    pub fn sms(receiver_id: Uuid, content: &str) -> Self {
        Self {
            channel: "sms".to_string(),
            ..Self::to_user(receiver_id, content)
        }
    }
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Option<Uuid>,
    pub content: String,
    pub created_at: String,
    pub read: bool,
    pub is_sms: bool,
}

/// Conversation summary response
#[derive(Debug, Deserialize)]
pub struct ConversationResponse {
    pub counterpart_id: Uuid,
    pub counterpart_name: String,
    pub counterpart_role: String,
    pub last_message: Option<MessageResponse>,
    pub unread_count: usize,
}

/// Full thread response
#[derive(Debug, Deserialize)]
pub struct ThreadResponse {
    pub counterpart_id: Uuid,
    pub messages: Vec<MessageResponse>,
    pub marked_read: u64,
}

/// Submit document request
#[derive(Debug, Serialize)]
pub struct SubmitDocumentRequest {
    pub document_type_id: i32,
    pub file_name: String,
    pub content: String,
    pub expires_at: Option<String>,
}

impl SubmitDocumentRequest {
    pub fn pdf(document_type_id: i32, base64_content: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            document_type_id,
            file_name: format!("document-{suffix}.pdf"),
            content: base64_content.to_string(),
            expires_at: None,
        }
    }
}

/// Review document request
#[derive(Debug, Serialize)]
pub struct ReviewDocumentRequest {
    pub decision: String,
    pub notes: Option<String>,
}

impl ReviewDocumentRequest {
    pub fn approve() -> Self {
        Self {
            decision: "approved".to_string(),
            notes: None,
        }
    }

    pub fn reject(notes: &str) -> Self {
        Self {
            decision: "rejected".to_string(),
            notes: Some(notes.to_string()),
        }
    }
}

/// Document response
#[derive(Debug, Deserialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_type_id: i32,
    pub status: String,
    pub file_url: String,
    pub file_hash: String,
    pub expires_at: Option<String>,
    pub expiring_soon: bool,
    pub verification_notes: Option<String>,
    pub verified_by: Option<Uuid>,
}

/// Document type response
#[derive(Debug, Deserialize)]
pub struct DocumentTypeResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Compliance response
#[derive(Debug, Deserialize)]
pub struct ComplianceResponse {
    pub satisfied: Vec<i32>,
    pub missing: Vec<i32>,
    pub compliant: bool,
}

/// Create ticket request
#[derive(Debug, Serialize)]
pub struct CreateTicketRequest {
    pub subject: String,
    pub description: String,
    pub category: String,
    pub priority: String,
}

impl CreateTicketRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            subject: format!("Test ticket {suffix}"),
            description: "Something is not working".to_string(),
            category: "technical".to_string(),
            priority: "medium".to_string(),
        }
    }
}

/// Update ticket request
#[derive(Debug, Serialize)]
pub struct UpdateTicketRequest {
    pub status: String,
    pub assigned_to: Option<Uuid>,
}

/// Ticket response
#[derive(Debug, Deserialize)]
pub struct TicketResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subject: String,
    pub status: String,
    pub assigned_to: Option<Uuid>,
}

/// Notification response
#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub sender_id: Option<Uuid>,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub read: bool,
}

/// Unread count response
#[derive(Debug, Deserialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}

/// SMS relay stub request
#[derive(Debug, Serialize)]
pub struct SmsStubRequest {
    pub phone: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// SMS relay stub response
#[derive(Debug, Deserialize)]
pub struct SmsSendResponse {
    pub success: bool,
    pub sms_id: Uuid,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<Value>,
}
