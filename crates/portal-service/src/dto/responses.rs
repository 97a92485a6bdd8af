//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use portal_core::entities::DocumentMetadata;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: UserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// User response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

// ============================================================================
// Messaging Responses
// ============================================================================

/// One message row
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<Uuid>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    pub is_sms: bool,
}

/// Derived conversation summary for the inbox listing
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub counterpart_id: Uuid,
    pub counterpart_name: String,
    pub counterpart_role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<MessageResponse>,
    pub unread_count: usize,
}

/// Full two-party thread, returned when a conversation is opened.
///
/// `counterpart_id` echoes the request so a client can discard responses
/// that no longer match its selected conversation.
#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    pub counterpart_id: Uuid,
    pub messages: Vec<MessageResponse>,
    /// Number of rows flipped to read by opening the thread
    pub marked_read: u64,
}

/// Outcome of the SMS stub endpoint
#[derive(Debug, Serialize)]
pub struct SmsSendResponse {
    pub success: bool,
    pub sms_id: Uuid,
}

// ============================================================================
// Document Responses
// ============================================================================

/// Document type listing entry
#[derive(Debug, Clone, Serialize)]
pub struct DocumentTypeResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Document with read-time derived flags
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_type_id: i32,
    pub status: String,
    pub file_url: String,
    pub file_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Derived: expiry set and within the next 30 days (or past)
    pub expiring_soon: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

/// Required-document compliance summary for one user
#[derive(Debug, Serialize)]
pub struct ComplianceResponse {
    /// Required types with a currently valid approved document
    pub satisfied: Vec<i32>,
    /// Required types still missing a valid approved document
    pub missing: Vec<i32>,
    pub compliant: bool,
}

// ============================================================================
// Announcement Responses
// ============================================================================

/// Announcement paired with the requesting recipient's state
#[derive(Debug, Serialize)]
pub struct AnnouncementResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub priority: String,
    pub send_as_sms: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Absent in the staff listing, present in recipient listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_delivered: Option<bool>,
}

// ============================================================================
// Support Ticket Responses
// ============================================================================

/// Support ticket
#[derive(Debug, Clone, Serialize)]
pub struct TicketResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subject: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// In-app notification
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<Uuid>,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Unread notification badge count
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}

// ============================================================================
// Audit Responses
// ============================================================================

/// Audit log entry
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub action_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}
