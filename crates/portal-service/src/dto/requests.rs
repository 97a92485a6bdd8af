//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and, where input needs checking,
//! `Validate`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 120, message = "Full name must be 2-120 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    /// Phone number in international format; enables the SMS side channel
    pub phone: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user's profile
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 120, message = "Full name must be 2-120 characters"))]
    pub full_name: Option<String>,

    /// Phone number or null to remove
    pub phone: Option<String>,
}

/// Staff edit of another user's account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminUpdateUserRequest {
    #[validate(length(min = 2, max = 120, message = "Full name must be 2-120 characters"))]
    pub full_name: Option<String>,

    /// Phone number or null to remove
    pub phone: Option<String>,

    /// student | officer | admin; changing this requires an admin caller
    pub role: Option<String>,
}

// ============================================================================
// Messaging Requests
// ============================================================================

/// Delivery channel chosen by the sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchChannel {
    #[default]
    Message,
    Sms,
}

/// Send a message to one recipient, addressed by id or by email
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub receiver_id: Option<Uuid>,

    #[validate(email(message = "Invalid email format"))]
    pub receiver_email: Option<String>,

    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub content: String,

    #[serde(default)]
    pub channel: DispatchChannel,
}

/// Payload accepted by the SMS relay stub endpoint.
///
/// Fields are optional at the serde level so a missing field yields a 400
/// with a relay-style error body instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SmsStubRequest {
    pub phone: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// ============================================================================
// Document Requests
// ============================================================================

/// Submit a document for review; file content travels base64-encoded
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitDocumentRequest {
    pub document_type_id: i32,

    #[validate(length(min = 1, max = 255, message = "File name must be 1-255 characters"))]
    pub file_name: String,

    /// Base64-encoded file bytes
    pub content: String,

    pub expires_at: Option<DateTime<Utc>>,
}

/// Review decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

/// Approve or reject a pending document
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewDocumentRequest {
    pub decision: ReviewDecision,

    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

// ============================================================================
// Announcement Requests
// ============================================================================

/// Create an announcement broadcast to every other user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnnouncementRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,

    /// low | normal | medium | high (defaults to normal)
    pub priority: Option<String>,

    #[serde(default)]
    pub send_as_sms: bool,

    pub expires_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Support Ticket Requests
// ============================================================================

/// Open a support ticket
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTicketRequest {
    #[validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: String,

    #[validate(length(min = 1, max = 20, message = "Priority must be 1-20 characters"))]
    pub priority: String,
}

/// Staff update of a ticket's status and/or assignee
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTicketRequest {
    /// open | in_progress | resolved | closed
    pub status: String,

    pub assigned_to: Option<Uuid>,
}

// ============================================================================
// Audit Requests
// ============================================================================

/// Query parameters for the admin audit listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditQuery {
    pub action_type: Option<String>,
    pub table_name: Option<String>,
    /// Free-text filter over action/table/record id
    pub search: Option<String>,
    pub limit: Option<i64>,
}
