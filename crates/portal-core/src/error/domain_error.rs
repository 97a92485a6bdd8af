//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::DocumentStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("No user registered with email: {0}")]
    RecipientNotFound(String),

    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    #[error("Document not found: {0}")]
    DocumentNotFound(Uuid),

    #[error("Document type not found: {0}")]
    DocumentTypeNotFound(i32),

    #[error("Announcement not found: {0}")]
    AnnouncementNotFound(Uuid),

    #[error("Support ticket not found: {0}")]
    TicketNotFound(Uuid),

    #[error("Notification not found: {0}")]
    NotificationNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Message content cannot be empty")]
    EmptyMessage,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Staff role required")]
    StaffRequired,

    #[error("Admin role required")]
    AdminRequired,

    #[error("Only the sender may delete a message")]
    NotMessageSender,

    #[error("Cannot access another user's resource")]
    NotResourceOwner,

    // =========================================================================
    // Conflict / Business Rule Violations
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Document {id} is not pending (current status: {status})")]
    NotPending { id: Uuid, status: DocumentStatus },

    #[error("Ticket is closed and cannot be updated")]
    TicketClosed,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Object store error: {0}")]
    StorageError(String),

    #[error("SMS relay error: {0}")]
    SmsRelayError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::RecipientNotFound(_) => "RECIPIENT_NOT_FOUND",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::DocumentNotFound(_) => "UNKNOWN_DOCUMENT",
            Self::DocumentTypeNotFound(_) => "UNKNOWN_DOCUMENT_TYPE",
            Self::AnnouncementNotFound(_) => "UNKNOWN_ANNOUNCEMENT",
            Self::TicketNotFound(_) => "UNKNOWN_TICKET",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::StaffRequired => "STAFF_REQUIRED",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::NotMessageSender => "NOT_MESSAGE_SENDER",
            Self::NotResourceOwner => "NOT_RESOURCE_OWNER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::NotPending { .. } => "DOCUMENT_NOT_PENDING",
            Self::TicketClosed => "TICKET_CLOSED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::SmsRelayError(_) => "SMS_RELAY_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::RecipientNotFound(_)
                | Self::MessageNotFound(_)
                | Self::DocumentNotFound(_)
                | Self::DocumentTypeNotFound(_)
                | Self::AnnouncementNotFound(_)
                | Self::TicketNotFound(_)
                | Self::NotificationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::EmptyMessage
                | Self::WeakPassword(_)
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::StaffRequired
                | Self::AdminRequired
                | Self::NotMessageSender
                | Self::NotResourceOwner
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::NotPending { .. } | Self::TicketClosed
        )
    }
}
