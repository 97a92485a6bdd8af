//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the infrastructure layer
//! provides the implementation against the relational store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::conversation::ThreadMessage;
use crate::entities::{
    Announcement, AnnouncementRecipient, AuditLog, Document, DocumentType, Message, Notification,
    SupportTicket, User,
};
use crate::error::DomainError;
use crate::value_objects::{DocumentStatus, TicketStatus};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by email (exact match against the trimmed input)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// All users except the given one (conversation picker, recipient lists)
    async fn list_except(&self, id: Uuid) -> RepoResult<Vec<User>>;

    /// All users (staff management views)
    async fn list_all(&self) -> RepoResult<Vec<User>>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update mutable profile fields (full name, phone, role)
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Hard delete an account (staff user management)
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Stamp `last_login` with the current time
    async fn record_login(&self, id: Uuid) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>>;

    /// All rows where the user is sender or receiver, joined with both
    /// participants' display names. Order is unspecified; the aggregator
    /// sorts.
    async fn find_for_user(&self, user_id: Uuid) -> RepoResult<Vec<ThreadMessage>>;

    /// The two-party thread between `user_id` and `counterpart_id`,
    /// ascending by `(created_at, id)`
    async fn find_thread(&self, user_id: Uuid, counterpart_id: Uuid)
        -> RepoResult<Vec<ThreadMessage>>;

    /// Create a new message row
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Mark every unread row from `sender_id` to `receiver_id` as read.
    /// Returns the number of rows updated; zero on an already-read thread.
    async fn mark_thread_read(&self, receiver_id: Uuid, sender_id: Uuid) -> RepoResult<u64>;

    /// Hard delete a message row
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Document Repositories
// ============================================================================

/// Atomic review transition applied with a status guard
#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    pub document_id: Uuid,
    pub reviewer_id: Uuid,
    pub status: DocumentStatus,
    pub notes: Option<String>,
}

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Find document by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Document>>;

    /// A user's documents, newest first
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Document>>;

    /// All documents, newest first (staff review queue)
    async fn find_all(&self) -> RepoResult<Vec<Document>>;

    /// Create a new document row
    async fn create(&self, document: &Document) -> RepoResult<()>;

    /// Apply a review transition, guarded by `status = 'pending'` at the
    /// store. Returns the number of rows updated: zero means the document
    /// was not pending (or does not exist) and the caller must report
    /// `NotPending`.
    async fn apply_review(&self, update: &ReviewUpdate) -> RepoResult<u64>;
}

#[async_trait]
pub trait DocumentTypeRepository: Send + Sync {
    /// All document types, ordered by name
    async fn list(&self) -> RepoResult<Vec<DocumentType>>;

    /// Find document type by ID
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<DocumentType>>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Create a notification row
    async fn create(&self, notification: &Notification) -> RepoResult<()>;

    /// A user's notifications, newest first
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Notification>>;

    /// Count of unread notifications
    async fn unread_count(&self, user_id: Uuid) -> RepoResult<i64>;

    /// Mark one notification read; zero rows if not owned or already read
    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> RepoResult<u64>;

    /// Mark all of a user's notifications read
    async fn mark_all_read(&self, user_id: Uuid) -> RepoResult<u64>;
}

// ============================================================================
// Announcement Repository
// ============================================================================

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    /// Create an announcement row
    async fn create(&self, announcement: &Announcement) -> RepoResult<()>;

    /// Create per-recipient tracking rows
    async fn add_recipients(&self, recipients: &[AnnouncementRecipient]) -> RepoResult<()>;

    /// All announcements, newest first (staff view)
    async fn list_all(&self) -> RepoResult<Vec<Announcement>>;

    /// Unexpired announcements addressed to a user, paired with the user's
    /// viewed/delivery state, newest first
    async fn list_for_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> RepoResult<Vec<(Announcement, AnnouncementRecipient)>>;

    /// Mark one announcement viewed by one recipient
    async fn mark_viewed(&self, announcement_id: Uuid, user_id: Uuid) -> RepoResult<u64>;

    /// Record a successful SMS fan-out for one recipient
    async fn set_sms_delivered(&self, announcement_id: Uuid, user_id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Support Ticket Repository
// ============================================================================

#[async_trait]
pub trait SupportTicketRepository: Send + Sync {
    /// Find ticket by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SupportTicket>>;

    /// A user's tickets, newest first
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<SupportTicket>>;

    /// All tickets, newest first (staff queue)
    async fn list_all(&self) -> RepoResult<Vec<SupportTicket>>;

    /// Create a ticket row
    async fn create(&self, ticket: &SupportTicket) -> RepoResult<()>;

    /// Update status/assignee, stamping `updated_at`
    async fn update_status(
        &self,
        id: Uuid,
        status: TicketStatus,
        assigned_to: Option<Uuid>,
    ) -> RepoResult<()>;
}

// ============================================================================
// Audit Log Repository (read-only)
// ============================================================================

/// Server-side filters for the admin audit listing
#[derive(Debug, Clone, Default)]
pub struct AuditLogFilter {
    pub action_type: Option<String>,
    pub table_name: Option<String>,
    pub limit: Option<i64>,
}

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Filtered listing, newest first. Rows are written by store triggers;
    /// this system never inserts.
    async fn list(&self, filter: &AuditLogFilter) -> RepoResult<Vec<AuditLog>>;
}
