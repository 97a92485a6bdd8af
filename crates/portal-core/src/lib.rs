//! # portal-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! conversation aggregation logic. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod conversation;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use conversation::{group_conversations, Conversation, ThreadMessage};
pub use entities::{
    Announcement, AnnouncementRecipient, AuditLog, Document, DocumentMetadata, DocumentType,
    Message, Notification, SupportTicket, User,
};
pub use error::DomainError;
pub use traits::{
    AnnouncementRepository, AuditLogFilter, AuditLogRepository, DocumentRepository,
    DocumentTypeRepository, MessageRepository, NotificationRepository, ObjectStore, RepoResult,
    ReviewUpdate, SmsDelivery, SmsRelay, StoredObject, SupportTicketRepository, UserRepository,
};
pub use value_objects::{
    AnnouncementPriority, DocumentStatus, NotificationKind, Role, SmsStatus, TicketStatus,
    SYSTEM_SENDER_ID,
};
