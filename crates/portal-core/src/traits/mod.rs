//! Ports - traits the infrastructure layer implements

pub mod gateways;
pub mod repositories;

pub use gateways::{ObjectStore, SmsDelivery, SmsRelay, StoredObject};
pub use repositories::{
    AnnouncementRepository, AuditLogFilter, AuditLogRepository, DocumentRepository,
    DocumentTypeRepository, MessageRepository, NotificationRepository, RepoResult, ReviewUpdate,
    SupportTicketRepository, UserRepository,
};
