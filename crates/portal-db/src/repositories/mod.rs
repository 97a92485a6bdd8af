//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in portal-core.
//! Each repository handles database operations for a specific domain entity.

mod announcement;
mod audit_log;
mod document;
mod error;
mod message;
mod notification;
mod support_ticket;
mod user;

pub use announcement::PgAnnouncementRepository;
pub use audit_log::PgAuditLogRepository;
pub use document::{PgDocumentRepository, PgDocumentTypeRepository};
pub use message::PgMessageRepository;
pub use notification::PgNotificationRepository;
pub use support_ticket::PgSupportTicketRepository;
pub use user::PgUserRepository;
