//! Domain entities

pub mod announcement;
pub mod audit_log;
pub mod document;
pub mod message;
pub mod notification;
pub mod support_ticket;
pub mod user;

pub use announcement::{Announcement, AnnouncementRecipient};
pub use audit_log::AuditLog;
pub use document::{Document, DocumentMetadata, DocumentType};
pub use message::Message;
pub use notification::Notification;
pub use support_ticket::SupportTicket;
pub use user::User;
