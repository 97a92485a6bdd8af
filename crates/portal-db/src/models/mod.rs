//! Database models - SQLx-compatible structs for PostgreSQL tables

mod announcement;
mod audit_log;
mod document;
mod message;
mod notification;
mod support_ticket;
mod user;

pub use announcement::{AnnouncementModel, AnnouncementRecipientModel, AnnouncementWithStateModel};
pub use audit_log::AuditLogModel;
pub use document::{DocumentModel, DocumentTypeModel};
pub use message::{MessageModel, ThreadMessageModel};
pub use notification::NotificationModel;
pub use support_ticket::SupportTicketModel;
pub use user::UserModel;
