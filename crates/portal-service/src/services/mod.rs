//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod announcement;
pub mod audit;
pub mod auth;
pub mod context;
pub mod conversation;
pub mod document;
pub mod error;
pub mod message;
pub mod notification;
pub mod support;
pub mod user;

#[cfg(test)]
pub mod testing;

// Re-export all services for convenience
pub use announcement::AnnouncementService;
pub use audit::AuditService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use conversation::ConversationService;
pub use document::DocumentService;
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use notification::NotificationService;
pub use support::SupportService;
pub use user::UserService;
