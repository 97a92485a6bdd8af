//! # portal-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AnnouncementService, AuditService, AuthService, ConversationService, DocumentService,
    MessageService, NotificationService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SupportService, UserService,
};
