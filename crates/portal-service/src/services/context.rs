//! Service context - dependency container for services
//!
//! Holds the repositories, gateways, and auth services the portal services
//! need. Services borrow the context rather than owning dependencies, so a
//! single context built at startup is shared by every request.

use std::sync::Arc;

use portal_common::auth::JwtService;
use portal_core::traits::{
    AnnouncementRepository, AuditLogRepository, DocumentRepository, DocumentTypeRepository,
    MessageRepository, NotificationRepository, ObjectStore, SmsRelay, SupportTicketRepository,
    UserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Default upload ceiling when the builder is not told otherwise (10 MiB)
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Relational repositories
/// - The document object store
/// - The SMS relay gateway
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    message_repo: Arc<dyn MessageRepository>,
    document_repo: Arc<dyn DocumentRepository>,
    document_type_repo: Arc<dyn DocumentTypeRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    announcement_repo: Arc<dyn AnnouncementRepository>,
    ticket_repo: Arc<dyn SupportTicketRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,

    // Gateways
    object_store: Arc<dyn ObjectStore>,
    sms_relay: Arc<dyn SmsRelay>,

    // Services
    jwt_service: Arc<JwtService>,

    // Upload policy
    max_upload_bytes: u64,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the document repository
    pub fn document_repo(&self) -> &dyn DocumentRepository {
        self.document_repo.as_ref()
    }

    /// Get the document type repository
    pub fn document_type_repo(&self) -> &dyn DocumentTypeRepository {
        self.document_type_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    /// Get the announcement repository
    pub fn announcement_repo(&self) -> &dyn AnnouncementRepository {
        self.announcement_repo.as_ref()
    }

    /// Get the support ticket repository
    pub fn ticket_repo(&self) -> &dyn SupportTicketRepository {
        self.ticket_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }

    // === Gateways ===

    /// Get the document object store
    pub fn object_store(&self) -> &dyn ObjectStore {
        self.object_store.as_ref()
    }

    /// Get the SMS relay
    pub fn sms_relay(&self) -> &dyn SmsRelay {
        self.sms_relay.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Maximum accepted upload size in bytes
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("gateways", &"...")
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    document_repo: Option<Arc<dyn DocumentRepository>>,
    document_type_repo: Option<Arc<dyn DocumentTypeRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    announcement_repo: Option<Arc<dyn AnnouncementRepository>>,
    ticket_repo: Option<Arc<dyn SupportTicketRepository>>,
    audit_repo: Option<Arc<dyn AuditLogRepository>>,
    object_store: Option<Arc<dyn ObjectStore>>,
    sms_relay: Option<Arc<dyn SmsRelay>>,
    jwt_service: Option<Arc<JwtService>>,
    max_upload_bytes: Option<u64>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn document_repo(mut self, repo: Arc<dyn DocumentRepository>) -> Self {
        self.document_repo = Some(repo);
        self
    }

    pub fn document_type_repo(mut self, repo: Arc<dyn DocumentTypeRepository>) -> Self {
        self.document_type_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn announcement_repo(mut self, repo: Arc<dyn AnnouncementRepository>) -> Self {
        self.announcement_repo = Some(repo);
        self
    }

    pub fn ticket_repo(mut self, repo: Arc<dyn SupportTicketRepository>) -> Self {
        self.ticket_repo = Some(repo);
        self
    }

    pub fn audit_repo(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_repo = Some(repo);
        self
    }

    pub fn object_store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.object_store = Some(store);
        self
    }

    pub fn sms_relay(mut self, relay: Arc<dyn SmsRelay>) -> Self {
        self.sms_relay = Some(relay);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn max_upload_bytes(mut self, bytes: u64) -> Self {
        self.max_upload_bytes = Some(bytes);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            message_repo: self
                .message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            document_repo: self
                .document_repo
                .ok_or_else(|| ServiceError::validation("document_repo is required"))?,
            document_type_repo: self
                .document_type_repo
                .ok_or_else(|| ServiceError::validation("document_type_repo is required"))?,
            notification_repo: self
                .notification_repo
                .ok_or_else(|| ServiceError::validation("notification_repo is required"))?,
            announcement_repo: self
                .announcement_repo
                .ok_or_else(|| ServiceError::validation("announcement_repo is required"))?,
            ticket_repo: self
                .ticket_repo
                .ok_or_else(|| ServiceError::validation("ticket_repo is required"))?,
            audit_repo: self
                .audit_repo
                .ok_or_else(|| ServiceError::validation("audit_repo is required"))?,
            object_store: self
                .object_store
                .ok_or_else(|| ServiceError::validation("object_store is required"))?,
            sms_relay: self
                .sms_relay
                .ok_or_else(|| ServiceError::validation("sms_relay is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            max_upload_bytes: self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        })
    }
}
