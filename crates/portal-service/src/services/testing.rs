//! In-memory fakes for service unit tests
//!
//! Every port gets a Mutex-backed implementation so services can be
//! exercised end-to-end without a live store or relay.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use portal_common::auth::JwtService;
use portal_core::conversation::ThreadMessage;
use portal_core::entities::{
    Announcement, AnnouncementRecipient, AuditLog, Document, DocumentType, Message, Notification,
    SupportTicket, User,
};
use portal_core::error::DomainError;
use portal_core::traits::{
    AnnouncementRepository, AuditLogFilter, AuditLogRepository, DocumentRepository,
    DocumentTypeRepository, MessageRepository, NotificationRepository, ObjectStore, RepoResult,
    ReviewUpdate, SmsDelivery, SmsRelay, StoredObject, SupportTicketRepository, UserRepository,
};
use portal_core::value_objects::{DocumentStatus, TicketStatus};

use super::context::ServiceContext;

#[derive(Default)]
pub struct InMemoryUsers {
    inner: Mutex<Vec<(User, String)>>,
}

impl InMemoryUsers {
    pub fn seed(&self, user: User) {
        self.inner.lock().unwrap().push((user, String::new()));
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email = email.trim();
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn list_except(&self, id: Uuid) -> RepoResult<Vec<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, _)| u.id != id)
            .map(|(u, _)| u.clone())
            .collect())
    }

    async fn list_all(&self) -> RepoResult<Vec<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .map(|(u, _)| u.clone())
            .collect())
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut users = self.inner.lock().unwrap();
        if users.iter().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        users.push((user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut users = self.inner.lock().unwrap();
        let entry = users
            .iter_mut()
            .find(|(u, _)| u.id == user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        entry.0 = user.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut users = self.inner.lock().unwrap();
        let before = users.len();
        users.retain(|(u, _)| u.id != id);
        if users.len() == before {
            return Err(DomainError::UserNotFound(id));
        }
        Ok(())
    }

    async fn record_login(&self, id: Uuid) -> RepoResult<()> {
        let mut users = self.inner.lock().unwrap();
        let entry = users
            .iter_mut()
            .find(|(u, _)| u.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        entry.0.last_login = Some(Utc::now());
        Ok(())
    }

    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, h)| h.clone()))
    }
}

#[derive(Default)]
pub struct InMemoryMessages {
    inner: Mutex<Vec<Message>>,
}

impl InMemoryMessages {
    pub fn all(&self) -> Vec<Message> {
        self.inner.lock().unwrap().clone()
    }

    fn bare(message: Message) -> ThreadMessage {
        ThreadMessage {
            message,
            sender_name: None,
            sender_role: None,
            receiver_name: None,
            receiver_role: None,
        }
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessages {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn find_for_user(&self, user_id: Uuid) -> RepoResult<Vec<ThreadMessage>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.sender_id == user_id || m.receiver_id == Some(user_id))
            .cloned()
            .map(Self::bare)
            .collect())
    }

    async fn find_thread(
        &self,
        user_id: Uuid,
        counterpart_id: Uuid,
    ) -> RepoResult<Vec<ThreadMessage>> {
        let mut rows: Vec<Message> = self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|m| {
                (m.sender_id == user_id && m.receiver_id == Some(counterpart_id))
                    || (m.sender_id == counterpart_id && m.receiver_id == Some(user_id))
            })
            .cloned()
            .collect();
        rows.sort_by_key(|m| (m.created_at, m.id));
        Ok(rows.into_iter().map(Self::bare).collect())
    }

    async fn create(&self, message: &Message) -> RepoResult<()> {
        self.inner.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn mark_thread_read(&self, receiver_id: Uuid, sender_id: Uuid) -> RepoResult<u64> {
        let mut rows = self.inner.lock().unwrap();
        let mut updated = 0;
        for m in rows.iter_mut() {
            if m.receiver_id == Some(receiver_id) && m.sender_id == sender_id && !m.read {
                m.read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut rows = self.inner.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        if rows.len() == before {
            return Err(DomainError::MessageNotFound(id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryDocuments {
    inner: Mutex<Vec<Document>>,
}

impl InMemoryDocuments {
    pub fn seed(&self, document: Document) {
        self.inner.lock().unwrap().push(document);
    }

    pub fn get(&self, id: Uuid) -> Option<Document> {
        self.inner.lock().unwrap().iter().find(|d| d.id == id).cloned()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocuments {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Document>> {
        Ok(self.get(id))
    }

    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Document>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> RepoResult<Vec<Document>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    async fn create(&self, document: &Document) -> RepoResult<()> {
        self.inner.lock().unwrap().push(document.clone());
        Ok(())
    }

    async fn apply_review(&self, update: &ReviewUpdate) -> RepoResult<u64> {
        let mut docs = self.inner.lock().unwrap();
        let Some(doc) = docs
            .iter_mut()
            .find(|d| d.id == update.document_id && d.status == DocumentStatus::Pending)
        else {
            return Ok(0);
        };
        doc.status = update.status;
        doc.verified_by = Some(update.reviewer_id);
        doc.verification_notes = update.notes.clone();
        doc.updated_at = Utc::now();
        Ok(1)
    }
}

pub struct FixedDocumentTypes {
    types: Vec<DocumentType>,
}

impl FixedDocumentTypes {
    pub fn new(types: Vec<DocumentType>) -> Self {
        Self { types }
    }
}

#[async_trait]
impl DocumentTypeRepository for FixedDocumentTypes {
    async fn list(&self) -> RepoResult<Vec<DocumentType>> {
        Ok(self.types.clone())
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<DocumentType>> {
        Ok(self.types.iter().find(|t| t.id == id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryNotifications {
    inner: Mutex<Vec<Notification>>,
}

impl InMemoryNotifications {
    pub fn all(&self) -> Vec<Notification> {
        self.inner.lock().unwrap().clone()
    }

    pub fn for_user(&self, user_id: Uuid) -> Vec<Notification> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotifications {
    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        self.inner.lock().unwrap().push(notification.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Notification>> {
        Ok(self.for_user(user_id))
    }

    async fn unread_count(&self, user_id: Uuid) -> RepoResult<i64> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count() as i64)
    }

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> RepoResult<u64> {
        let mut rows = self.inner.lock().unwrap();
        let Some(n) = rows
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id && !n.read)
        else {
            return Ok(0);
        };
        n.read = true;
        Ok(1)
    }

    async fn mark_all_read(&self, user_id: Uuid) -> RepoResult<u64> {
        let mut rows = self.inner.lock().unwrap();
        let mut updated = 0;
        for n in rows.iter_mut() {
            if n.user_id == user_id && !n.read {
                n.read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }
}

#[derive(Default)]
pub struct InMemoryAnnouncements {
    announcements: Mutex<Vec<Announcement>>,
    recipients: Mutex<Vec<AnnouncementRecipient>>,
}

impl InMemoryAnnouncements {
    pub fn recipients(&self) -> Vec<AnnouncementRecipient> {
        self.recipients.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnnouncementRepository for InMemoryAnnouncements {
    async fn create(&self, announcement: &Announcement) -> RepoResult<()> {
        self.announcements.lock().unwrap().push(announcement.clone());
        Ok(())
    }

    async fn add_recipients(&self, recipients: &[AnnouncementRecipient]) -> RepoResult<()> {
        self.recipients
            .lock()
            .unwrap()
            .extend(recipients.iter().cloned());
        Ok(())
    }

    async fn list_all(&self) -> RepoResult<Vec<Announcement>> {
        Ok(self.announcements.lock().unwrap().clone())
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> RepoResult<Vec<(Announcement, AnnouncementRecipient)>> {
        let announcements = self.announcements.lock().unwrap();
        let recipients = self.recipients.lock().unwrap();
        Ok(recipients
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter_map(|r| {
                announcements
                    .iter()
                    .find(|a| a.id == r.announcement_id && !a.is_expired_at(now))
                    .map(|a| (a.clone(), r.clone()))
            })
            .collect())
    }

    async fn mark_viewed(&self, announcement_id: Uuid, user_id: Uuid) -> RepoResult<u64> {
        let mut recipients = self.recipients.lock().unwrap();
        let Some(r) = recipients
            .iter_mut()
            .find(|r| r.announcement_id == announcement_id && r.user_id == user_id && !r.viewed)
        else {
            return Ok(0);
        };
        r.viewed = true;
        Ok(1)
    }

    async fn set_sms_delivered(&self, announcement_id: Uuid, user_id: Uuid) -> RepoResult<()> {
        let mut recipients = self.recipients.lock().unwrap();
        if let Some(r) = recipients
            .iter_mut()
            .find(|r| r.announcement_id == announcement_id && r.user_id == user_id)
        {
            r.sms_delivered = true;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTickets {
    inner: Mutex<Vec<SupportTicket>>,
}

impl InMemoryTickets {
    pub fn get(&self, id: Uuid) -> Option<SupportTicket> {
        self.inner.lock().unwrap().iter().find(|t| t.id == id).cloned()
    }
}

#[async_trait]
impl SupportTicketRepository for InMemoryTickets {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SupportTicket>> {
        Ok(self.get(id))
    }

    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<SupportTicket>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> RepoResult<Vec<SupportTicket>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    async fn create(&self, ticket: &SupportTicket) -> RepoResult<()> {
        self.inner.lock().unwrap().push(ticket.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: TicketStatus,
        assigned_to: Option<Uuid>,
    ) -> RepoResult<()> {
        let mut tickets = self.inner.lock().unwrap();
        let ticket = tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(DomainError::TicketNotFound(id))?;
        ticket.status = status;
        ticket.assigned_to = assigned_to;
        ticket.updated_at = Utc::now();
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAuditLogs {
    inner: Mutex<Vec<AuditLog>>,
}

impl InMemoryAuditLogs {
    pub fn seed(&self, log: AuditLog) {
        self.inner.lock().unwrap().push(log);
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLogs {
    async fn list(&self, filter: &AuditLogFilter) -> RepoResult<Vec<AuditLog>> {
        let limit = filter.limit.unwrap_or(100).max(0) as usize;
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|l| {
                filter
                    .action_type
                    .as_deref()
                    .is_none_or(|a| l.action_type == a)
            })
            .filter(|l| {
                filter
                    .table_name
                    .as_deref()
                    .is_none_or(|t| l.table_name.as_deref() == Some(t))
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryObjectStore {
    pub fn paths(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<StoredObject, DomainError> {
        self.objects
            .lock()
            .unwrap()
            .insert(path.to_string(), bytes.to_vec());
        Ok(StoredObject {
            path: path.to_string(),
        })
    }

    fn public_url(&self, path: &str) -> String {
        format!("memory://{path}")
    }

    async fn download(&self, path: &str) -> Result<Vec<u8>, DomainError> {
        self.objects
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| DomainError::StorageError(format!("no object at {path}")))
    }
}

/// Relay that records every call and can be flipped into failure mode
#[derive(Default)]
pub struct RecordingSmsRelay {
    pub calls: Mutex<Vec<(String, String, String)>>,
    pub fail: bool,
}

impl RecordingSmsRelay {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SmsRelay for RecordingSmsRelay {
    async fn send(
        &self,
        phone: &str,
        message: &str,
        kind: &str,
    ) -> Result<SmsDelivery, DomainError> {
        self.calls.lock().unwrap().push((
            phone.to_string(),
            message.to_string(),
            kind.to_string(),
        ));
        if self.fail {
            return Err(DomainError::SmsRelayError("relay down".to_string()));
        }
        Ok(SmsDelivery {
            success: true,
            sms_id: Some(Uuid::new_v4()),
        })
    }
}

/// Everything a service test needs: the fakes (for seeding and assertions)
/// plus a context wired over them
pub struct TestHarness {
    pub users: Arc<InMemoryUsers>,
    pub messages: Arc<InMemoryMessages>,
    pub documents: Arc<InMemoryDocuments>,
    pub notifications: Arc<InMemoryNotifications>,
    pub announcements: Arc<InMemoryAnnouncements>,
    pub tickets: Arc<InMemoryTickets>,
    pub audit_logs: Arc<InMemoryAuditLogs>,
    pub store: Arc<MemoryObjectStore>,
    pub sms: Arc<RecordingSmsRelay>,
    pub ctx: ServiceContext,
}

pub fn harness() -> TestHarness {
    harness_with_relay(Arc::new(RecordingSmsRelay::default()))
}

pub fn harness_with_relay(sms: Arc<RecordingSmsRelay>) -> TestHarness {
    let users = Arc::new(InMemoryUsers::default());
    let messages = Arc::new(InMemoryMessages::default());
    let documents = Arc::new(InMemoryDocuments::default());
    let notifications = Arc::new(InMemoryNotifications::default());
    let announcements = Arc::new(InMemoryAnnouncements::default());
    let tickets = Arc::new(InMemoryTickets::default());
    let audit_logs = Arc::new(InMemoryAuditLogs::default());
    let store = Arc::new(MemoryObjectStore::default());

    let document_types = Arc::new(FixedDocumentTypes::new(vec![
        DocumentType {
            id: 1,
            name: "Passaporte".to_string(),
            description: "Passaporte válido".to_string(),
            required: true,
        },
        DocumentType {
            id: 2,
            name: "Comprovante de Matrícula".to_string(),
            description: "Matrícula na instituição".to_string(),
            required: true,
        },
    ]));

    let ctx = ServiceContext::builder()
        .user_repo(users.clone())
        .message_repo(messages.clone())
        .document_repo(documents.clone())
        .document_type_repo(document_types)
        .notification_repo(notifications.clone())
        .announcement_repo(announcements.clone())
        .ticket_repo(tickets.clone())
        .audit_repo(audit_logs.clone())
        .object_store(store.clone())
        .sms_relay(sms.clone())
        .jwt_service(Arc::new(JwtService::new("test-secret", 900, 604_800)))
        .build()
        .unwrap();

    TestHarness {
        users,
        messages,
        documents,
        notifications,
        announcements,
        tickets,
        audit_logs,
        store,
        sms,
        ctx,
    }
}
