//! Gateway traits for external collaborators: the object store holding
//! uploaded documents and the SMS relay.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;

/// Handle to an object the store accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Store-relative path (`{user_id}/{millis}_{file_name}`)
    pub path: String,
}

/// Content-addressable-by-path file storage for uploaded documents
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `path`, creating parent namespaces as needed
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<StoredObject, DomainError>;

    /// Retrievable URL for a stored path
    fn public_url(&self, path: &str) -> String;

    /// Fetch the raw bytes back
    async fn download(&self, path: &str) -> Result<Vec<u8>, DomainError>;
}

/// Outcome reported by the SMS relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsDelivery {
    pub success: bool,
    pub sms_id: Option<Uuid>,
}

/// External SMS relay (`{phone, message, type} -> {success, sms_id}`).
///
/// Callers treat delivery as best-effort: a relay failure is logged and
/// swallowed, never surfaced to the sender, because the in-app message and
/// notification rows are already durable by the time the relay is invoked.
#[async_trait]
pub trait SmsRelay: Send + Sync {
    async fn send(
        &self,
        phone: &str,
        message: &str,
        kind: &str,
    ) -> Result<SmsDelivery, DomainError>;
}
