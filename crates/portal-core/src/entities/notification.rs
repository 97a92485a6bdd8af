//! Notification entity - in-app side-channel rows
//!
//! Notifications are generated as a side effect of other actions (message,
//! ticket, announcement); they are never user-authored and delivery is
//! best-effort UX, not a guarantee.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::NotificationKind;

/// Notification entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub sender_id: Option<Uuid>,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        title: String,
        message: String,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id,
            user_id,
            sender_id: None,
            title,
            message,
            kind,
            read: false,
            metadata: None,
            created_at: Utc::now(),
        }
    }

    pub fn from_sender(mut self, sender_id: Uuid) -> Self {
        self.sender_id = Some(sender_id);
        self
    }
}
