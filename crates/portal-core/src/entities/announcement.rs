//! Announcement entities - staff broadcasts and per-recipient state

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::AnnouncementPriority;

/// Announcement entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub priority: AnnouncementPriority,
    pub send_as_sms: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    pub fn new(id: Uuid, author_id: Uuid, title: String, content: String) -> Self {
        Self {
            id,
            author_id,
            title,
            content,
            priority: AnnouncementPriority::Normal,
            send_as_sms: false,
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    /// Expired announcements are hidden from recipient listings
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| expiry <= now)
    }
}

/// Read/delivery state of one announcement for one recipient,
/// tracked independently of the announcement body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementRecipient {
    pub announcement_id: Uuid,
    pub user_id: Uuid,
    pub viewed: bool,
    pub sms_delivered: bool,
}

impl AnnouncementRecipient {
    pub fn new(announcement_id: Uuid, user_id: Uuid) -> Self {
        Self {
            announcement_id,
            user_id,
            viewed: false,
            sms_delivered: false,
        }
    }
}
