//! Message entity - one directed message between two users
//!
//! The message table is flat and bidirectional: a user's history is the union
//! of rows where they are sender or receiver. Rows with a null receiver are
//! broadcast/system rows used by the SMS stub for bookkeeping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::SmsStatus;

/// Message entity
///
/// Immutable once sent except for the `read` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    /// None marks a broadcast/system row (SMS bookkeeping)
    pub receiver_id: Option<Uuid>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    pub is_sms: bool,
    pub sms_status: Option<SmsStatus>,
    pub group_id: Option<String>,
}

impl Message {
    /// Create a new unread in-app message
    pub fn new(id: Uuid, sender_id: Uuid, receiver_id: Uuid, content: String) -> Self {
        Self {
            id,
            sender_id,
            receiver_id: Some(receiver_id),
            content,
            created_at: Utc::now(),
            read: false,
            is_sms: false,
            sms_status: None,
            group_id: None,
        }
    }

    /// Create the bookkeeping row the SMS stub writes (no receiver)
    pub fn new_sms_record(id: Uuid, sender_id: Uuid, content: String, group_id: String) -> Self {
        Self {
            id,
            sender_id,
            receiver_id: None,
            content,
            created_at: Utc::now(),
            read: false,
            is_sms: true,
            sms_status: Some(SmsStatus::Sent),
            group_id: Some(group_id),
        }
    }

    /// Broadcast/system rows have no counterpart and never form a thread
    #[inline]
    pub fn is_broadcast(&self) -> bool {
        self.receiver_id.is_none()
    }

    /// The other participant relative to `user_id`, if any
    pub fn counterpart(&self, user_id: Uuid) -> Option<Uuid> {
        if self.sender_id == user_id {
            self.receiver_id
        } else {
            Some(self.sender_id)
        }
    }

    /// Whether this row counts as unread for `user_id`
    #[inline]
    pub fn is_unread_for(&self, user_id: Uuid) -> bool {
        !self.read && self.receiver_id == Some(user_id)
    }

    /// Check if message content is empty after trimming
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Get a truncated preview of the message (for notifications)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}
