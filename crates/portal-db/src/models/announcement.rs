//! Announcement database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the announcements table
#[derive(Debug, Clone, FromRow)]
pub struct AnnouncementModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub priority: String,
    pub send_as_sms: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Database model for the announcement_recipients table
#[derive(Debug, Clone, FromRow)]
pub struct AnnouncementRecipientModel {
    pub announcement_id: Uuid,
    pub user_id: Uuid,
    pub viewed: bool,
    pub sms_delivered: bool,
}

/// Announcement row joined with one recipient's tracking state
#[derive(Debug, Clone, FromRow)]
pub struct AnnouncementWithStateModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub priority: String,
    pub send_as_sms: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub viewed: bool,
    pub sms_delivered: bool,
}
