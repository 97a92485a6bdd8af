//! Message database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Option<Uuid>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    pub is_sms: bool,
    pub sms_status: Option<String>,
    pub group_id: Option<String>,
}

/// Message row joined with both participants' display names and roles.
///
/// The joins are LEFT joins: a missing user (deleted account, broadcast row
/// with no receiver) yields nulls rather than dropping the message.
#[derive(Debug, Clone, FromRow)]
pub struct ThreadMessageModel {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Option<Uuid>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    pub is_sms: bool,
    pub sms_status: Option<String>,
    pub group_id: Option<String>,
    pub sender_name: Option<String>,
    pub sender_role: Option<String>,
    pub receiver_name: Option<String>,
    pub receiver_role: Option<String>,
}
