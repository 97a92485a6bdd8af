//! Support ticket entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::TicketStatus;

/// Support ticket entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportTicket {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subject: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub status: TicketStatus,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupportTicket {
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        subject: String,
        description: String,
        category: String,
        priority: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            subject,
            description,
            category,
            priority,
            status: TicketStatus::Open,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }
}
