//! Notification service
//!
//! Read-side of the in-app notification rows other services produce.

use tracing::instrument;
use uuid::Uuid;

use crate::dto::responses::{NotificationResponse, UnreadCountResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The caller's notifications, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Uuid) -> ServiceResult<Vec<NotificationResponse>> {
        let rows = self.ctx.notification_repo().find_by_user(user_id).await?;
        Ok(rows.iter().map(NotificationResponse::from).collect())
    }

    /// Unread badge count
    pub async fn unread_count(&self, user_id: Uuid) -> ServiceResult<UnreadCountResponse> {
        let unread = self.ctx.notification_repo().unread_count(user_id).await?;
        Ok(UnreadCountResponse { unread })
    }

    /// Mark one notification read. Marking an already-read or foreign
    /// notification is a no-op, not an error.
    #[instrument(skip(self))]
    pub async fn mark_read(&self, id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        self.ctx.notification_repo().mark_read(id, user_id).await?;
        Ok(())
    }

    /// Mark every notification read
    #[instrument(skip(self))]
    pub async fn mark_all_read(&self, user_id: Uuid) -> ServiceResult<u64> {
        let updated = self.ctx.notification_repo().mark_all_read(user_id).await?;
        Ok(updated)
    }
}
