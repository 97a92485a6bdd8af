//! Conversation service
//!
//! Thin orchestration over the pure aggregator: fetches the caller's flat
//! message rows and user directory, and derives per-counterpart threads.

use tracing::{debug, instrument};
use uuid::Uuid;

use portal_core::conversation::{group_conversations, CounterpartRef};
use portal_core::error::DomainError;

use crate::dto::responses::{ConversationResponse, MessageResponse, ThreadResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Conversation service
pub struct ConversationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConversationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The caller's inbox: one entry per counterpart, newest thread first
    #[instrument(skip(self))]
    pub async fn list(&self, current_user: Uuid) -> ServiceResult<Vec<ConversationResponse>> {
        let directory: Vec<CounterpartRef> = self
            .ctx
            .user_repo()
            .list_except(current_user)
            .await?
            .into_iter()
            .map(|u| CounterpartRef {
                id: u.id,
                name: u.full_name,
                role: u.role,
            })
            .collect();

        let rows = self.ctx.message_repo().find_for_user(current_user).await?;

        debug!(rows = rows.len(), counterparts = directory.len(), "aggregating conversations");

        let conversations = group_conversations(current_user, rows, &directory);
        Ok(conversations
            .into_iter()
            .map(ConversationResponse::from)
            .collect())
    }

    /// Open the two-party thread with one counterpart, marking everything
    /// they sent us as read
    #[instrument(skip(self))]
    pub async fn open_thread(
        &self,
        current_user: Uuid,
        counterpart_id: Uuid,
    ) -> ServiceResult<ThreadResponse> {
        self.ctx
            .user_repo()
            .find_by_id(counterpart_id)
            .await?
            .ok_or(DomainError::UserNotFound(counterpart_id))?;

        let marked_read = self
            .ctx
            .message_repo()
            .mark_thread_read(current_user, counterpart_id)
            .await?;

        let rows = self
            .ctx
            .message_repo()
            .find_thread(current_user, counterpart_id)
            .await?;

        Ok(ThreadResponse {
            counterpart_id,
            messages: rows
                .into_iter()
                .map(|r| MessageResponse::from(r.message))
                .collect(),
            marked_read,
        })
    }
}
