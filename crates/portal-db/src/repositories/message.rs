//! PostgreSQL implementation of MessageRepository
//!
//! The messages table is flat and bidirectional. Listings join both
//! participants' names so the conversation aggregator can resolve display
//! names without extra round trips.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::Message;
use portal_core::{MessageRepository, RepoResult, ThreadMessage};

use crate::models::{MessageModel, ThreadMessageModel};

use super::error::{map_db_error, message_not_found};

const THREAD_SELECT: &str = r"
    SELECT m.id, m.sender_id, m.receiver_id, m.content, m.created_at,
           m.read, m.is_sms, m.sms_status, m.group_id,
           s.full_name AS sender_name, s.role AS sender_role,
           r.full_name AS receiver_name, r.role AS receiver_role
    FROM messages m
    LEFT JOIN users s ON s.id = m.sender_id
    LEFT JOIN users r ON r.id = m.receiver_id
";

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, sender_id, receiver_id, content, created_at,
                   read, is_sms, sms_status, group_id
            FROM messages
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Message::from))
    }

    #[instrument(skip(self))]
    async fn find_for_user(&self, user_id: Uuid) -> RepoResult<Vec<ThreadMessage>> {
        let query = format!("{THREAD_SELECT} WHERE m.sender_id = $1 OR m.receiver_id = $1");

        let rows = sqlx::query_as::<_, ThreadMessageModel>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ThreadMessage::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_thread(
        &self,
        user_id: Uuid,
        counterpart_id: Uuid,
    ) -> RepoResult<Vec<ThreadMessage>> {
        let query = format!(
            r"{THREAD_SELECT}
            WHERE (m.sender_id = $1 AND m.receiver_id = $2)
               OR (m.sender_id = $2 AND m.receiver_id = $1)
            ORDER BY m.created_at, m.id"
        );

        let rows = sqlx::query_as::<_, ThreadMessageModel>(&query)
            .bind(user_id)
            .bind(counterpart_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ThreadMessage::from).collect())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO messages (id, sender_id, receiver_id, content, created_at,
                                  read, is_sms, sms_status, group_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(message.id)
        .bind(message.sender_id)
        .bind(message.receiver_id)
        .bind(&message.content)
        .bind(message.created_at)
        .bind(message.read)
        .bind(message.is_sms)
        .bind(message.sms_status.map(|s| s.as_str()))
        .bind(&message.group_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_thread_read(&self, receiver_id: Uuid, sender_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE messages
            SET read = TRUE
            WHERE receiver_id = $1 AND sender_id = $2 AND read = FALSE
            ",
        )
        .bind(receiver_id)
        .bind(sender_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM messages WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(id));
        }

        Ok(())
    }
}
