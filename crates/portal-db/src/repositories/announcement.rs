//! PostgreSQL implementation of AnnouncementRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::{Announcement, AnnouncementRecipient};
use portal_core::{AnnouncementRepository, RepoResult};

use crate::models::{AnnouncementModel, AnnouncementWithStateModel};

use super::error::map_db_error;

/// PostgreSQL implementation of AnnouncementRepository
#[derive(Clone)]
pub struct PgAnnouncementRepository {
    pool: PgPool,
}

impl PgAnnouncementRepository {
    /// Create a new PgAnnouncementRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementRepository for PgAnnouncementRepository {
    #[instrument(skip(self, announcement), fields(announcement_id = %announcement.id))]
    async fn create(&self, announcement: &Announcement) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO announcements (id, author_id, title, content, priority,
                                       send_as_sms, expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(announcement.id)
        .bind(announcement.author_id)
        .bind(&announcement.title)
        .bind(&announcement.content)
        .bind(announcement.priority.as_str())
        .bind(announcement.send_as_sms)
        .bind(announcement.expires_at)
        .bind(announcement.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, recipients))]
    async fn add_recipients(&self, recipients: &[AnnouncementRecipient]) -> RepoResult<()> {
        // Bulk insert via UNNEST; a single round trip regardless of fan-out size
        let announcement_ids: Vec<Uuid> = recipients.iter().map(|r| r.announcement_id).collect();
        let user_ids: Vec<Uuid> = recipients.iter().map(|r| r.user_id).collect();

        sqlx::query(
            r"
            INSERT INTO announcement_recipients (announcement_id, user_id, viewed, sms_delivered)
            SELECT a, u, FALSE, FALSE
            FROM UNNEST($1::uuid[], $2::uuid[]) AS t(a, u)
            ",
        )
        .bind(&announcement_ids)
        .bind(&user_ids)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Announcement>> {
        let rows = sqlx::query_as::<_, AnnouncementModel>(
            r"
            SELECT id, author_id, title, content, priority, send_as_sms, expires_at, created_at
            FROM announcements
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Announcement::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_for_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> RepoResult<Vec<(Announcement, AnnouncementRecipient)>> {
        let rows = sqlx::query_as::<_, AnnouncementWithStateModel>(
            r"
            SELECT a.id, a.author_id, a.title, a.content, a.priority,
                   a.send_as_sms, a.expires_at, a.created_at,
                   r.user_id, r.viewed, r.sms_delivered
            FROM announcements a
            JOIN announcement_recipients r ON r.announcement_id = a.id
            WHERE r.user_id = $1
              AND (a.expires_at IS NULL OR a.expires_at > $2)
            ORDER BY a.created_at DESC
            ",
        )
        .bind(user_id)
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn mark_viewed(&self, announcement_id: Uuid, user_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE announcement_recipients
            SET viewed = TRUE
            WHERE announcement_id = $1 AND user_id = $2 AND viewed = FALSE
            ",
        )
        .bind(announcement_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn set_sms_delivered(&self, announcement_id: Uuid, user_id: Uuid) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE announcement_recipients
            SET sms_delivered = TRUE
            WHERE announcement_id = $1 AND user_id = $2
            ",
        )
        .bind(announcement_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
