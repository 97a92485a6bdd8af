//! PostgreSQL implementation of SupportTicketRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::SupportTicket;
use portal_core::{RepoResult, SupportTicketRepository, TicketStatus};

use crate::models::SupportTicketModel;

use super::error::{map_db_error, ticket_not_found};

const TICKET_SELECT: &str = r"
    SELECT id, user_id, subject, description, category, priority, status,
           assigned_to, created_at, updated_at
    FROM support_tickets
";

/// PostgreSQL implementation of SupportTicketRepository
#[derive(Clone)]
pub struct PgSupportTicketRepository {
    pool: PgPool,
}

impl PgSupportTicketRepository {
    /// Create a new PgSupportTicketRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupportTicketRepository for PgSupportTicketRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SupportTicket>> {
        let query = format!("{TICKET_SELECT} WHERE id = $1");

        let result = sqlx::query_as::<_, SupportTicketModel>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(SupportTicket::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<SupportTicket>> {
        let query = format!("{TICKET_SELECT} WHERE user_id = $1 ORDER BY created_at DESC");

        let rows = sqlx::query_as::<_, SupportTicketModel>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(SupportTicket::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<SupportTicket>> {
        let query = format!("{TICKET_SELECT} ORDER BY created_at DESC");

        let rows = sqlx::query_as::<_, SupportTicketModel>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(SupportTicket::from).collect())
    }

    #[instrument(skip(self, ticket), fields(ticket_id = %ticket.id))]
    async fn create(&self, ticket: &SupportTicket) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO support_tickets (id, user_id, subject, description, category,
                                         priority, status, assigned_to, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(ticket.id)
        .bind(ticket.user_id)
        .bind(&ticket.subject)
        .bind(&ticket.description)
        .bind(&ticket.category)
        .bind(&ticket.priority)
        .bind(ticket.status.as_str())
        .bind(ticket.assigned_to)
        .bind(ticket.created_at)
        .bind(ticket.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        id: Uuid,
        status: TicketStatus,
        assigned_to: Option<Uuid>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE support_tickets
            SET status = $2, assigned_to = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(assigned_to)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(ticket_not_found(id));
        }

        Ok(())
    }
}
