//! PostgreSQL implementation of AuditLogRepository
//!
//! Read-only: rows are written by database triggers, never by this crate.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use portal_core::entities::AuditLog;
use portal_core::{AuditLogFilter, AuditLogRepository, RepoResult};

use crate::models::AuditLogModel;

use super::error::map_db_error;

const DEFAULT_LIMIT: i64 = 100;

/// PostgreSQL implementation of AuditLogRepository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PgAuditLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self))]
    async fn list(&self, filter: &AuditLogFilter) -> RepoResult<Vec<AuditLog>> {
        let rows = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, user_id, action_type, table_name, record_id,
                   metadata, ip_address, user_agent, created_at
            FROM audit_logs
            WHERE ($1::text IS NULL OR action_type = $1)
              AND ($2::text IS NULL OR table_name = $2)
            ORDER BY created_at DESC
            LIMIT $3
            ",
        )
        .bind(&filter.action_type)
        .bind(&filter.table_name)
        .bind(filter.limit.unwrap_or(DEFAULT_LIMIT))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(AuditLog::from).collect())
    }
}
