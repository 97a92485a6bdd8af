//! Audit log service
//!
//! Admin-only read access over the append-only audit trail. Exact-match
//! filters are pushed to the store; the free-text search runs over the
//! returned page, mirroring how the listing is consumed.

use tracing::instrument;

use portal_core::error::DomainError;
use portal_core::traits::AuditLogFilter;
use portal_core::value_objects::Role;

use crate::dto::requests::AuditQuery;
use crate::dto::responses::AuditLogResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Audit log service
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Filtered audit listing, admin only
    #[instrument(skip(self, query))]
    pub async fn list(
        &self,
        caller_role: Role,
        query: AuditQuery,
    ) -> ServiceResult<Vec<AuditLogResponse>> {
        if !caller_role.is_admin() {
            return Err(DomainError::AdminRequired.into());
        }

        let filter = AuditLogFilter {
            action_type: query.action_type,
            table_name: query.table_name,
            limit: query.limit,
        };
        let rows = self.ctx.audit_repo().list(&filter).await?;

        let rows = match query.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => rows
                .into_iter()
                .filter(|l| l.matches_search(term))
                .collect(),
            _ => rows,
        };

        Ok(rows.iter().map(AuditLogResponse::from).collect())
    }
}
