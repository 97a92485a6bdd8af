//! Audit log entity <-> model mapper

use portal_core::entities::AuditLog;

use crate::models::AuditLogModel;

impl From<AuditLogModel> for AuditLog {
    fn from(model: AuditLogModel) -> Self {
        AuditLog {
            id: model.id,
            user_id: model.user_id,
            action_type: model.action_type,
            table_name: model.table_name,
            record_id: model.record_id,
            metadata: model.metadata,
            ip_address: model.ip_address,
            user_agent: model.user_agent,
            created_at: model.created_at,
        }
    }
}
