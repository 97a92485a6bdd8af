//! Audit log entity
//!
//! Append-only rows written by the store's own triggers; this system only
//! reads them (admin listing with client-side style filtering).

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Audit log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLog {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action_type: String,
    pub table_name: Option<String>,
    pub record_id: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    /// Free-text match over action type, table name and record id
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.action_type.to_lowercase().contains(&term)
            || self
                .table_name
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&term))
            || self
                .record_id
                .as_deref()
                .is_some_and(|r| r.to_lowercase().contains(&term))
    }
}
