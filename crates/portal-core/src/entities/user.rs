//! User entity - a portal account (student, officer, or admin)

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Role;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new student account with required fields
    pub fn new(id: Uuid, email: String, full_name: String) -> Self {
        Self {
            id,
            email,
            full_name,
            role: Role::Student,
            phone: None,
            created_at: Utc::now(),
            last_login: None,
        }
    }

    /// Check whether the account can review documents and manage users
    #[inline]
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    /// Whether the account can receive SMS notifications
    #[inline]
    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|p| !p.trim().is_empty())
    }

    /// Initials used for avatar placeholders ("Ana Beatriz Silva" -> "ABS")
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}
