//! User roles and the authorization tiers they grant

use serde::{Deserialize, Serialize};

/// Role of a portal user
///
/// Students upload documents and exchange messages; officers and admins
/// review documents, broadcast announcements, and manage tickets. The audit
/// log is restricted to admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Officer,
    Admin,
}

impl Role {
    /// Staff roles may review documents and manage users/announcements
    #[inline]
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Officer | Self::Admin)
    }

    /// Only admins may read the audit log
    #[inline]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Database / wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Officer => "officer",
            Self::Admin => "admin",
        }
    }

    /// Parse from the stored string, defaulting unknown values to student
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "officer" => Self::Officer,
            "admin" => Self::Admin,
            _ => Self::Student,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_tiers() {
        assert!(!Role::Student.is_staff());
        assert!(Role::Officer.is_staff());
        assert!(Role::Admin.is_staff());
        assert!(!Role::Officer.is_admin());
        assert!(Role::Admin.is_admin());
    }

    #[test]
    fn test_round_trip() {
        for role in [Role::Student, Role::Officer, Role::Admin] {
            assert_eq!(Role::from_str_lossy(role.as_str()), role);
        }
        assert_eq!(Role::from_str_lossy("something-else"), Role::Student);
    }
}
