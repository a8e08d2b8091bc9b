//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Account roles, ordered by capability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Approver,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Approver => "approver",
            Role::Admin => "admin",
        }
    }

    /// Parse a role from its wire/storage form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Role::User),
            "approver" => Some(Role::Approver),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Role::User => 0,
            Role::Approver => 1,
            Role::Admin => 2,
        }
    }

    /// Whether this role grants the capability of `required`.
    ///
    /// Admin satisfies everything; approver satisfies approver and user.
    pub fn satisfies(&self, required: Role) -> bool {
        self.rank() >= required.rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_satisfies_itself() {
        for role in [Role::User, Role::Approver, Role::Admin] {
            assert!(role.satisfies(role));
        }
    }

    #[test]
    fn test_admin_satisfies_everything() {
        assert!(Role::Admin.satisfies(Role::User));
        assert!(Role::Admin.satisfies(Role::Approver));
        assert!(Role::Admin.satisfies(Role::Admin));
    }

    #[test]
    fn test_approver_is_not_admin() {
        assert!(Role::Approver.satisfies(Role::Approver));
        assert!(Role::Approver.satisfies(Role::User));
        assert!(!Role::Approver.satisfies(Role::Admin));
    }

    #[test]
    fn test_user_has_no_elevated_capability() {
        assert!(!Role::User.satisfies(Role::Approver));
        assert!(!Role::User.satisfies(Role::Admin));
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::User, Role::Approver, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("owner"), None);
    }
}
