//! Roles and authenticated sessions

use super::errors::HearscreenError;
use super::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May delete records and export CSV
    Admin,
    /// Read/write screenings only
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public view of an account, as returned by login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// Identity established from a verified bearer token
///
/// Handlers receive this explicitly; there is no ambient "current user".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: UserInfo,
}

impl Session {
    pub fn new(user: UserInfo) -> Self {
        Self { user }
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }

    /// Fails with `Forbidden` unless the session belongs to an admin
    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(HearscreenError::Forbidden(format!(
                "user '{}' with role '{}' is not an admin",
                self.user.username, self.user.role
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session::new(UserInfo {
            id: 1,
            username: "nurse".to_string(),
            role,
        })
    }

    #[test]
    fn test_require_admin() {
        assert!(session(Role::Admin).require_admin().is_ok());
        assert!(matches!(
            session(Role::Staff).require_admin(),
            Err(HearscreenError::Forbidden(_))
        ));
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(role, Role::Staff);
    }
}
