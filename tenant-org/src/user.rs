//! User account status
//!
//! The status is tracked by the host's identity layer; it is defined here
//! so every host stores the same values.

use serde::{Deserialize, Serialize};

/// Account status of a user.
///
/// # Examples
///
/// ```
/// use tenant_org::UserStatus;
///
/// assert!(UserStatus::Active.can_sign_in());
/// assert!(!UserStatus::PendingVerification.can_sign_in());
/// assert_eq!(UserStatus::PendingVerification.as_str(), "pending_verification");
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Account in good standing
    Active,

    /// Account deactivated by the user or an admin
    Inactive,

    /// Account suspended for policy reasons
    Suspended,

    /// Account locked after repeated failed sign-ins
    Locked,

    /// Email address not yet verified
    #[default]
    PendingVerification,
}

impl UserStatus {
    /// Get string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
            UserStatus::Locked => "locked",
            UserStatus::PendingVerification => "pending_verification",
        }
    }

    /// Parse status from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(UserStatus::Active),
            "inactive" => Some(UserStatus::Inactive),
            "suspended" => Some(UserStatus::Suspended),
            "locked" => Some(UserStatus::Locked),
            "pending_verification" => Some(UserStatus::PendingVerification),
            _ => None,
        }
    }

    /// Check if the account is active.
    pub fn is_active(&self) -> bool {
        matches!(self, UserStatus::Active)
    }

    /// Check if the account may sign in.
    ///
    /// Only active accounts may; every other status fails closed.
    pub fn can_sign_in(&self) -> bool {
        self.is_active()
    }

    /// Check if the status was imposed on the user (suspension or lockout).
    pub fn is_restricted(&self) -> bool {
        matches!(self, UserStatus::Suspended | UserStatus::Locked)
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!(UserStatus::parse("active"), Some(UserStatus::Active));
        assert_eq!(UserStatus::parse("LOCKED"), Some(UserStatus::Locked));
        assert_eq!(
            UserStatus::parse("pending_verification"),
            Some(UserStatus::PendingVerification)
        );
        assert_eq!(UserStatus::parse("banned"), None);
    }

    #[test]
    fn test_only_active_can_sign_in() {
        assert!(UserStatus::Active.can_sign_in());
        assert!(!UserStatus::Inactive.can_sign_in());
        assert!(!UserStatus::Suspended.can_sign_in());
        assert!(!UserStatus::Locked.can_sign_in());
        assert!(!UserStatus::PendingVerification.can_sign_in());
    }

    #[test]
    fn test_is_restricted() {
        assert!(UserStatus::Suspended.is_restricted());
        assert!(UserStatus::Locked.is_restricted());
        assert!(!UserStatus::Inactive.is_restricted());
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_string(&UserStatus::PendingVerification).unwrap(),
            "\"pending_verification\""
        );
        let status: UserStatus = serde_json::from_str("\"suspended\"").unwrap();
        assert_eq!(status, UserStatus::Suspended);
    }
}
