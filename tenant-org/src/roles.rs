//! Role-based access control
//!
//! This module defines the system roles an organization member can hold and
//! the pure functions that compare and rank them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// System role within an organization.
///
/// Roles are ranked by a fixed privilege level, which is also the enum
/// discriminant. The hierarchy is: Viewer(1) < Member(2) < Admin(3) < Owner(4)
///
/// # Permission Model
///
/// - **Viewer**: Read-only access to organization resources
/// - **Member**: Can create and edit content and clients
/// - **Admin**: Can manage members, roles, clients and billing
/// - **Owner**: Every permission, including deleting the organization
///
/// # Examples
///
/// ```
/// use tenant_org::SystemRoleName;
///
/// assert!(SystemRoleName::Owner > SystemRoleName::Admin);
/// assert_eq!(SystemRoleName::Member.level(), 2);
/// assert_eq!(SystemRoleName::Admin.as_str(), "admin");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SystemRoleName {
    /// Read-only access to organization resources
    Viewer = 1,

    /// Can create and edit content
    Member = 2,

    /// Can manage members, roles and billing
    Admin = 3,

    /// Full organization control
    Owner = 4,
}

/// All system roles ordered by hierarchy (highest to lowest).
pub const SYSTEM_ROLES_ORDERED: [SystemRoleName; 4] = [
    SystemRoleName::Owner,
    SystemRoleName::Admin,
    SystemRoleName::Member,
    SystemRoleName::Viewer,
];

impl SystemRoleName {
    /// Get the hierarchy level of this role (higher = more privileged).
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(SystemRoleName)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tenant_org::SystemRoleName;
    ///
    /// assert_eq!(SystemRoleName::parse("admin"), Some(SystemRoleName::Admin));
    /// assert_eq!(SystemRoleName::parse("VIEWER"), Some(SystemRoleName::Viewer));
    /// assert_eq!(SystemRoleName::parse("editor"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "owner" => Some(Self::Owner),
            "admin" => Some(Self::Admin),
            "member" => Some(Self::Member),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// Get string representation of the role.
    ///
    /// # Returns
    ///
    /// Lowercase string representation, as stored by host applications
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Viewer => "viewer",
        }
    }

    /// Get a human-readable display name for the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenant_org::SystemRoleName;
    ///
    /// assert_eq!(SystemRoleName::Owner.display_name(), "Owner");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Admin => "Admin",
            Self::Member => "Member",
            Self::Viewer => "Viewer",
        }
    }
}

impl std::fmt::Display for SystemRoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemRoleName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnknownRole(s.to_string()))
    }
}

/// Get the hierarchy level of a role.
///
/// # Returns
///
/// 4 for Owner down to 1 for Viewer
pub fn get_role_hierarchy_level(role: SystemRoleName) -> u8 {
    role.level()
}

/// Get the hierarchy level of a stored role name.
///
/// # Returns
///
/// The role's level, or 0 for names outside the system roles (custom roles
/// carry no built-in privilege)
///
/// # Examples
///
/// ```
/// use tenant_org::get_role_hierarchy_level_by_name;
///
/// assert_eq!(get_role_hierarchy_level_by_name("owner"), 4);
/// assert_eq!(get_role_hierarchy_level_by_name("billing_clerk"), 0);
/// ```
pub fn get_role_hierarchy_level_by_name(name: &str) -> u8 {
    match SystemRoleName::parse(name) {
        Some(role) => role.level(),
        None => {
            tracing::debug!(role = %name, "Unknown role name, treating as level 0");
            0
        }
    }
}

/// Check if `role_a` is strictly higher in the hierarchy than `role_b`.
pub fn is_higher_role(role_a: SystemRoleName, role_b: SystemRoleName) -> bool {
    get_role_hierarchy_level(role_a) > get_role_hierarchy_level(role_b)
}

/// Check if `role_a` is higher than or equal to `role_b` in the hierarchy.
pub fn is_higher_or_equal_role(role_a: SystemRoleName, role_b: SystemRoleName) -> bool {
    get_role_hierarchy_level(role_a) >= get_role_hierarchy_level(role_b)
}

/// Check if stored role name `role_a` ranks strictly above `role_b`.
///
/// Names outside the system roles rank at level 0, below Viewer.
///
/// # Examples
///
/// ```
/// use tenant_org::is_higher_role_by_name;
///
/// assert!(is_higher_role_by_name("viewer", "billing_clerk"));
/// assert!(!is_higher_role_by_name("billing_clerk", "auditor"));
/// ```
pub fn is_higher_role_by_name(role_a: &str, role_b: &str) -> bool {
    get_role_hierarchy_level_by_name(role_a) > get_role_hierarchy_level_by_name(role_b)
}

/// Check if stored role name `role_a` ranks at or above `role_b`.
///
/// Two unknown names compare equal at level 0.
pub fn is_higher_or_equal_role_by_name(role_a: &str, role_b: &str) -> bool {
    get_role_hierarchy_level_by_name(role_a) >= get_role_hierarchy_level_by_name(role_b)
}

/// Check if the user has a specific role.
pub fn has_role(user_roles: &[SystemRoleName], required: SystemRoleName) -> bool {
    user_roles.contains(&required)
}

/// Check if the user has at least one of the required roles.
///
/// An empty `required` list is never satisfied.
pub fn has_any_role(user_roles: &[SystemRoleName], required: &[SystemRoleName]) -> bool {
    required.iter().any(|role| has_role(user_roles, *role))
}

/// Check if the user has every one of the required roles.
///
/// An empty `required` list is always satisfied.
pub fn has_all_roles(user_roles: &[SystemRoleName], required: &[SystemRoleName]) -> bool {
    required.iter().all(|role| has_role(user_roles, *role))
}

/// Get the highest role from a list of roles.
///
/// When several roles share the top level, the first one in input order wins.
///
/// # Returns
///
/// The highest role, or `None` for an empty list
///
/// # Examples
///
/// ```
/// use tenant_org::{get_highest_role, SystemRoleName};
///
/// assert_eq!(
///     get_highest_role(&[SystemRoleName::Viewer, SystemRoleName::Admin]),
///     Some(SystemRoleName::Admin)
/// );
/// assert_eq!(get_highest_role(&[]), None);
/// ```
pub fn get_highest_role(roles: &[SystemRoleName]) -> Option<SystemRoleName> {
    let (first, rest) = roles.split_first()?;
    Some(rest.iter().fold(*first, |highest, current| {
        if is_higher_role(*current, highest) {
            *current
        } else {
            highest
        }
    }))
}

/// Check if the user is an owner.
pub fn is_owner(user_roles: &[SystemRoleName]) -> bool {
    has_role(user_roles, SystemRoleName::Owner)
}

/// Check if the user is an admin or an owner.
pub fn is_admin_or_owner(user_roles: &[SystemRoleName]) -> bool {
    has_any_role(user_roles, &[SystemRoleName::Owner, SystemRoleName::Admin])
}

/// Sort roles by hierarchy, highest first.
///
/// Returns a new list; the sort is stable, so roles on the same level keep
/// their input order.
///
/// # Examples
///
/// ```
/// use tenant_org::{sort_roles_by_hierarchy, SystemRoleName::*};
///
/// assert_eq!(
///     sort_roles_by_hierarchy(&[Member, Owner, Viewer]),
///     vec![Owner, Member, Viewer]
/// );
/// ```
pub fn sort_roles_by_hierarchy(roles: &[SystemRoleName]) -> Vec<SystemRoleName> {
    let mut sorted = roles.to_vec();
    sorted.sort_by(|a, b| get_role_hierarchy_level(*b).cmp(&get_role_hierarchy_level(*a)));
    sorted
}
