//! # Permissions
//!
//! The closed set of organization permissions and the [`Grant`] type that
//! callers hold. A grant is either one concrete permission or the wildcard,
//! which stands for every permission present and future.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::actions::PermissionAction;
use crate::error::PermissionError;
use crate::resources::PermissionDomain;

/// String token used for the wildcard grant in storage and on the wire.
pub const WILDCARD: &str = "*";

/// Granular permissions for organizations.
///
/// Each permission serializes to a stable `<resource>.<action>` string
/// (for example `organization.members.invite`). These strings are persisted
/// by host applications and must never change.
///
/// # Example
///
/// ```
/// use tenant_rbac::permissions::OrganizationPermission;
/// use tenant_rbac::resources::PermissionDomain;
/// use tenant_rbac::actions::PermissionAction;
///
/// let perm = OrganizationPermission::MembersInvite;
/// assert_eq!(perm.as_str(), "organization.members.invite");
/// assert_eq!(perm.domain(), PermissionDomain::Members);
/// assert_eq!(perm.action(), PermissionAction::Invite);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrganizationPermission {
    // Organization management
    /// Read organization details.
    #[serde(rename = "organization.read")]
    OrgRead,
    /// Update organization details.
    #[serde(rename = "organization.update")]
    OrgUpdate,
    /// Delete the organization.
    #[serde(rename = "organization.delete")]
    OrgDelete,
    /// Change organization settings.
    #[serde(rename = "organization.settings")]
    OrgSettings,

    // Member management
    /// List members.
    #[serde(rename = "organization.members.read")]
    MembersRead,
    /// Invite new members.
    #[serde(rename = "organization.members.invite")]
    MembersInvite,
    /// Change member roles and status.
    #[serde(rename = "organization.members.manage")]
    MembersManage,
    /// Remove members.
    #[serde(rename = "organization.members.remove")]
    MembersRemove,

    // Role management
    /// List roles.
    #[serde(rename = "organization.roles.read")]
    RolesRead,
    /// Create custom roles.
    #[serde(rename = "organization.roles.create")]
    RolesCreate,
    /// Update custom roles.
    #[serde(rename = "organization.roles.update")]
    RolesUpdate,
    /// Delete custom roles.
    #[serde(rename = "organization.roles.delete")]
    RolesDelete,

    // Content management
    /// Create content.
    #[serde(rename = "organization.content.create")]
    ContentCreate,
    /// Read content.
    #[serde(rename = "organization.content.read")]
    ContentRead,
    /// Update content.
    #[serde(rename = "organization.content.update")]
    ContentUpdate,
    /// Delete content.
    #[serde(rename = "organization.content.delete")]
    ContentDelete,
    /// Publish content.
    #[serde(rename = "organization.content.publish")]
    ContentPublish,

    // Client management
    /// Read clients.
    #[serde(rename = "organization.clients.read")]
    ClientsRead,
    /// Create clients.
    #[serde(rename = "organization.clients.create")]
    ClientsCreate,
    /// Update clients.
    #[serde(rename = "organization.clients.update")]
    ClientsUpdate,
    /// Delete clients.
    #[serde(rename = "organization.clients.delete")]
    ClientsDelete,
    /// Configure the client portal.
    #[serde(rename = "organization.clients.manage_portal")]
    ClientsManagePortal,

    // Billing
    /// Read billing information.
    #[serde(rename = "organization.billing.read")]
    BillingRead,
    /// Manage subscription and payment methods.
    #[serde(rename = "organization.billing.manage")]
    BillingManage,
}

impl OrganizationPermission {
    /// Get the stable string representation of the permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrgRead => "organization.read",
            Self::OrgUpdate => "organization.update",
            Self::OrgDelete => "organization.delete",
            Self::OrgSettings => "organization.settings",
            Self::MembersRead => "organization.members.read",
            Self::MembersInvite => "organization.members.invite",
            Self::MembersManage => "organization.members.manage",
            Self::MembersRemove => "organization.members.remove",
            Self::RolesRead => "organization.roles.read",
            Self::RolesCreate => "organization.roles.create",
            Self::RolesUpdate => "organization.roles.update",
            Self::RolesDelete => "organization.roles.delete",
            Self::ContentCreate => "organization.content.create",
            Self::ContentRead => "organization.content.read",
            Self::ContentUpdate => "organization.content.update",
            Self::ContentDelete => "organization.content.delete",
            Self::ContentPublish => "organization.content.publish",
            Self::ClientsRead => "organization.clients.read",
            Self::ClientsCreate => "organization.clients.create",
            Self::ClientsUpdate => "organization.clients.update",
            Self::ClientsDelete => "organization.clients.delete",
            Self::ClientsManagePortal => "organization.clients.manage_portal",
            Self::BillingRead => "organization.billing.read",
            Self::BillingManage => "organization.billing.manage",
        }
    }

    /// Parse a permission from its exact stored string.
    ///
    /// # Returns
    ///
    /// `Some(OrganizationPermission)` if the string is a known permission, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use tenant_rbac::permissions::OrganizationPermission;
    ///
    /// assert_eq!(
    ///     OrganizationPermission::parse("organization.billing.read"),
    ///     Some(OrganizationPermission::BillingRead)
    /// );
    /// assert_eq!(OrganizationPermission::parse("organization.billing.refund"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|perm| perm.as_str() == s)
    }

    /// Get the domain this permission is scoped to.
    pub fn domain(&self) -> PermissionDomain {
        match self {
            Self::OrgRead | Self::OrgUpdate | Self::OrgDelete | Self::OrgSettings => {
                PermissionDomain::Organization
            }
            Self::MembersRead | Self::MembersInvite | Self::MembersManage | Self::MembersRemove => {
                PermissionDomain::Members
            }
            Self::RolesRead | Self::RolesCreate | Self::RolesUpdate | Self::RolesDelete => {
                PermissionDomain::Roles
            }
            Self::ContentCreate
            | Self::ContentRead
            | Self::ContentUpdate
            | Self::ContentDelete
            | Self::ContentPublish => PermissionDomain::Content,
            Self::ClientsRead
            | Self::ClientsCreate
            | Self::ClientsUpdate
            | Self::ClientsDelete
            | Self::ClientsManagePortal => PermissionDomain::Clients,
            Self::BillingRead | Self::BillingManage => PermissionDomain::Billing,
        }
    }

    /// Get the action this permission grants.
    pub fn action(&self) -> PermissionAction {
        match self {
            Self::OrgRead
            | Self::MembersRead
            | Self::RolesRead
            | Self::ContentRead
            | Self::ClientsRead
            | Self::BillingRead => PermissionAction::Read,
            Self::RolesCreate | Self::ContentCreate | Self::ClientsCreate => {
                PermissionAction::Create
            }
            Self::OrgUpdate | Self::RolesUpdate | Self::ContentUpdate | Self::ClientsUpdate => {
                PermissionAction::Update
            }
            Self::OrgDelete | Self::RolesDelete | Self::ContentDelete | Self::ClientsDelete => {
                PermissionAction::Delete
            }
            Self::OrgSettings => PermissionAction::Settings,
            Self::MembersInvite => PermissionAction::Invite,
            Self::MembersManage | Self::BillingManage => PermissionAction::Manage,
            Self::MembersRemove => PermissionAction::Remove,
            Self::ContentPublish => PermissionAction::Publish,
            Self::ClientsManagePortal => PermissionAction::ManagePortal,
        }
    }

    /// Get all permissions, grouped by domain in declaration order.
    pub fn all() -> &'static [Self] {
        const ALL: &[OrganizationPermission] = &[
            OrganizationPermission::OrgRead,
            OrganizationPermission::OrgUpdate,
            OrganizationPermission::OrgDelete,
            OrganizationPermission::OrgSettings,
            OrganizationPermission::MembersRead,
            OrganizationPermission::MembersInvite,
            OrganizationPermission::MembersManage,
            OrganizationPermission::MembersRemove,
            OrganizationPermission::RolesRead,
            OrganizationPermission::RolesCreate,
            OrganizationPermission::RolesUpdate,
            OrganizationPermission::RolesDelete,
            OrganizationPermission::ContentCreate,
            OrganizationPermission::ContentRead,
            OrganizationPermission::ContentUpdate,
            OrganizationPermission::ContentDelete,
            OrganizationPermission::ContentPublish,
            OrganizationPermission::ClientsRead,
            OrganizationPermission::ClientsCreate,
            OrganizationPermission::ClientsUpdate,
            OrganizationPermission::ClientsDelete,
            OrganizationPermission::ClientsManagePortal,
            OrganizationPermission::BillingRead,
            OrganizationPermission::BillingManage,
        ];

        ALL
    }

    /// Get every permission scoped to the given domain.
    ///
    /// # Example
    ///
    /// ```
    /// use tenant_rbac::permissions::OrganizationPermission;
    /// use tenant_rbac::resources::PermissionDomain;
    ///
    /// let billing: Vec<_> = OrganizationPermission::in_domain(PermissionDomain::Billing).collect();
    /// assert_eq!(billing.len(), 2);
    /// ```
    pub fn in_domain(domain: PermissionDomain) -> impl Iterator<Item = Self> {
        Self::all()
            .iter()
            .copied()
            .filter(move |perm| perm.domain() == domain)
    }
}

impl std::fmt::Display for OrganizationPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrganizationPermission {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PermissionError::UnknownPermission(s.to_string()))
    }
}

/// A permission held by a caller: one concrete permission or the wildcard.
///
/// The wildcard dominates every permission check. Keeping it as its own
/// variant lets evaluators match on it instead of comparing strings.
///
/// # Example
///
/// ```
/// use tenant_rbac::permissions::{Grant, OrganizationPermission};
///
/// let grant = Grant::parse("*").unwrap();
/// assert!(grant.is_wildcard());
///
/// let grant: Grant = OrganizationPermission::ContentRead.into();
/// assert_eq!(grant.as_str(), "organization.content.read");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Grant {
    /// Every permission, present and future.
    Wildcard,
    /// A single concrete permission.
    Permission(OrganizationPermission),
}

impl Grant {
    /// Get the stored string form (`"*"` for the wildcard).
    pub fn as_str(&self) -> &'static str {
        match self {
            Grant::Wildcard => WILDCARD,
            Grant::Permission(perm) => perm.as_str(),
        }
    }

    /// Parse a grant from its stored string form.
    ///
    /// # Returns
    ///
    /// `Some(Grant)` for `"*"` or a known permission, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        if s == WILDCARD {
            return Some(Grant::Wildcard);
        }
        OrganizationPermission::parse(s).map(Grant::Permission)
    }

    /// Check if this is the wildcard grant.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Grant::Wildcard)
    }

    /// Get the concrete permission, if this is not the wildcard.
    pub fn permission(&self) -> Option<OrganizationPermission> {
        match self {
            Grant::Wildcard => None,
            Grant::Permission(perm) => Some(*perm),
        }
    }
}

impl From<OrganizationPermission> for Grant {
    fn from(perm: OrganizationPermission) -> Self {
        Grant::Permission(perm)
    }
}

impl From<Grant> for String {
    fn from(grant: Grant) -> Self {
        grant.as_str().to_string()
    }
}

impl TryFrom<String> for Grant {
    type Error = PermissionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Grant {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PermissionError::UnknownPermission(s.to_string()))
    }
}

impl std::fmt::Display for Grant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create grants from a list of stored permission strings.
///
/// Unknown strings are dropped and logged, so an unrecognised value can
/// never widen what a caller is allowed to do.
///
/// # Example
///
/// ```
/// use tenant_rbac::permissions::{grants_from_strings, Grant, OrganizationPermission};
///
/// let grants = grants_from_strings(&["organization.read", "organization.teleport"]);
/// assert_eq!(grants, vec![Grant::Permission(OrganizationPermission::OrgRead)]);
/// ```
pub fn grants_from_strings<S: AsRef<str>>(perms: &[S]) -> Vec<Grant> {
    perms
        .iter()
        .filter_map(|raw| {
            let raw = raw.as_ref();
            let grant = Grant::parse(raw);
            if grant.is_none() {
                tracing::warn!(permission = %raw, "Dropping unrecognised permission");
            }
            grant
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_count() {
        assert_eq!(OrganizationPermission::all().len(), 24);
    }

    #[test]
    fn test_permission_string_round_trip() {
        for perm in OrganizationPermission::all() {
            assert_eq!(OrganizationPermission::parse(perm.as_str()), Some(*perm));
            assert_eq!(perm.as_str().parse::<OrganizationPermission>(), Ok(*perm));
        }
    }

    #[test]
    fn test_permission_string_matches_domain_and_action() {
        for perm in OrganizationPermission::all() {
            let expected = match perm.domain() {
                PermissionDomain::Organization => format!("organization.{}", perm.action()),
                domain => format!("organization.{}.{}", domain, perm.action()),
            };
            assert_eq!(perm.as_str(), expected);
        }
    }

    #[test]
    fn test_permissions_in_domain() {
        let content: Vec<_> = OrganizationPermission::in_domain(PermissionDomain::Content).collect();
        assert_eq!(content.len(), 5);
        assert!(content.contains(&OrganizationPermission::ContentPublish));

        let clients: Vec<_> = OrganizationPermission::in_domain(PermissionDomain::Clients).collect();
        assert_eq!(clients.len(), 5);
        assert!(clients.contains(&OrganizationPermission::ClientsManagePortal));
    }

    #[test]
    fn test_unknown_permission_is_rejected() {
        assert_eq!(OrganizationPermission::parse("organization.members.ban"), None);
        assert_eq!(
            "organization.members.ban".parse::<OrganizationPermission>(),
            Err(PermissionError::UnknownPermission(
                "organization.members.ban".to_string()
            ))
        );
        // Exact match only
        assert_eq!(OrganizationPermission::parse("Organization.Read"), None);
    }

    #[test]
    fn test_grant_parsing() {
        assert_eq!(Grant::parse("*"), Some(Grant::Wildcard));
        assert_eq!(
            Grant::parse("organization.content.read"),
            Some(Grant::Permission(OrganizationPermission::ContentRead))
        );
        assert_eq!(Grant::parse("**"), None);
        assert_eq!(Grant::parse(""), None);
    }

    #[test]
    fn test_grant_accessors() {
        assert!(Grant::Wildcard.is_wildcard());
        assert_eq!(Grant::Wildcard.permission(), None);

        let grant = Grant::from(OrganizationPermission::BillingManage);
        assert!(!grant.is_wildcard());
        assert_eq!(grant.permission(), Some(OrganizationPermission::BillingManage));
        assert_eq!(grant.to_string(), "organization.billing.manage");
    }

    #[test]
    fn test_grants_from_strings_drops_unknown() {
        let grants = grants_from_strings(&[
            "organization.read".to_string(),
            "not.a.permission".to_string(),
            "*".to_string(),
        ]);
        assert_eq!(
            grants,
            vec![
                Grant::Permission(OrganizationPermission::OrgRead),
                Grant::Wildcard
            ]
        );
    }

    #[test]
    fn test_permission_serde_uses_stored_strings() {
        let json = serde_json::to_string(&OrganizationPermission::MembersInvite).unwrap();
        assert_eq!(json, "\"organization.members.invite\"");

        let parsed: OrganizationPermission =
            serde_json::from_str("\"organization.clients.manage_portal\"").unwrap();
        assert_eq!(parsed, OrganizationPermission::ClientsManagePortal);
    }

    #[test]
    fn test_grant_serde() {
        let grants = vec![
            Grant::Wildcard,
            Grant::Permission(OrganizationPermission::OrgRead),
        ];
        let json = serde_json::to_string(&grants).unwrap();
        assert_eq!(json, r#"["*","organization.read"]"#);

        let parsed: Vec<Grant> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, grants);

        let bad: Result<Grant, _> = serde_json::from_str("\"organization.nope\"");
        assert!(bad.is_err());
    }
}
