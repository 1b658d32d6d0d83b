//! Role hierarchy and default permission tables
//!
//! Static, process-wide tables binding each system role to its privilege
//! level and the grants it carries by default. Defaults widen monotonically
//! from Viewer to Admin; Owner holds the wildcard.

use serde::Serialize;
use tenant_rbac::{merge_permissions, Grant, OrganizationPermission as P};

use crate::roles::SystemRoleName;

const OWNER_PERMISSIONS: &[Grant] = &[Grant::Wildcard];

const ADMIN_PERMISSIONS: &[Grant] = &[
    // Organization
    Grant::Permission(P::OrgRead),
    Grant::Permission(P::OrgUpdate),
    Grant::Permission(P::OrgSettings),
    // Members
    Grant::Permission(P::MembersRead),
    Grant::Permission(P::MembersInvite),
    Grant::Permission(P::MembersManage),
    Grant::Permission(P::MembersRemove),
    // Roles
    Grant::Permission(P::RolesRead),
    Grant::Permission(P::RolesCreate),
    Grant::Permission(P::RolesUpdate),
    Grant::Permission(P::RolesDelete),
    // Content
    Grant::Permission(P::ContentCreate),
    Grant::Permission(P::ContentRead),
    Grant::Permission(P::ContentUpdate),
    Grant::Permission(P::ContentDelete),
    Grant::Permission(P::ContentPublish),
    // Clients
    Grant::Permission(P::ClientsRead),
    Grant::Permission(P::ClientsCreate),
    Grant::Permission(P::ClientsUpdate),
    Grant::Permission(P::ClientsDelete),
    Grant::Permission(P::ClientsManagePortal),
    // Billing
    Grant::Permission(P::BillingRead),
    Grant::Permission(P::BillingManage),
];

const MEMBER_PERMISSIONS: &[Grant] = &[
    Grant::Permission(P::OrgRead),
    Grant::Permission(P::MembersRead),
    Grant::Permission(P::RolesRead),
    Grant::Permission(P::ContentCreate),
    Grant::Permission(P::ContentRead),
    Grant::Permission(P::ContentUpdate),
    Grant::Permission(P::ClientsRead),
    Grant::Permission(P::ClientsCreate),
    Grant::Permission(P::ClientsUpdate),
    Grant::Permission(P::BillingRead),
];

const VIEWER_PERMISSIONS: &[Grant] = &[
    Grant::Permission(P::OrgRead),
    Grant::Permission(P::MembersRead),
    Grant::Permission(P::ContentRead),
    Grant::Permission(P::ClientsRead),
];

/// Default grants for each system role, highest role first.
pub static DEFAULT_PERMISSIONS_BY_ROLE: [(SystemRoleName, &[Grant]); 4] = [
    (SystemRoleName::Owner, OWNER_PERMISSIONS),
    (SystemRoleName::Admin, ADMIN_PERMISSIONS),
    (SystemRoleName::Member, MEMBER_PERMISSIONS),
    (SystemRoleName::Viewer, VIEWER_PERMISSIONS),
];

/// Role hierarchy information.
///
/// # Examples
///
/// ```
/// use tenant_org::{get_role_hierarchy_info, SystemRoleName};
///
/// let info = get_role_hierarchy_info(SystemRoleName::Admin);
/// assert_eq!(info.level, 3);
/// assert!(!info.default_permissions.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleHierarchy {
    /// Role name
    pub role: SystemRoleName,

    /// Hierarchy level (higher = more privileged)
    pub level: u8,

    /// Default permissions for this role
    pub default_permissions: &'static [Grant],
}

/// Level and default grants for every system role, highest role first.
pub static ROLE_HIERARCHY: [RoleHierarchy; 4] = [
    RoleHierarchy {
        role: SystemRoleName::Owner,
        level: SystemRoleName::Owner.level(),
        default_permissions: OWNER_PERMISSIONS,
    },
    RoleHierarchy {
        role: SystemRoleName::Admin,
        level: SystemRoleName::Admin.level(),
        default_permissions: ADMIN_PERMISSIONS,
    },
    RoleHierarchy {
        role: SystemRoleName::Member,
        level: SystemRoleName::Member.level(),
        default_permissions: MEMBER_PERMISSIONS,
    },
    RoleHierarchy {
        role: SystemRoleName::Viewer,
        level: SystemRoleName::Viewer.level(),
        default_permissions: VIEWER_PERMISSIONS,
    },
];

/// Get default permissions for a role.
///
/// # Returns
///
/// The static default grant list for the role
///
/// # Examples
///
/// ```
/// use tenant_org::{get_default_permissions_for_role, SystemRoleName};
/// use tenant_rbac::Grant;
///
/// assert_eq!(get_default_permissions_for_role(SystemRoleName::Owner), &[Grant::Wildcard]);
/// ```
pub fn get_default_permissions_for_role(role: SystemRoleName) -> &'static [Grant] {
    match role {
        SystemRoleName::Owner => OWNER_PERMISSIONS,
        SystemRoleName::Admin => ADMIN_PERMISSIONS,
        SystemRoleName::Member => MEMBER_PERMISSIONS,
        SystemRoleName::Viewer => VIEWER_PERMISSIONS,
    }
}

/// Get default permissions for a stored role name.
///
/// # Returns
///
/// The role's default grants, or an empty slice for unknown names
pub fn get_default_permissions_for_role_name(name: &str) -> &'static [Grant] {
    match SystemRoleName::parse(name) {
        Some(role) => get_default_permissions_for_role(role),
        None => {
            tracing::debug!(role = %name, "Unknown role name, no default permissions");
            &[]
        }
    }
}

/// Get role hierarchy information for a role.
pub fn get_role_hierarchy_info(role: SystemRoleName) -> &'static RoleHierarchy {
    match role {
        SystemRoleName::Owner => &ROLE_HIERARCHY[0],
        SystemRoleName::Admin => &ROLE_HIERARCHY[1],
        SystemRoleName::Member => &ROLE_HIERARCHY[2],
        SystemRoleName::Viewer => &ROLE_HIERARCHY[3],
    }
}

/// Get role hierarchy information for a stored role name.
///
/// # Returns
///
/// `Some(&RoleHierarchy)` for a system role, `None` otherwise
pub fn get_role_hierarchy_info_by_name(name: &str) -> Option<&'static RoleHierarchy> {
    SystemRoleName::parse(name).map(get_role_hierarchy_info)
}

/// Get the union of the default grants of every role held.
///
/// Holding Owner collapses the result to the wildcard.
///
/// # Examples
///
/// ```
/// use tenant_org::{effective_permissions, SystemRoleName};
/// use tenant_rbac::Grant;
///
/// let grants = effective_permissions(&[SystemRoleName::Viewer, SystemRoleName::Owner]);
/// assert_eq!(grants, vec![Grant::Wildcard]);
/// ```
pub fn effective_permissions(roles: &[SystemRoleName]) -> Vec<Grant> {
    merge_permissions(
        roles
            .iter()
            .map(|role| get_default_permissions_for_role(*role)),
    )
}
