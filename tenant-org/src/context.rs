//! Organization context for the current request
//!
//! This module provides the per-request view of "who is acting in which
//! organization". The host framework builds an [`OrganizationContext`] after
//! resolving the user's roles and grants, then asks it authorization questions.

use serde::{Deserialize, Serialize};
use tenant_rbac::{
    check_permissions, has_all_permissions, has_any_permission, has_permission, Grant,
    OrganizationPermission, PermissionCheckResult,
};

use crate::roles::{self, SystemRoleName};

/// A user's resolved roles and grants within one organization.
///
/// # Examples
///
/// ```
/// use tenant_org::{OrganizationContext, SystemRoleName};
/// use tenant_rbac::OrganizationPermission;
///
/// let ctx = OrganizationContext::from_roles("org_1", "user_1", vec![SystemRoleName::Member]);
/// assert!(ctx.has_permission(OrganizationPermission::ContentCreate));
/// assert!(!ctx.has_permission(OrganizationPermission::ContentPublish));
/// assert_eq!(ctx.highest_role(), Some(SystemRoleName::Member));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationContext {
    /// Current organization ID
    pub organization_id: String,

    /// Current user ID
    pub user_id: String,

    /// User's roles in this organization
    #[serde(default)]
    pub roles: Vec<SystemRoleName>,

    /// User's permissions in this organization
    #[serde(default)]
    pub permissions: Vec<Grant>,
}

impl OrganizationContext {
    /// Creates a context with explicitly resolved roles and grants.
    ///
    /// # Arguments
    ///
    /// * `organization_id` - The active organization
    /// * `user_id` - The acting user
    /// * `roles` - Roles the user holds in the organization
    /// * `permissions` - Grants the user holds in the organization
    pub fn new(
        organization_id: impl Into<String>,
        user_id: impl Into<String>,
        roles: Vec<SystemRoleName>,
        permissions: Vec<Grant>,
    ) -> Self {
        Self {
            organization_id: organization_id.into(),
            user_id: user_id.into(),
            roles,
            permissions,
        }
    }

    /// Creates a context whose grants are the default grants of `roles`.
    pub fn from_roles(
        organization_id: impl Into<String>,
        user_id: impl Into<String>,
        roles: Vec<SystemRoleName>,
    ) -> Self {
        let permissions = crate::hierarchy::effective_permissions(&roles);
        Self::new(organization_id, user_id, roles, permissions)
    }

    /// Add grants on top of the current ones (for custom per-member permissions).
    ///
    /// # Arguments
    ///
    /// * `extra` - Grants to merge in
    pub fn with_additional_permissions(mut self, extra: &[Grant]) -> Self {
        self.permissions =
            tenant_rbac::merge_permissions([self.permissions.as_slice(), extra]);
        self
    }

    /// Check if the user has a specific permission.
    pub fn has_permission(&self, required: OrganizationPermission) -> bool {
        has_permission(&self.permissions, required)
    }

    /// Check if the user has at least one of the required permissions.
    pub fn has_any_permission(&self, required: &[OrganizationPermission]) -> bool {
        has_any_permission(&self.permissions, required)
    }

    /// Check if the user has every one of the required permissions.
    pub fn has_all_permissions(&self, required: &[OrganizationPermission]) -> bool {
        has_all_permissions(&self.permissions, required)
    }

    /// Check every required permission and explain a denial.
    pub fn check(&self, required: &[OrganizationPermission]) -> PermissionCheckResult {
        check_permissions(&self.permissions, required)
    }

    /// Get the user's highest role, if any.
    pub fn highest_role(&self) -> Option<SystemRoleName> {
        roles::get_highest_role(&self.roles)
    }

    /// Check if the user owns the organization.
    pub fn is_owner(&self) -> bool {
        roles::is_owner(&self.roles)
    }

    /// Check if the user is an admin or owner.
    pub fn is_admin_or_owner(&self) -> bool {
        roles::is_admin_or_owner(&self.roles)
    }
}

/// Authenticated request shape shared with host frameworks.
///
/// `U` and `M` are the host's own user and membership types; this crate never
/// inspects them.
///
/// # Examples
///
/// ```
/// use tenant_org::TenantRequest;
///
/// struct SessionUser { email: String }
///
/// let req: TenantRequest<SessionUser, ()> = TenantRequest::new(SessionUser {
///     email: "ada@example.com".into(),
/// })
/// .with_organization("org_42");
/// assert_eq!(req.organization_id.as_deref(), Some("org_42"));
/// assert!(req.organization_membership.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRequest<U, M> {
    /// Authenticated user
    pub user: U,

    /// Current organization ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,

    /// Current organization membership
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_membership: Option<M>,
}

impl<U, M> TenantRequest<U, M> {
    /// Creates a request for an authenticated user with no organization selected.
    pub fn new(user: U) -> Self {
        Self {
            user,
            organization_id: None,
            organization_membership: None,
        }
    }

    /// Set the active organization.
    pub fn with_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    /// Set the resolved membership for the active organization.
    pub fn with_membership(mut self, membership: M) -> Self {
        self.organization_membership = Some(membership);
        self
    }

    /// Check if the request is scoped to an organization with a resolved membership.
    pub fn is_tenant_scoped(&self) -> bool {
        self.organization_id.is_some() && self.organization_membership.is_some()
    }
}
