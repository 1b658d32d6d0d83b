//! # Tenant Organization Model
//!
//! This crate provides the framework-agnostic authorization model for
//! multi-tenant SaaS applications: system roles, their default permissions,
//! subscription tiers, organization settings and tenant field validators.
//!
//! ## Overview
//!
//! The tenant-org crate handles:
//! - **Roles**: The Owner > Admin > Member > Viewer hierarchy and role checks
//! - **Hierarchy**: Static level and default permission tables per role
//! - **Tiers**: Subscription tiers with member limits
//! - **Settings**: Organization settings shape and defaults
//! - **Context**: The per-request organization context and request shape
//! - **Validators**: Slug, name, role name and email checks
//!
//! Nothing here performs I/O. Host frameworks authenticate the user, load
//! their memberships, and pass resolved roles and grants in.
//!
//! ## Architecture
//!
//! ```text
//! Host framework
//!   └─ TenantRequest<User, Membership>
//!         └─ OrganizationContext (roles + grants for one organization)
//!               ├─ Role evaluator  ──→ ROLE_HIERARCHY
//!               └─ Permission evaluator (tenant-rbac)
//!                                     ──→ DEFAULT_PERMISSIONS_BY_ROLE
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tenant_org::{
//!     get_default_permissions_for_role, has_permission, is_admin_or_owner,
//!     validate_new_organization, OrganizationPermission, SystemRoleName,
//! };
//!
//! // Validate an organization before the host persists it
//! assert!(validate_new_organization("Acme Corp", "acme-corp").is_ok());
//!
//! // Evaluate a member's default grants
//! let grants = get_default_permissions_for_role(SystemRoleName::Member);
//! assert!(has_permission(grants, OrganizationPermission::ContentCreate));
//! assert!(!has_permission(grants, OrganizationPermission::MembersInvite));
//!
//! assert!(is_admin_or_owner(&[SystemRoleName::Admin]));
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate re-exports the permission surface of `tenant-rbac`, so hosts
//! can depend on `tenant-org` alone.

pub mod context;
pub mod error;
pub mod hierarchy;
pub mod roles;
pub mod settings;
pub mod tiers;
pub mod user;
pub mod validators;

// Re-export main types for convenience
pub use context::{OrganizationContext, TenantRequest};
pub use error::{ValidationError, ValidationResult};
pub use hierarchy::{
    effective_permissions, get_default_permissions_for_role,
    get_default_permissions_for_role_name, get_role_hierarchy_info,
    get_role_hierarchy_info_by_name, RoleHierarchy, DEFAULT_PERMISSIONS_BY_ROLE, ROLE_HIERARCHY,
};
pub use roles::{
    get_highest_role, get_role_hierarchy_level, get_role_hierarchy_level_by_name, has_all_roles,
    has_any_role, has_role, is_admin_or_owner, is_higher_or_equal_role,
    is_higher_or_equal_role_by_name, is_higher_role, is_higher_role_by_name, is_owner,
    sort_roles_by_hierarchy, SystemRoleName, SYSTEM_ROLES_ORDERED,
};
pub use settings::{OrganizationSettings, DEFAULT_ORGANIZATION_SETTINGS};
pub use tiers::{
    can_add_member, get_max_members_for_tier, get_max_members_for_tier_name, OrganizationTier,
    MAX_MEMBERS_BY_TIER,
};
pub use user::UserStatus;
pub use validators::{
    ensure_email, ensure_role_name, is_reserved_slug, normalize_organization_slug,
    validate_email, validate_new_organization, validate_organization_name,
    validate_organization_slug, validate_role_name, FieldConstraints,
    ORGANIZATION_NAME_CONSTRAINTS, ORGANIZATION_SLUG_CONSTRAINTS, RESERVED_SLUGS,
};

pub use tenant_rbac::{
    check_permissions, get_missing_permissions, grants_from_strings, has_all_permissions,
    has_any_permission, has_permission, has_wildcard_permission, merge_permissions, Grant,
    OrganizationPermission, PermissionAction, PermissionCheckResult, PermissionDomain, WILDCARD,
};
