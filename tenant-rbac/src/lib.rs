//! # Tenant RBAC
//!
//! Organization permissions and pure permission evaluation for multi-tenant
//! SaaS applications. The crate performs no I/O: host frameworks resolve a
//! user's grants for the active organization and pass them in.
//!
//! ## Overview
//!
//! The tenant-rbac crate handles:
//! - **Domains**: The resource areas permissions are grouped by
//! - **Actions**: What a permission allows within its domain
//! - **Permissions**: The closed set of `<resource>.<action>` identifiers
//! - **Grants**: A concrete permission or the `*` wildcard
//! - **Evaluator**: Membership, any/all, missing and merge queries
//!
//! ## Architecture
//!
//! ```text
//! Grant = Wildcard | Permission(OrganizationPermission)
//!
//! Examples:
//!   "organization.read"              - Read the organization
//!   "organization.members.invite"    - Invite members
//!   "*"                              - Everything, present and future
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tenant_rbac::{has_permission, has_all_permissions, merge_permissions};
//! use tenant_rbac::{Grant, OrganizationPermission};
//!
//! let grants = vec![
//!     Grant::Permission(OrganizationPermission::ContentRead),
//!     Grant::Permission(OrganizationPermission::ContentCreate),
//! ];
//!
//! assert!(has_permission(&grants, OrganizationPermission::ContentRead));
//! assert!(!has_all_permissions(
//!     &grants,
//!     &[OrganizationPermission::ContentRead, OrganizationPermission::ContentPublish],
//! ));
//!
//! // The wildcard dominates any merge
//! let owner = vec![Grant::Wildcard];
//! assert_eq!(merge_permissions([grants.as_slice(), owner.as_slice()]), vec![Grant::Wildcard]);
//! ```
//!
//! ## Integration with tenant-org
//!
//! `tenant-org` binds each system role to a default grant list built from
//! these permissions and re-exports this crate's surface.

pub mod actions;
pub mod error;
pub mod evaluator;
pub mod permissions;
pub mod resources;

// Re-export main types for convenience
pub use actions::PermissionAction;
pub use error::{PermissionError, PermissionResult};
pub use evaluator::{
    check_permissions, get_missing_permissions, has_all_permissions, has_any_permission,
    has_permission, has_wildcard_permission, merge_permissions, PermissionCheckResult,
};
pub use permissions::{grants_from_strings, Grant, OrganizationPermission, WILDCARD};
pub use resources::PermissionDomain;
