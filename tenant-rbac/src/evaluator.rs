//! # Permission Evaluator
//!
//! Pure functions answering permission queries against the grants a caller
//! holds in one organization. Every function checks for the wildcard first:
//! a caller holding `*` is granted everything without scanning the rest.
//!
//! Inputs are borrowed and never modified; outputs are freshly allocated.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::permissions::{Grant, OrganizationPermission};

/// Check if the grants include the wildcard.
pub fn has_wildcard_permission(grants: &[Grant]) -> bool {
    grants.iter().any(Grant::is_wildcard)
}

fn holds(grants: &[Grant], required: OrganizationPermission) -> bool {
    grants.contains(&Grant::Permission(required))
}

/// Check if a caller has a specific permission.
///
/// # Returns
///
/// `true` if `grants` contains the wildcard or `required`
///
/// # Example
///
/// ```
/// use tenant_rbac::{has_permission, Grant, OrganizationPermission};
///
/// let grants = vec![Grant::Permission(OrganizationPermission::ContentRead)];
/// assert!(has_permission(&grants, OrganizationPermission::ContentRead));
/// assert!(!has_permission(&grants, OrganizationPermission::ContentDelete));
/// assert!(has_permission(&[Grant::Wildcard], OrganizationPermission::OrgDelete));
/// ```
pub fn has_permission(grants: &[Grant], required: OrganizationPermission) -> bool {
    has_wildcard_permission(grants) || holds(grants, required)
}

/// Check if a caller has at least one of the required permissions.
///
/// An empty `required` list is only satisfied by the wildcard.
pub fn has_any_permission(grants: &[Grant], required: &[OrganizationPermission]) -> bool {
    if has_wildcard_permission(grants) {
        return true;
    }
    required.iter().any(|perm| holds(grants, *perm))
}

/// Check if a caller has every one of the required permissions.
///
/// An empty `required` list is always satisfied.
pub fn has_all_permissions(grants: &[Grant], required: &[OrganizationPermission]) -> bool {
    if has_wildcard_permission(grants) {
        return true;
    }
    required.iter().all(|perm| holds(grants, *perm))
}

/// Get the required permissions the caller does not hold.
///
/// # Returns
///
/// The elements of `required` missing from `grants`, in `required`'s order.
/// Empty when the caller holds the wildcard or everything required.
///
/// # Example
///
/// ```
/// use tenant_rbac::{get_missing_permissions, Grant, OrganizationPermission};
///
/// let grants = vec![Grant::Permission(OrganizationPermission::MembersRead)];
/// let missing = get_missing_permissions(
///     &grants,
///     &[OrganizationPermission::MembersInvite, OrganizationPermission::MembersRead],
/// );
/// assert_eq!(missing, vec![OrganizationPermission::MembersInvite]);
/// ```
pub fn get_missing_permissions(
    grants: &[Grant],
    required: &[OrganizationPermission],
) -> Vec<OrganizationPermission> {
    if has_wildcard_permission(grants) {
        return Vec::new();
    }
    required
        .iter()
        .copied()
        .filter(|perm| !holds(grants, *perm))
        .collect()
}

/// Merge several grant lists into their deduplicated union.
///
/// If any list holds the wildcard the result is exactly `[Grant::Wildcard]`;
/// concrete permissions are discarded since the wildcard already covers them.
/// Otherwise grants keep the order in which they were first seen.
///
/// # Example
///
/// ```
/// use tenant_rbac::{merge_permissions, Grant, OrganizationPermission};
///
/// let a = vec![Grant::Permission(OrganizationPermission::OrgRead)];
/// let b = vec![
///     Grant::Permission(OrganizationPermission::OrgRead),
///     Grant::Permission(OrganizationPermission::BillingRead),
/// ];
/// assert_eq!(merge_permissions([a.as_slice(), b.as_slice()]).len(), 2);
/// assert_eq!(merge_permissions([a.as_slice(), &[Grant::Wildcard][..]]), vec![Grant::Wildcard]);
/// ```
pub fn merge_permissions<'a, I>(sets: I) -> Vec<Grant>
where
    I: IntoIterator<Item = &'a [Grant]>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for set in sets {
        if has_wildcard_permission(set) {
            return vec![Grant::Wildcard];
        }
        for grant in set {
            if seen.insert(*grant) {
                merged.push(*grant);
            }
        }
    }

    merged
}

/// Outcome of a permission check, suitable for returning to API clients.
///
/// # Example
///
/// ```
/// use tenant_rbac::{check_permissions, Grant, OrganizationPermission};
///
/// let grants = vec![Grant::Permission(OrganizationPermission::ContentRead)];
/// let result = check_permissions(&grants, &[OrganizationPermission::ContentPublish]);
/// assert!(!result.granted);
/// assert_eq!(result.missing_permissions, vec![OrganizationPermission::ContentPublish]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionCheckResult {
    /// Whether the permission check passed
    pub granted: bool,

    /// Reason for denial (if not granted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Missing permissions (if any)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_permissions: Vec<OrganizationPermission>,
}

impl PermissionCheckResult {
    /// Create a passing result.
    pub fn granted() -> Self {
        Self {
            granted: true,
            reason: None,
            missing_permissions: Vec::new(),
        }
    }

    /// Create a failing result with a reason.
    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            granted: false,
            reason: Some(reason.into()),
            missing_permissions: Vec::new(),
        }
    }

    /// Attach the permissions that caused the denial.
    pub fn with_missing(mut self, missing: Vec<OrganizationPermission>) -> Self {
        self.missing_permissions = missing;
        self
    }
}

/// Check that a caller holds every required permission.
///
/// The denial reason lists the missing permission strings so hosts can
/// surface it directly.
pub fn check_permissions(
    grants: &[Grant],
    required: &[OrganizationPermission],
) -> PermissionCheckResult {
    let missing = get_missing_permissions(grants, required);
    if missing.is_empty() {
        return PermissionCheckResult::granted();
    }

    let names: Vec<&str> = missing.iter().map(|perm| perm.as_str()).collect();
    let reason = format!("Missing required permissions: {}", names.join(", "));
    tracing::debug!(
        missing = missing.len(),
        required = required.len(),
        reason = %reason,
        "Permission check denied"
    );

    PermissionCheckResult::denied(reason).with_missing(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::OrganizationPermission::*;
    use std::sync::{Arc, Mutex};

    fn grants(perms: &[OrganizationPermission]) -> Vec<Grant> {
        perms.iter().copied().map(Grant::Permission).collect()
    }

    #[test]
    fn test_has_permission() {
        let set = grants(&[OrgRead, ContentRead]);
        assert!(has_permission(&set, OrgRead));
        assert!(!has_permission(&set, OrgDelete));
        assert!(!has_permission(&[], OrgRead));
    }

    #[test]
    fn test_wildcard_grants_everything() {
        let set = vec![Grant::Wildcard];
        for perm in OrganizationPermission::all() {
            assert!(has_permission(&set, *perm));
        }
        assert!(has_all_permissions(&set, OrganizationPermission::all()));
        assert!(get_missing_permissions(&set, OrganizationPermission::all()).is_empty());
    }

    #[test]
    fn test_wildcard_mixed_with_concrete() {
        let mut set = grants(&[ContentRead]);
        set.push(Grant::Wildcard);
        assert!(has_permission(&set, BillingManage));
        assert!(has_wildcard_permission(&set));
    }

    #[test]
    fn test_has_any_permission() {
        let set = grants(&[MembersRead]);
        assert!(has_any_permission(&set, &[MembersInvite, MembersRead]));
        assert!(!has_any_permission(&set, &[MembersInvite, MembersRemove]));
    }

    #[test]
    fn test_has_any_permission_empty_required() {
        assert!(!has_any_permission(&grants(&[OrgRead]), &[]));
        assert!(has_any_permission(&[Grant::Wildcard], &[]));
    }

    #[test]
    fn test_has_all_permissions() {
        let set = grants(&[ClientsRead, ClientsCreate]);
        assert!(has_all_permissions(&set, &[ClientsRead, ClientsCreate]));
        assert!(!has_all_permissions(&set, &[ClientsRead, ClientsDelete]));
        assert!(has_all_permissions(&set, &[]));
        assert!(has_all_permissions(&[], &[]));
    }

    #[test]
    fn test_get_missing_permissions_preserves_order() {
        let set = grants(&[RolesRead]);
        let missing = get_missing_permissions(&set, &[RolesUpdate, RolesRead, RolesCreate]);
        assert_eq!(missing, vec![RolesUpdate, RolesCreate]);
    }

    #[test]
    fn test_get_missing_permissions_keeps_duplicates_in_required() {
        let missing = get_missing_permissions(&[], &[OrgRead, OrgRead]);
        assert_eq!(missing, vec![OrgRead, OrgRead]);
    }

    #[test]
    fn test_merge_permissions_deduplicates() {
        let a = grants(&[OrgRead, ContentRead]);
        let b = grants(&[ContentRead, BillingRead]);
        let merged = merge_permissions([a.as_slice(), b.as_slice()]);
        assert_eq!(merged, grants(&[OrgRead, ContentRead, BillingRead]));
    }

    #[test]
    fn test_merge_permissions_wildcard_short_circuits() {
        let a = grants(&[OrgRead]);
        let b = vec![Grant::Permission(ContentRead), Grant::Wildcard];
        assert_eq!(
            merge_permissions([a.as_slice(), b.as_slice()]),
            vec![Grant::Wildcard]
        );
        assert_eq!(
            merge_permissions([b.as_slice(), a.as_slice()]),
            vec![Grant::Wildcard]
        );
    }

    #[test]
    fn test_merge_permissions_empty() {
        let none: [&[Grant]; 0] = [];
        assert!(merge_permissions(none).is_empty());
        assert!(merge_permissions([&[][..], &[][..]]).is_empty());
    }

    #[test]
    fn test_check_permissions_granted() {
        let result = check_permissions(&grants(&[OrgRead]), &[OrgRead]);
        assert_eq!(result, PermissionCheckResult::granted());
    }

    #[test]
    fn test_check_permissions_denied() {
        let result = check_permissions(&grants(&[OrgRead]), &[OrgRead, OrgUpdate, OrgDelete]);
        assert!(!result.granted);
        assert_eq!(result.missing_permissions, vec![OrgUpdate, OrgDelete]);
        assert_eq!(
            result.reason.as_deref(),
            Some("Missing required permissions: organization.update, organization.delete")
        );
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_denied_check_logs_reason() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            check_permissions(&[], &[BillingRead]);
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Permission check denied"));
        assert!(output.contains("missing=1"));
        assert!(output.contains("reason=Missing required permissions: organization.billing.read"));
    }

    #[test]
    fn test_check_result_serialization() {
        let granted = serde_json::to_value(PermissionCheckResult::granted()).unwrap();
        assert_eq!(granted, serde_json::json!({ "granted": true }));

        let denied = check_permissions(&[], &[BillingRead]);
        let json = serde_json::to_value(&denied).unwrap();
        assert_eq!(json["granted"], false);
        assert_eq!(
            json["missingPermissions"],
            serde_json::json!(["organization.billing.read"])
        );
    }
}
