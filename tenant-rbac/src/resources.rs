//! # Permission Domains
//!
//! Defines the resource domains that organization permissions are grouped by.
//! The domain is the resource segment of a permission string such as
//! `organization.members.invite` (domain `members`).

use serde::{Deserialize, Serialize};

/// Resource domain a permission belongs to.
///
/// Every organization permission is scoped to exactly one domain:
/// - **Organization**: The organization record itself and its settings
/// - **Members**: Membership listing, invitations and removal
/// - **Roles**: Custom role management
/// - **Content**: Generic tenant content (documents, posts, ...)
/// - **Clients**: Client records and the client portal
/// - **Billing**: Subscription and invoices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PermissionDomain {
    /// The organization itself.
    Organization,
    /// Organization members.
    Members,
    /// Organization roles.
    Roles,
    /// Organization content.
    Content,
    /// Organization clients.
    Clients,
    /// Organization billing.
    Billing,
}

impl PermissionDomain {
    /// Get the string representation of the domain.
    ///
    /// # Returns
    ///
    /// A static lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionDomain::Organization => "organization",
            PermissionDomain::Members => "members",
            PermissionDomain::Roles => "roles",
            PermissionDomain::Content => "content",
            PermissionDomain::Clients => "clients",
            PermissionDomain::Billing => "billing",
        }
    }

    /// Parse domain from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(PermissionDomain)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use tenant_rbac::resources::PermissionDomain;
    ///
    /// assert_eq!(PermissionDomain::parse("members"), Some(PermissionDomain::Members));
    /// assert_eq!(PermissionDomain::parse("Billing"), Some(PermissionDomain::Billing));
    /// assert_eq!(PermissionDomain::parse("invoices"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "organization" | "org" => Some(PermissionDomain::Organization),
            "members" => Some(PermissionDomain::Members),
            "roles" => Some(PermissionDomain::Roles),
            "content" => Some(PermissionDomain::Content),
            "clients" => Some(PermissionDomain::Clients),
            "billing" => Some(PermissionDomain::Billing),
            _ => None,
        }
    }

    /// Get all domains, in the order permissions are declared.
    pub fn all() -> &'static [Self] {
        &[
            PermissionDomain::Organization,
            PermissionDomain::Members,
            PermissionDomain::Roles,
            PermissionDomain::Content,
            PermissionDomain::Clients,
            PermissionDomain::Billing,
        ]
    }

    /// Check if this domain is restricted to administrators by default.
    ///
    /// None of the permissions in these domains are granted to the viewer role.
    pub fn is_administrative(&self) -> bool {
        matches!(self, PermissionDomain::Roles | PermissionDomain::Billing)
    }
}

impl std::fmt::Display for PermissionDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_parsing() {
        assert_eq!(
            PermissionDomain::parse("organization"),
            Some(PermissionDomain::Organization)
        );
        assert_eq!(
            PermissionDomain::parse("org"),
            Some(PermissionDomain::Organization)
        );
        assert_eq!(
            PermissionDomain::parse("CLIENTS"),
            Some(PermissionDomain::Clients)
        );
        assert_eq!(PermissionDomain::parse("projects"), None);
    }

    #[test]
    fn test_domain_round_trip() {
        for domain in PermissionDomain::all() {
            assert_eq!(PermissionDomain::parse(domain.as_str()), Some(*domain));
        }
    }

    #[test]
    fn test_all_domains_count() {
        assert_eq!(PermissionDomain::all().len(), 6);
    }

    #[test]
    fn test_administrative_domains() {
        assert!(PermissionDomain::Billing.is_administrative());
        assert!(PermissionDomain::Roles.is_administrative());
        assert!(!PermissionDomain::Content.is_administrative());
    }
}
