//! Subscription tiers and member limits
//!
//! This module defines the subscription tiers available to an organization
//! and the maximum member count each tier allows.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Subscription tier for an organization.
///
/// # Examples
///
/// ```
/// use tenant_org::OrganizationTier;
///
/// assert_eq!(OrganizationTier::Free.max_members(), Some(5));
/// assert_eq!(OrganizationTier::Premium.max_members(), None); // Unlimited
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrganizationTier {
    /// Free tier
    #[default]
    Free,

    /// Paid tier
    Premium,
}

/// Maximum number of members per organization tier (`None` = unlimited).
pub const MAX_MEMBERS_BY_TIER: [(OrganizationTier, Option<u32>); 2] = [
    (OrganizationTier::Free, Some(5)),
    (OrganizationTier::Premium, None),
];

impl OrganizationTier {
    /// Get the maximum number of members for this tier.
    ///
    /// # Returns
    ///
    /// `Some(limit)`, or `None` when the tier is unlimited
    pub fn max_members(&self) -> Option<u32> {
        match self {
            OrganizationTier::Free => MAX_MEMBERS_BY_TIER[0].1,
            OrganizationTier::Premium => MAX_MEMBERS_BY_TIER[1].1,
        }
    }

    /// Parse tier from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(OrganizationTier)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "FREE" => Some(OrganizationTier::Free),
            "PREMIUM" => Some(OrganizationTier::Premium),
            _ => None,
        }
    }

    /// Get string representation of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizationTier::Free => "FREE",
            OrganizationTier::Premium => "PREMIUM",
        }
    }

    /// Get a human-readable display name for the tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrganizationTier::Free => "Free",
            OrganizationTier::Premium => "Premium",
        }
    }

    /// Check if this is a paid tier.
    pub fn is_paid(&self) -> bool {
        !matches!(self, OrganizationTier::Free)
    }
}

impl std::fmt::Display for OrganizationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrganizationTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnknownTier(s.to_string()))
    }
}

/// Get max members for a tier.
///
/// # Returns
///
/// Maximum number of members allowed, `None` meaning unlimited
pub fn get_max_members_for_tier(tier: OrganizationTier) -> Option<u32> {
    tier.max_members()
}

/// Get max members for a stored tier name.
///
/// Unknown tier names fall back to the free tier's limit.
///
/// # Examples
///
/// ```
/// use tenant_org::get_max_members_for_tier_name;
///
/// assert_eq!(get_max_members_for_tier_name("PREMIUM"), None);
/// assert_eq!(get_max_members_for_tier_name("GOLD"), Some(5));
/// ```
pub fn get_max_members_for_tier_name(name: &str) -> Option<u32> {
    let tier = OrganizationTier::parse(name).unwrap_or_else(|| {
        tracing::debug!(tier = %name, "Unknown tier name, using free tier limits");
        OrganizationTier::Free
    });
    tier.max_members()
}

/// Check whether another member fits under a member limit.
///
/// # Arguments
///
/// * `limit` - Maximum members (`None` = unlimited)
/// * `current_count` - Members the organization already has
pub fn can_add_member(limit: Option<u32>, current_count: u32) -> bool {
    limit.map_or(true, |max| current_count < max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_limits() {
        assert_eq!(get_max_members_for_tier(OrganizationTier::Free), Some(5));
        assert_eq!(get_max_members_for_tier(OrganizationTier::Premium), None);
    }

    #[test]
    fn test_tier_name_fallback() {
        assert_eq!(get_max_members_for_tier_name("FREE"), Some(5));
        assert_eq!(get_max_members_for_tier_name("premium"), None);
        assert_eq!(get_max_members_for_tier_name("ENTERPRISE"), Some(5));
        assert_eq!(get_max_members_for_tier_name(""), Some(5));
    }

    #[test]
    fn test_tier_parsing() {
        assert_eq!(OrganizationTier::parse("FREE"), Some(OrganizationTier::Free));
        assert_eq!(
            OrganizationTier::parse("Premium"),
            Some(OrganizationTier::Premium)
        );
        assert_eq!(OrganizationTier::parse("pro"), None);
        assert_eq!(
            "pro".parse::<OrganizationTier>(),
            Err(ValidationError::UnknownTier("pro".to_string()))
        );
    }

    #[test]
    fn test_tier_hierarchy() {
        assert!(OrganizationTier::Premium > OrganizationTier::Free);
        assert!(OrganizationTier::Premium.is_paid());
        assert!(!OrganizationTier::Free.is_paid());
        assert_eq!(OrganizationTier::default(), OrganizationTier::Free);
    }

    #[test]
    fn test_can_add_member() {
        let free = OrganizationTier::Free.max_members();
        assert!(can_add_member(free, 4));
        assert!(!can_add_member(free, 5));
        assert!(can_add_member(None, u32::MAX));
    }

    #[test]
    fn test_tier_serde() {
        assert_eq!(
            serde_json::to_string(&OrganizationTier::Premium).unwrap(),
            "\"PREMIUM\""
        );
        let tier: OrganizationTier = serde_json::from_str("\"FREE\"").unwrap();
        assert_eq!(tier, OrganizationTier::Free);
    }
}
