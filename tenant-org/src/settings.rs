//! Settings for organizations
//!
//! Organization settings are owned and persisted by the host application;
//! this module only defines their shape and defaults. Field names serialize
//! in camelCase so stored JSON stays compatible across hosts.

use serde::{Deserialize, Serialize};

use crate::tiers::{OrganizationTier, MAX_MEMBERS_BY_TIER};

/// Organization-level settings.
///
/// Every field has a serde default, so partial JSON fills in from
/// [`DEFAULT_ORGANIZATION_SETTINGS`].
///
/// # Examples
///
/// ```
/// use tenant_org::OrganizationSettings;
///
/// let settings: OrganizationSettings =
///     serde_json::from_str(r#"{ "features": ["sso"] }"#).unwrap();
/// assert!(settings.allow_member_invite);
/// assert!(settings.has_feature("sso"));
/// assert_eq!(settings.max_members, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationSettings {
    /// Whether members can invite other members
    pub allow_member_invite: bool,

    /// Default role ID for new members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_role_id: Option<String>,

    /// Feature flags
    pub features: Vec<String>,

    /// Custom domain (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,

    /// Maximum number of members (overrides the tier limit when set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_members: Option<u32>,
}

/// Default organization settings.
pub const DEFAULT_ORGANIZATION_SETTINGS: OrganizationSettings = OrganizationSettings {
    allow_member_invite: true,
    default_role_id: None,
    features: Vec::new(),
    custom_domain: None,
    max_members: MAX_MEMBERS_BY_TIER[0].1,
};

impl Default for OrganizationSettings {
    fn default() -> Self {
        DEFAULT_ORGANIZATION_SETTINGS
    }
}

impl OrganizationSettings {
    /// Check if a feature flag is enabled.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Enable a feature flag (no-op if already enabled).
    ///
    /// # Arguments
    ///
    /// * `feature` - The feature flag to enable
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        let feature = feature.into();
        if !self.has_feature(&feature) {
            self.features.push(feature);
        }
        self
    }

    /// Get the member limit in effect for an organization on `tier`.
    ///
    /// An explicit `max_members` override wins over the tier limit.
    ///
    /// # Returns
    ///
    /// Maximum number of members, `None` meaning unlimited
    ///
    /// # Examples
    ///
    /// ```
    /// use tenant_org::{OrganizationSettings, OrganizationTier};
    ///
    /// let mut settings = OrganizationSettings::default();
    /// settings.max_members = None;
    /// assert_eq!(settings.effective_max_members(OrganizationTier::Premium), None);
    ///
    /// settings.max_members = Some(25);
    /// assert_eq!(settings.effective_max_members(OrganizationTier::Premium), Some(25));
    /// ```
    pub fn effective_max_members(&self, tier: OrganizationTier) -> Option<u32> {
        self.max_members.or_else(|| tier.max_members())
    }
}
