//! # Actions
//!
//! Defines the actions that organization permissions grant.
//! The action is the last segment of a permission string such as
//! `organization.clients.manage_portal` (action `manage_portal`).

use serde::{Deserialize, Serialize};

/// Actions that can be granted within a permission domain.
///
/// Actions are plain identifiers. Unlike resource-level RBAC models, an
/// action never implies another one here: holding `update` does not grant
/// `read`. Role default tables list every action explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    /// View resource data.
    Read,

    /// Create new resource instances.
    Create,

    /// Modify existing resource data.
    Update,

    /// Permanently remove resources.
    Delete,

    /// Change organization-level settings.
    Settings,

    /// Invite new members.
    Invite,

    /// Administer existing members (role changes, suspension).
    Manage,

    /// Remove members from the organization.
    Remove,

    /// Publish content to its audience.
    Publish,

    /// Configure the client-facing portal.
    ManagePortal,
}

impl PermissionAction {
    /// Get the string representation of the action.
    ///
    /// # Returns
    ///
    /// A static string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionAction::Read => "read",
            PermissionAction::Create => "create",
            PermissionAction::Update => "update",
            PermissionAction::Delete => "delete",
            PermissionAction::Settings => "settings",
            PermissionAction::Invite => "invite",
            PermissionAction::Manage => "manage",
            PermissionAction::Remove => "remove",
            PermissionAction::Publish => "publish",
            PermissionAction::ManagePortal => "manage_portal",
        }
    }

    /// Parse action from its exact string representation.
    ///
    /// # Example
    ///
    /// ```
    /// use tenant_rbac::actions::PermissionAction;
    ///
    /// assert_eq!(PermissionAction::parse("read"), Some(PermissionAction::Read));
    /// assert_eq!(PermissionAction::parse("manage_portal"), Some(PermissionAction::ManagePortal));
    /// assert_eq!(PermissionAction::parse("view"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "read" => Some(PermissionAction::Read),
            "create" => Some(PermissionAction::Create),
            "update" => Some(PermissionAction::Update),
            "delete" => Some(PermissionAction::Delete),
            "settings" => Some(PermissionAction::Settings),
            "invite" => Some(PermissionAction::Invite),
            "manage" => Some(PermissionAction::Manage),
            "remove" => Some(PermissionAction::Remove),
            "publish" => Some(PermissionAction::Publish),
            "manage_portal" => Some(PermissionAction::ManagePortal),
            _ => None,
        }
    }

    /// Check if this is a destructive action.
    ///
    /// Destructive actions permanently remove data or people.
    pub fn is_destructive(&self) -> bool {
        matches!(self, PermissionAction::Delete | PermissionAction::Remove)
    }

    /// Check if this is a read-only action.
    pub fn is_read_only(&self) -> bool {
        matches!(self, PermissionAction::Read)
    }
}

impl std::fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
