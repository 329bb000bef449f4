//! Role permission definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Resource names used in role grants.
pub mod resources {
    pub const USERS: &str = "users";
    pub const NEWS: &str = "news";
    pub const COLLABORATORS: &str = "collaborators";
    pub const INNOVATORS: &str = "innovators";
    pub const DASHBOARD: &str = "dashboard";
    pub const SETTINGS: &str = "settings";
    pub const INVITATIONS: &str = "invitations";
    pub const CONTENT: &str = "content";
    pub const TEMPLATES: &str = "templates";
    pub const MESSAGES: &str = "messages";
    pub const REPORTS: &str = "reports";
    pub const STRATEGIC_PLANS: &str = "strategic_plans";
}

/// Action names used in role grants.
pub mod actions {
    pub const CREATE: &str = "create";
    pub const READ: &str = "read";
    pub const UPDATE: &str = "update";
    pub const DELETE: &str = "delete";
    /// Full control over a resource.
    pub const MANAGE: &str = "manage";
    pub const INVITE: &str = "invite";
    pub const APPROVE: &str = "approve";
    pub const REJECT: &str = "reject";
}

/// A single `(resource, action)` grant held by a role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
pub struct Permission {
    /// Resource the grant applies to (e.g. `"collaborators"`).
    pub resource: String,
    /// Granted action (e.g. `"manage"`).
    pub action: String,
}

impl Permission {
    /// Create a new grant.
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}

/// A permission an admin must hold to receive a notification, written
/// as `"resource:action"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RequiredPermission {
    /// Required resource.
    pub resource: String,
    /// Required action.
    pub action: String,
}

impl RequiredPermission {
    /// Create a requirement from its parts.
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    /// `manage` on the given resource.
    pub fn manage(resource: impl Into<String>) -> Self {
        Self::new(resource, actions::MANAGE)
    }
}

impl FromStr for RequiredPermission {
    type Err = ebic_core::AppError;

    /// Parse `"resource:action"`. A bare `"resource"` (or an empty action)
    /// means `manage`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource, action) = match s.split_once(':') {
            Some((r, a)) => (r.trim(), a.trim()),
            None => (s.trim(), ""),
        };
        if resource.is_empty() {
            return Err(ebic_core::AppError::validation(format!(
                "Invalid permission '{s}': resource is empty"
            )));
        }
        let action = if action.is_empty() {
            actions::MANAGE
        } else {
            action
        };
        Ok(Self::new(resource, action))
    }
}

impl TryFrom<String> for RequiredPermission {
    type Error = ebic_core::AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RequiredPermission> for String {
    fn from(value: RequiredPermission) -> Self {
        value.to_string()
    }
}

impl fmt::Display for RequiredPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}
