//! Admin user entity model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::permission::Permission;
use crate::notification::AdminNotificationPreferences;

/// A back-office user together with its role grants and notification
/// preferences, as loaded in one eager read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: Option<String>,
    /// Email address; users without one still receive inbox rows.
    pub email: Option<String>,
    /// Whether the account is active.
    pub is_active: bool,
    /// Name of the assigned role (if any).
    pub role_name: Option<String>,
    /// Every `(resource, action)` granted through the role.
    pub permissions: Vec<Permission>,
    /// Per-category email overrides. `None` means nothing was ever saved.
    pub notification_preferences: Option<AdminNotificationPreferences>,
}

impl AdminUser {
    /// Name used in greetings, falling back to the email local part.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }
        self.email
            .as_deref()
            .and_then(|e| e.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or("Admin")
            .to_string()
    }
}
