//! The transient description of something admins should hear about.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ebic_entity::notification::{NewAdminNotification, NotificationPriority, NotificationType};
use ebic_entity::user::RequiredPermission;

/// An event to fan out to admins.
///
/// Built once by a caller and then only borrowed by the fan-out, so every
/// recipient sees the same content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    /// Defaults to [`NotificationPriority::Normal`].
    pub priority: NotificationPriority,
    /// Admins must hold this grant to be notified. `None` means everyone.
    pub required_permission: Option<RequiredPermission>,
    pub action_url: Option<String>,
    /// Arbitrary payload stored with each row. Always a JSON object.
    pub data: serde_json::Value,
}

impl NotificationEvent {
    /// Create an event with default priority, no permission requirement,
    /// no link and an empty payload.
    pub fn new(
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            notification_type,
            title: title.into(),
            message: message.into(),
            priority: NotificationPriority::default(),
            required_permission: None,
            action_url: None,
            data: serde_json::Value::Object(Default::default()),
        }
    }

    pub fn with_priority(mut self, priority: NotificationPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Restrict the event to admins holding `permission`.
    pub fn requires(mut self, permission: RequiredPermission) -> Self {
        self.required_permission = Some(permission);
        self
    }

    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }

    /// Attach a payload. Non-object values are wrapped as `{"value": ..}`.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = match data {
            serde_json::Value::Object(_) => data,
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            other => serde_json::json!({ "value": other }),
        };
        self
    }

    /// The inbox row for one recipient.
    pub fn to_row(&self, user_id: Uuid) -> NewAdminNotification {
        NewAdminNotification {
            user_id,
            notification_type: self.notification_type.clone(),
            title: self.title.clone(),
            message: self.message.clone(),
            priority: self.priority,
            action_url: self.action_url.clone(),
            data: self.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let event = NotificationEvent::new(NotificationType::RoleChanged, "t", "m");
        assert_eq!(event.priority, NotificationPriority::Normal);
        assert!(event.required_permission.is_none());
        assert_eq!(event.data, json!({}));
    }

    #[test]
    fn test_with_data_keeps_object_shape() {
        let event = NotificationEvent::new(NotificationType::RoleChanged, "t", "m")
            .with_data(json!([1, 2]));
        assert_eq!(event.data, json!({ "value": [1, 2] }));

        let event = event.with_data(serde_json::Value::Null);
        assert_eq!(event.data, json!({}));
    }

    #[test]
    fn test_to_row_copies_content() {
        let user_id = Uuid::new_v4();
        let event = NotificationEvent::new(NotificationType::SecurityAlert, "Alert", "Body")
            .with_priority(NotificationPriority::Urgent)
            .with_action_url("/admin/security/alerts")
            .with_data(json!({ "ip": "1.2.3.4" }));

        let row = event.to_row(user_id);
        assert_eq!(row.user_id, user_id);
        assert_eq!(row.notification_type, NotificationType::SecurityAlert);
        assert_eq!(row.priority, NotificationPriority::Urgent);
        assert_eq!(row.action_url.as_deref(), Some("/admin/security/alerts"));
        assert_eq!(row.data["ip"], "1.2.3.4");
    }
}
