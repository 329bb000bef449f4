//! Admin notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationType;
use super::priority::NotificationPriority;

/// A notification row in an admin's inbox.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminNotification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient admin.
    pub user_id: Uuid,
    /// Event type name (see [`NotificationType`]).
    pub notification_type: String,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Priority level.
    pub priority: NotificationPriority,
    /// Back-office link for acting on the notification.
    pub action_url: Option<String>,
    /// The event payload (JSON object).
    pub data: serde_json::Value,
    /// Whether the admin has read this notification.
    pub is_read: bool,
    /// When the notification was read.
    pub read_at: Option<DateTime<Utc>>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl AdminNotification {
    /// Parsed event type.
    pub fn kind(&self) -> NotificationType {
        NotificationType::from(self.notification_type.clone())
    }
}

/// Data required to insert a notification row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAdminNotification {
    /// The recipient admin.
    pub user_id: Uuid,
    /// Event type.
    pub notification_type: NotificationType,
    /// Title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Priority level.
    pub priority: NotificationPriority,
    /// Optional back-office link.
    pub action_url: Option<String>,
    /// Event payload.
    pub data: serde_json::Value,
}
