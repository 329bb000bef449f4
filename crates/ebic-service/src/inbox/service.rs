//! Admin inbox operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use ebic_core::error::AppError;
use ebic_core::types::pagination::{PageRequest, PageResponse};
use ebic_database::repositories::NotificationFilter;
use ebic_entity::notification::{AdminNotification, AdminNotificationPreferences};

use super::store::{InboxStore, PreferenceStore};

/// One page of an admin's inbox with the overall unread count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboxPage {
    pub notifications: PageResponse<AdminNotification>,
    pub unread_count: i64,
}

/// Manages an admin's notifications and preferences.
#[derive(Clone)]
pub struct AdminInboxService {
    notif_repo: Arc<dyn InboxStore>,
    admin_repo: Arc<dyn PreferenceStore>,
}

impl std::fmt::Debug for AdminInboxService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminInboxService").finish_non_exhaustive()
    }
}

impl AdminInboxService {
    /// Creates a new inbox service.
    pub fn new(notif_repo: Arc<dyn InboxStore>, admin_repo: Arc<dyn PreferenceStore>) -> Self {
        Self {
            notif_repo,
            admin_repo,
        }
    }

    /// Lists notifications for an admin, newest first.
    pub async fn list(
        &self,
        user_id: Uuid,
        filter: &NotificationFilter,
        page: PageRequest,
    ) -> Result<InboxPage, AppError> {
        let notifications = self.notif_repo.find_by_user(user_id, filter, &page).await?;
        let unread_count = self.notif_repo.count_unread(user_id).await?;
        Ok(InboxPage {
            notifications,
            unread_count,
        })
    }

    /// Gets the unread notification count.
    pub async fn unread_count(&self, user_id: Uuid) -> Result<i64, AppError> {
        self.notif_repo.count_unread(user_id).await
    }

    /// Marks a notification as read.
    pub async fn mark_read(
        &self,
        user_id: Uuid,
        notification_id: Uuid,
    ) -> Result<AdminNotification, AppError> {
        self.notif_repo
            .mark_read(notification_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Notification {notification_id} not found")))
    }

    /// Marks all notifications as read for the admin.
    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, AppError> {
        let updated = self.notif_repo.mark_all_read(user_id).await?;
        info!(user_id = %user_id, updated, "Marked all notifications read");
        Ok(updated)
    }

    /// Deletes a notification owned by the admin.
    pub async fn delete(&self, user_id: Uuid, notification_id: Uuid) -> Result<(), AppError> {
        if self.notif_repo.delete(notification_id, user_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!(
                "Notification {notification_id} not found"
            )))
        }
    }

    /// Gets the admin's preferences; an empty record when none were saved.
    pub async fn get_preferences(
        &self,
        user_id: Uuid,
    ) -> Result<AdminNotificationPreferences, AppError> {
        Ok(self
            .admin_repo
            .get_preferences(user_id)
            .await?
            .unwrap_or_default())
    }

    /// Merges `patch` over the stored preferences and saves the result.
    pub async fn update_preferences(
        &self,
        user_id: Uuid,
        patch: &AdminNotificationPreferences,
    ) -> Result<AdminNotificationPreferences, AppError> {
        let mut preferences = self.get_preferences(user_id).await?;
        preferences.merge(patch);
        self.admin_repo
            .update_preferences(user_id, &preferences)
            .await?;
        info!(user_id = %user_id, "Updated notification preferences");
        Ok(preferences)
    }
}
