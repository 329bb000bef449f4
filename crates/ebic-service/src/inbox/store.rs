//! Storage seams behind the admin inbox.

use async_trait::async_trait;
use uuid::Uuid;

use ebic_core::result::AppResult;
use ebic_core::types::pagination::{PageRequest, PageResponse};
use ebic_database::repositories::{AdminNotificationRepository, AdminRepository, NotificationFilter};
use ebic_entity::notification::{AdminNotification, AdminNotificationPreferences};

/// Owner-scoped access to inbox rows.
#[async_trait]
pub trait InboxStore: Send + Sync + 'static {
    /// A filtered page of the user's rows, newest first.
    async fn find_by_user(
        &self,
        user_id: Uuid,
        filter: &NotificationFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AdminNotification>>;

    /// Unread rows held by the user.
    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64>;

    /// `None` unless the row exists and belongs to `user_id`.
    async fn mark_read(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<AdminNotification>>;

    /// Number of rows flipped to read.
    async fn mark_all_read(&self, user_id: Uuid) -> AppResult<u64>;

    /// `false` unless the row existed and belonged to `user_id`.
    async fn delete(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool>;
}

/// Per-user preference storage.
#[async_trait]
pub trait PreferenceStore: Send + Sync + 'static {
    /// Stored record, `None` when never saved.
    async fn get_preferences(&self, user_id: Uuid) -> AppResult<Option<AdminNotificationPreferences>>;

    /// Replace the stored record.
    async fn update_preferences(
        &self,
        user_id: Uuid,
        preferences: &AdminNotificationPreferences,
    ) -> AppResult<()>;
}

#[async_trait]
impl InboxStore for AdminNotificationRepository {
    async fn find_by_user(
        &self,
        user_id: Uuid,
        filter: &NotificationFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AdminNotification>> {
        AdminNotificationRepository::find_by_user(self, user_id, filter, page).await
    }

    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        AdminNotificationRepository::count_unread(self, user_id).await
    }

    async fn mark_read(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<AdminNotification>> {
        AdminNotificationRepository::mark_read(self, notification_id, user_id).await
    }

    async fn mark_all_read(&self, user_id: Uuid) -> AppResult<u64> {
        AdminNotificationRepository::mark_all_read(self, user_id).await
    }

    async fn delete(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        AdminNotificationRepository::delete(self, notification_id, user_id).await
    }
}

#[async_trait]
impl PreferenceStore for AdminRepository {
    async fn get_preferences(&self, user_id: Uuid) -> AppResult<Option<AdminNotificationPreferences>> {
        AdminRepository::get_preferences(self, user_id).await
    }

    async fn update_preferences(
        &self,
        user_id: Uuid,
        preferences: &AdminNotificationPreferences,
    ) -> AppResult<()> {
        AdminRepository::update_preferences(self, user_id, preferences).await
    }
}
