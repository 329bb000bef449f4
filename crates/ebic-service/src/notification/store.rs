//! Storage seams used by the fan-out.

use async_trait::async_trait;

use ebic_core::result::AppResult;
use ebic_database::repositories::{AdminNotificationRepository, AdminRepository};
use ebic_entity::notification::{AdminNotification, NewAdminNotification};
use ebic_entity::user::AdminUser;

/// Bulk source of notification candidates.
#[async_trait]
pub trait AdminDirectory: Send + Sync + 'static {
    /// Every active admin with role grants and preferences loaded.
    async fn find_active_admins(&self) -> AppResult<Vec<AdminUser>>;
}

/// Destination for inbox rows.
#[async_trait]
pub trait NotificationSink: Send + Sync + 'static {
    /// Persist a single row.
    async fn create_admin_notification(
        &self,
        row: NewAdminNotification,
    ) -> AppResult<AdminNotification>;
}

#[async_trait]
impl AdminDirectory for AdminRepository {
    async fn find_active_admins(&self) -> AppResult<Vec<AdminUser>> {
        self.find_active_with_role_and_preferences().await
    }
}

#[async_trait]
impl NotificationSink for AdminNotificationRepository {
    async fn create_admin_notification(
        &self,
        row: NewAdminNotification,
    ) -> AppResult<AdminNotification> {
        self.create(&row).await
    }
}
