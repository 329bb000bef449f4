//! Admin notification repository implementation.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use ebic_core::error::{AppError, ErrorKind};
use ebic_core::result::AppResult;
use ebic_core::types::pagination::{PageRequest, PageResponse};
use ebic_entity::notification::{AdminNotification, NewAdminNotification, NotificationPriority};

/// Optional inbox filters. Unset fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationFilter {
    /// Only this event type.
    pub notification_type: Option<String>,
    /// Only read (`true`) or unread (`false`) rows.
    pub is_read: Option<bool>,
    /// Only this priority.
    pub priority: Option<NotificationPriority>,
}

const FILTER_CLAUSE: &str = "user_id = $1 \
    AND ($2::text IS NULL OR notification_type = $2) \
    AND ($3::boolean IS NULL OR is_read = $3) \
    AND ($4::notification_priority IS NULL OR priority = $4)";

/// Repository for admin inbox rows.
#[derive(Debug, Clone)]
pub struct AdminNotificationRepository {
    pool: PgPool,
}

impl AdminNotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a notification row.
    pub async fn create(&self, row: &NewAdminNotification) -> AppResult<AdminNotification> {
        sqlx::query_as::<_, AdminNotification>(
            "INSERT INTO admin_notifications (user_id, notification_type, title, message, priority, action_url, data) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(row.user_id)
        .bind(row.notification_type.as_str())
        .bind(&row.title)
        .bind(&row.message)
        .bind(row.priority)
        .bind(&row.action_url)
        .bind(&row.data)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create admin notification", e)
        })
    }

    /// List a user's notifications, newest first.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        filter: &NotificationFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AdminNotification>> {
        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM admin_notifications WHERE {FILTER_CLAUSE}"
        ))
        .bind(user_id)
        .bind(&filter.notification_type)
        .bind(filter.is_read)
        .bind(filter.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count notifications", e))?;

        let items = sqlx::query_as::<_, AdminNotification>(&format!(
            "SELECT * FROM admin_notifications WHERE {FILTER_CLAUSE} \
             ORDER BY created_at DESC LIMIT $5 OFFSET $6"
        ))
        .bind(user_id)
        .bind(&filter.notification_type)
        .bind(filter.is_read)
        .bind(filter.priority)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))?;

        Ok(PageResponse::new(items, page, total.max(0) as u64))
    }

    /// Count a user's unread notifications.
    pub async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM admin_notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Mark one of the user's notifications as read. `None` when the row
    /// does not exist or belongs to someone else.
    pub async fn mark_read(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<AdminNotification>> {
        sqlx::query_as::<_, AdminNotification>(
            "UPDATE admin_notifications SET is_read = TRUE, read_at = COALESCE(read_at, NOW()) \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(notification_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))
    }

    /// Mark every unread notification of the user as read.
    pub async fn mark_all_read(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE admin_notifications SET is_read = TRUE, read_at = NOW() \
             WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;
        Ok(result.rows_affected())
    }

    /// Delete one of the user's notifications. Returns `false` when
    /// nothing matched.
    pub async fn delete(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM admin_notifications WHERE id = $1 AND user_id = $2")
                .bind(notification_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete notification", e)
                })?;
        Ok(result.rows_affected() > 0)
    }
}
