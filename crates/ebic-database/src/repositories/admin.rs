//! Admin user repository: eager reads of users with their role grants
//! and notification preferences.

use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use ebic_core::error::{AppError, ErrorKind};
use ebic_core::result::AppResult;
use ebic_entity::notification::AdminNotificationPreferences;
use ebic_entity::user::{AdminUser, Permission};

/// Columns shared by every admin read. Permissions are aggregated into a
/// JSON array so one row carries the whole role.
const ADMIN_SELECT: &str = "\
    SELECT u.id, u.name, u.email, u.is_active, r.name AS role_name, \
           COALESCE( \
               jsonb_agg(jsonb_build_object('resource', p.resource, 'action', p.action)) \
                   FILTER (WHERE p.id IS NOT NULL), \
               '[]'::jsonb \
           ) AS permissions, \
           NULLIF(u.notification_preferences, 'null'::jsonb) AS notification_preferences \
    FROM users u \
    LEFT JOIN roles r ON r.id = u.role_id \
    LEFT JOIN role_permissions rp ON rp.role_id = u.role_id \
    LEFT JOIN permissions p ON p.id = rp.permission_id";

#[derive(Debug, FromRow)]
struct AdminRow {
    id: Uuid,
    name: Option<String>,
    email: Option<String>,
    is_active: bool,
    role_name: Option<String>,
    permissions: Json<Vec<Permission>>,
    notification_preferences: Option<Json<AdminNotificationPreferences>>,
}

impl From<AdminRow> for AdminUser {
    fn from(row: AdminRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            is_active: row.is_active,
            role_name: row.role_name,
            permissions: row.permissions.0,
            notification_preferences: row.notification_preferences.map(|p| p.0),
        }
    }
}

/// Read-mostly access to back-office users.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every active user with role grants and preferences, in one query.
    pub async fn find_active_with_role_and_preferences(&self) -> AppResult<Vec<AdminUser>> {
        let sql = format!(
            "{ADMIN_SELECT} WHERE u.is_active = TRUE GROUP BY u.id, r.name ORDER BY u.created_at"
        );
        let rows = sqlx::query_as::<_, AdminRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load active admins", e)
            })?;

        Ok(rows.into_iter().map(AdminUser::from).collect())
    }

    /// Find a user by email (case-insensitive), active or not.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<AdminUser>> {
        let sql = format!("{ADMIN_SELECT} WHERE LOWER(u.email) = LOWER($1) GROUP BY u.id, r.name");
        let row = sqlx::query_as::<_, AdminRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by email", e)
            })?;

        Ok(row.map(AdminUser::from))
    }

    /// Stored notification preferences for a user.
    ///
    /// Returns `NotFound` when the user does not exist and `Ok(None)` when
    /// the user never saved preferences.
    pub async fn get_preferences(
        &self,
        user_id: Uuid,
    ) -> AppResult<Option<AdminNotificationPreferences>> {
        let row: Option<(Option<Json<AdminNotificationPreferences>>,)> = sqlx::query_as(
            "SELECT NULLIF(notification_preferences, 'null'::jsonb) FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to get preferences", e))?;

        match row {
            Some((prefs,)) => Ok(prefs.map(|p| p.0)),
            None => Err(AppError::not_found(format!("User {user_id} not found"))),
        }
    }

    /// Replace a user's notification preferences.
    pub async fn update_preferences(
        &self,
        user_id: Uuid,
        preferences: &AdminNotificationPreferences,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE users SET notification_preferences = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(user_id)
        .bind(Json(preferences))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update preferences", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }
        Ok(())
    }
}
