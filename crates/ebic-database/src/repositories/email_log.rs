//! Email log repository implementation.

use sqlx::PgPool;

use ebic_core::error::{AppError, ErrorKind};
use ebic_core::result::AppResult;
use ebic_entity::email::{EmailLog, NewEmailLog};

/// Append-only record of outbound email attempts.
#[derive(Debug, Clone)]
pub struct EmailLogRepository {
    pool: PgPool,
}

impl EmailLogRepository {
    /// Create a new email log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record one attempt.
    pub async fn create(&self, entry: &NewEmailLog) -> AppResult<EmailLog> {
        sqlx::query_as::<_, EmailLog>(
            "INSERT INTO email_logs (recipient, sender, subject, status, message_id, error_message, template) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&entry.recipient)
        .bind(&entry.sender)
        .bind(&entry.subject)
        .bind(entry.status)
        .bind(&entry.message_id)
        .bind(&entry.error_message)
        .bind(&entry.template)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record email", e))
    }

    /// Most recent attempts, newest first.
    pub async fn find_recent(&self, limit: i64) -> AppResult<Vec<EmailLog>> {
        sqlx::query_as::<_, EmailLog>("SELECT * FROM email_logs ORDER BY created_at DESC LIMIT $1")
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list email log", e))
    }
}
