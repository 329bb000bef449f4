//! Destination for email delivery records.

use async_trait::async_trait;

use ebic_core::result::AppResult;
use ebic_database::repositories::EmailLogRepository;
use ebic_entity::email::NewEmailLog;

/// Records one row per delivery attempt.
#[async_trait]
pub trait EmailLogSink: Send + Sync + 'static {
    /// Persist an attempt.
    async fn record(&self, entry: NewEmailLog) -> AppResult<()>;
}

#[async_trait]
impl EmailLogSink for EmailLogRepository {
    async fn record(&self, entry: NewEmailLog) -> AppResult<()> {
        self.create(&entry).await.map(|_| ())
    }
}
