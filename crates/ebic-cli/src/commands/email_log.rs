//! Email log CLI commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use ebic_core::config::AppConfig;
use ebic_core::error::AppError;
use ebic_database::repositories::EmailLogRepository;

/// Arguments for the email-log command
#[derive(Debug, Args)]
pub struct EmailLogArgs {
    /// Number of entries to show
    #[arg(short, long, default_value_t = 20)]
    pub limit: i64,
}

/// Email log display row for table output
#[derive(Debug, Serialize, Tabled)]
struct EmailLogRow {
    sent_at: String,
    status: String,
    to: String,
    subject: String,
    error: String,
}

/// Execute the email-log command
pub async fn execute(
    args: &EmailLogArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::connect(config).await?;
    let entries = EmailLogRepository::new(db.pool().clone())
        .find_recent(args.limit.max(1))
        .await?;
    db.close().await;

    let rows: Vec<EmailLogRow> = entries
        .iter()
        .map(|e| EmailLogRow {
            sent_at: e.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            status: e.status.to_string(),
            to: e.recipient.clone(),
            subject: e.subject.clone(),
            error: e.error_message.clone().unwrap_or_default(),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
