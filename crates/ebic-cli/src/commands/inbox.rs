//! Admin inbox CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use crate::output::{self, OutputFormat};
use ebic_core::config::AppConfig;
use ebic_core::error::AppError;
use ebic_core::types::pagination::PageRequest;
use ebic_database::repositories::NotificationFilter;
use ebic_entity::notification::{AdminNotification, NotificationPriority};

/// Arguments for inbox commands
#[derive(Debug, Args)]
pub struct InboxArgs {
    /// Email of the admin whose inbox to use
    #[arg(short, long)]
    pub admin: String,

    /// Inbox subcommand
    #[command(subcommand)]
    pub command: InboxCommand,
}

/// Inbox subcommands
#[derive(Debug, Subcommand)]
pub enum InboxCommand {
    /// List notifications, newest first
    List {
        /// Only this type
        #[arg(long = "type")]
        notification_type: Option<String>,
        /// Only unread notifications
        #[arg(long, conflicts_with = "read")]
        unread: bool,
        /// Only read notifications
        #[arg(long)]
        read: bool,
        /// Only this priority
        #[arg(long)]
        priority: Option<NotificationPriority>,
        #[arg(long, default_value_t = 1)]
        page: u64,
        #[arg(long, default_value_t = 20)]
        page_size: u64,
    },
    /// Show the unread count
    Unread,
    /// Mark one notification as read
    Read {
        /// Notification ID
        id: Uuid,
    },
    /// Mark every notification as read
    ReadAll,
    /// Delete one notification
    Delete {
        /// Notification ID
        id: Uuid,
    },
}

/// Notification display row for table output
#[derive(Debug, Serialize, Tabled)]
struct NotificationRow {
    id: String,
    #[tabled(rename = "type")]
    notification_type: String,
    priority: String,
    title: String,
    read: bool,
    created_at: String,
}

impl From<&AdminNotification> for NotificationRow {
    fn from(n: &AdminNotification) -> Self {
        Self {
            id: n.id.to_string(),
            notification_type: n.notification_type.clone(),
            priority: n.priority.to_string(),
            title: n.title.clone(),
            read: n.is_read,
            created_at: n.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute inbox commands
pub async fn execute(
    args: &InboxArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::connect(config).await?;
    let admin = super::find_admin(&db, &args.admin).await?;
    let inbox = super::build_inbox(&db);

    match &args.command {
        InboxCommand::List {
            notification_type,
            unread,
            read,
            priority,
            page,
            page_size,
        } => {
            let filter = NotificationFilter {
                notification_type: notification_type.clone(),
                is_read: match (unread, read) {
                    (true, _) => Some(false),
                    (_, true) => Some(true),
                    _ => None,
                },
                priority: *priority,
            };
            let result = inbox
                .list(admin.id, &filter, PageRequest::new(*page, *page_size))
                .await?;

            match format {
                OutputFormat::Json => output::print_json(&result),
                OutputFormat::Table => {
                    let rows: Vec<NotificationRow> =
                        result.notifications.items.iter().map(NotificationRow::from).collect();
                    output::print_list(&rows, format);
                    output::print_kv(
                        "Page",
                        &format!(
                            "{}/{}",
                            result.notifications.page,
                            result.notifications.total_pages.max(1)
                        ),
                    );
                    output::print_kv("Total", &result.notifications.total_items.to_string());
                    output::print_kv("Unread", &result.unread_count.to_string());
                }
            }
        }
        InboxCommand::Unread => {
            let count = inbox.unread_count(admin.id).await?;
            match format {
                OutputFormat::Json => output::print_json(&serde_json::json!({ "unreadCount": count })),
                OutputFormat::Table => output::print_kv("Unread", &count.to_string()),
            }
        }
        InboxCommand::Read { id } => {
            let notification = inbox.mark_read(admin.id, *id).await?;
            match format {
                OutputFormat::Json => output::print_json(&notification),
                OutputFormat::Table => output::print_success(&format!("Notification {} marked as read", id)),
            }
        }
        InboxCommand::ReadAll => {
            let updated = inbox.mark_all_read(admin.id).await?;
            output::print_success(&format!("{} notification(s) marked as read", updated));
        }
        InboxCommand::Delete { id } => {
            inbox.delete(admin.id, *id).await?;
            output::print_success(&format!("Notification {} deleted", id));
        }
    }

    db.close().await;
    Ok(())
}
