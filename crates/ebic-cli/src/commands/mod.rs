//! CLI command definitions and dispatch.

pub mod email_log;
pub mod inbox;
pub mod migrate;
pub mod notify;
pub mod prefs;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use ebic_auth::{RbacEnforcer, RbacPolicies};
use ebic_core::config::AppConfig;
use ebic_core::error::AppError;
use ebic_database::DatabasePool;
use ebic_database::repositories::{AdminNotificationRepository, AdminRepository, EmailLogRepository};
use ebic_entity::user::AdminUser;
use ebic_mail::{AdminEmailRenderer, EmailService};
use ebic_service::{AdminInboxService, AdminNotifier, NotificationRules};

/// EBIC: admin notifications for the back office
#[derive(Debug, Parser)]
#[command(name = "ebic", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Fire an admin notification event
    Notify(notify::NotifyArgs),
    /// Read and manage an admin's inbox
    Inbox(inbox::InboxArgs),
    /// Show or change an admin's notification preferences
    Prefs(prefs::PrefsArgs),
    /// Show recent outbound email attempts
    EmailLog(email_log::EmailLogArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, config).await,
            Commands::Notify(args) => notify::execute(args, config, self.format).await,
            Commands::Inbox(args) => inbox::execute(args, config, self.format).await,
            Commands::Prefs(args) => prefs::execute(args, config, self.format).await,
            Commands::EmailLog(args) => email_log::execute(args, config, self.format).await,
        }
    }
}

/// Helper: connect to the configured database
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: wire the fan-out against the database and the configured mailer
pub fn build_notifier(config: &AppConfig, db: &DatabasePool) -> Result<AdminNotifier, AppError> {
    let pool = db.pool().clone();
    let mailer = EmailService::from_config(&config.email)?
        .with_log_sink(Arc::new(EmailLogRepository::new(pool.clone())));
    let renderer = AdminEmailRenderer::from_config(&config.email, &config.notifications)?;
    let rules = NotificationRules::new(RbacEnforcer::with_policies(RbacPolicies::from_config(
        &config.auth,
    )));

    Ok(AdminNotifier::new(
        Arc::new(AdminRepository::new(pool.clone())),
        Arc::new(AdminNotificationRepository::new(pool)),
        Arc::new(mailer),
        Arc::new(renderer),
        rules,
    )
    .with_settings(&config.notifications))
}

/// Helper: inbox service over the database
pub fn build_inbox(db: &DatabasePool) -> AdminInboxService {
    let pool = db.pool().clone();
    AdminInboxService::new(
        Arc::new(AdminNotificationRepository::new(pool.clone())),
        Arc::new(AdminRepository::new(pool)),
    )
}

/// Helper: look up an admin by email
pub async fn find_admin(db: &DatabasePool, email: &str) -> Result<AdminUser, AppError> {
    AdminRepository::new(db.pool().clone())
        .find_by_email(email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Admin '{}' not found", email)))
}
