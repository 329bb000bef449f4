//! Notification preference CLI commands.

use clap::{Args, Subcommand, ValueEnum};

use crate::output::{self, OutputFormat};
use ebic_core::config::AppConfig;
use ebic_core::error::AppError;
use ebic_entity::notification::{AdminNotificationPreferences, DigestMode};

/// Arguments for preference commands
#[derive(Debug, Args)]
pub struct PrefsArgs {
    /// Email of the admin
    #[arg(short, long)]
    pub admin: String,

    /// Preference subcommand
    #[command(subcommand)]
    pub command: PrefsCommand,
}

/// Digest mode argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DigestArg {
    Immediate,
    Daily,
    Weekly,
}

impl From<DigestArg> for DigestMode {
    fn from(value: DigestArg) -> Self {
        match value {
            DigestArg::Immediate => Self::Immediate,
            DigestArg::Daily => Self::Daily,
            DigestArg::Weekly => Self::Weekly,
        }
    }
}

/// Preference subcommands
#[derive(Debug, Subcommand)]
pub enum PrefsCommand {
    /// Show stored preferences
    Show,
    /// Change preferences; flags not given keep their stored value
    Set {
        #[arg(long)]
        new_submissions: Option<bool>,
        #[arg(long)]
        status_changes: Option<bool>,
        #[arg(long)]
        system_errors: Option<bool>,
        #[arg(long)]
        security_alerts: Option<bool>,
        #[arg(long)]
        user_activity: Option<bool>,
        #[arg(long)]
        backups: Option<bool>,
        #[arg(long, value_enum)]
        digest: Option<DigestArg>,
    },
}

/// Execute preference commands
pub async fn execute(
    args: &PrefsArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::connect(config).await?;
    let admin = super::find_admin(&db, &args.admin).await?;
    let inbox = super::build_inbox(&db);

    let preferences = match &args.command {
        PrefsCommand::Show => inbox.get_preferences(admin.id).await?,
        PrefsCommand::Set {
            new_submissions,
            status_changes,
            system_errors,
            security_alerts,
            user_activity,
            backups,
            digest,
        } => {
            let patch = AdminNotificationPreferences {
                email_new_submissions: *new_submissions,
                email_status_changes: *status_changes,
                email_system_errors: *system_errors,
                email_security_alerts: *security_alerts,
                email_user_activity: *user_activity,
                email_backups: *backups,
                digest_mode: digest.map(DigestMode::from),
            };
            let updated = inbox.update_preferences(admin.id, &patch).await?;
            if format == OutputFormat::Table {
                output::print_success(&format!("Preferences updated for {}", args.admin));
            }
            updated
        }
    };

    db.close().await;

    match format {
        OutputFormat::Json => output::print_json(&preferences),
        OutputFormat::Table => print_preferences(&preferences),
    }
    Ok(())
}

fn print_preferences(p: &AdminNotificationPreferences) {
    fn flag(value: Option<bool>) -> &'static str {
        match value {
            Some(true) => "on",
            Some(false) => "off",
            None => "on (default)",
        }
    }

    output::print_kv("New submissions", flag(p.email_new_submissions));
    output::print_kv("Status changes", flag(p.email_status_changes));
    output::print_kv("System errors", flag(p.email_system_errors));
    output::print_kv("Security alerts", flag(p.email_security_alerts));
    output::print_kv("User activity", flag(p.email_user_activity));
    output::print_kv("Backups", flag(p.email_backups));
    output::print_kv(
        "Digest",
        match p.digest_mode.unwrap_or_default() {
            DigestMode::Immediate => "immediate",
            DigestMode::Daily => "daily",
            DigestMode::Weekly => "weekly",
        },
    );
}
