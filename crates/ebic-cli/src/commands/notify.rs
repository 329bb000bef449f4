//! Fire admin notification events by hand.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use ebic_core::config::AppConfig;
use ebic_core::error::AppError;
use ebic_entity::notification::{NotificationPriority, NotificationType};
use ebic_entity::user::RequiredPermission;
use ebic_service::notification::{
    CollaboratorRegistration, FailedLoginReport, InnovatorSubmission, SecurityAlertReport,
    SystemErrorReport,
};
use ebic_service::{FanOutResult, NotificationEvent};

/// Arguments for notify commands
#[derive(Debug, Args)]
pub struct NotifyArgs {
    /// Event to fire
    #[command(subcommand)]
    pub command: NotifyCommand,
}

/// Notify subcommands
#[derive(Debug, Subcommand)]
pub enum NotifyCommand {
    /// A collaborator company registered
    Collaborator {
        #[arg(long)]
        id: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        sector: String,
    },
    /// An innovator submitted a project
    Innovator {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        project: String,
        #[arg(long)]
        email: String,
    },
    /// An unhandled error occurred
    SystemError {
        /// Error description
        error: String,
        /// Extra context as a JSON object
        #[arg(long)]
        context: Option<String>,
        #[arg(long)]
        stack_trace: Option<String>,
    },
    /// A security event needs attention
    SecurityAlert {
        /// Alert text
        alert: String,
        #[arg(long)]
        user_id: Option<String>,
        #[arg(long)]
        ip: Option<String>,
    },
    /// Repeated failed logins for one account
    FailedLogins {
        #[arg(long)]
        email: String,
        #[arg(long)]
        attempts: u32,
        #[arg(long)]
        ip: Option<String>,
    },
    /// Any event type, built from flags
    Custom {
        /// Type name, e.g. DATABASE_BACKUP_COMPLETE
        #[arg(long = "type")]
        notification_type: NotificationType,
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value = "NORMAL")]
        priority: NotificationPriority,
        /// Required grant as resource:action
        #[arg(long)]
        permission: Option<RequiredPermission>,
        #[arg(long)]
        url: Option<String>,
        /// Payload as a JSON object
        #[arg(long)]
        data: Option<String>,
    },
}

/// Execute notify commands
pub async fn execute(
    args: &NotifyArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::connect(config).await?;
    let notifier = super::build_notifier(config, &db)?;

    let result = match &args.command {
        NotifyCommand::Collaborator {
            id,
            company,
            email,
            sector,
        } => {
            notifier
                .notify_new_collaborator(&CollaboratorRegistration {
                    id: id.clone(),
                    company_name: company.clone(),
                    email: email.clone(),
                    sector: sector.clone(),
                })
                .await
        }
        NotifyCommand::Innovator {
            id,
            name,
            project,
            email,
        } => {
            notifier
                .notify_new_innovator(&InnovatorSubmission {
                    id: id.clone(),
                    name: name.clone(),
                    project_title: project.clone(),
                    email: email.clone(),
                })
                .await
        }
        NotifyCommand::SystemError {
            error,
            context,
            stack_trace,
        } => {
            let context = context
                .as_deref()
                .map(serde_json::from_str::<serde_json::Value>)
                .transpose()?;
            notifier
                .notify_system_error(&SystemErrorReport {
                    error: error.clone(),
                    context,
                    stack_trace: stack_trace.clone(),
                })
                .await
        }
        NotifyCommand::SecurityAlert { alert, user_id, ip } => {
            notifier
                .notify_security_alert(&SecurityAlertReport {
                    alert: alert.clone(),
                    user_id: user_id.clone(),
                    ip_address: ip.clone(),
                })
                .await
        }
        NotifyCommand::FailedLogins {
            email,
            attempts,
            ip,
        } => {
            notifier
                .notify_failed_login_attempts(&FailedLoginReport {
                    email: email.clone(),
                    attempts: *attempts,
                    ip_address: ip.clone(),
                })
                .await
        }
        NotifyCommand::Custom {
            notification_type,
            title,
            message,
            priority,
            permission,
            url,
            data,
        } => {
            let mut event = NotificationEvent::new(notification_type.clone(), title, message)
                .with_priority(*priority);
            if let Some(permission) = permission {
                event = event.requires(permission.clone());
            }
            if let Some(url) = url {
                event = event.with_action_url(url);
            }
            if let Some(data) = data {
                event = event.with_data(serde_json::from_str(data)?);
            }
            notifier.notify_admins(&event).await
        }
    };

    db.close().await;
    print_result(&result, format);
    Ok(())
}

fn print_result(result: &FanOutResult, format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_json(result),
        OutputFormat::Table => {
            if result.is_complete() {
                output::print_success("Notification fan-out complete");
            } else {
                output::print_warning("Notification fan-out finished with failures");
            }
            output::print_kv("Sent", &result.sent.to_string());
            output::print_kv("Failed", &result.failed.to_string());
        }
    }
}
