//! Domain events that notify admins.
//!
//! Each payload maps to a [`NotificationEvent`] through a pure function so
//! the content can be checked without I/O. The `AdminNotifier` methods at
//! the bottom wire those events into the fan-out.

use serde::{Deserialize, Serialize};
use serde_json::json;

use ebic_entity::notification::{NotificationPriority, NotificationType};
use ebic_entity::user::{RequiredPermission, resources};

use super::event::NotificationEvent;
use super::fanout::{AdminNotifier, FanOutResult};

/// A collaborator company finished registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorRegistration {
    pub id: String,
    pub company_name: String,
    pub email: String,
    pub sector: String,
}

/// An innovator submitted a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InnovatorSubmission {
    pub id: String,
    pub name: String,
    pub project_title: String,
    pub email: String,
}

/// An unhandled error worth an admin's attention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemErrorReport {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

/// A security event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAlertReport {
    pub alert: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

/// Repeated failed logins for one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedLoginReport {
    pub email: String,
    pub attempts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

pub fn new_collaborator_event(payload: &CollaboratorRegistration) -> NotificationEvent {
    NotificationEvent::new(
        NotificationType::NewCollaborator,
        "New Collaborator Registration",
        format!(
            "A new collaborator \"{}\" from {} sector has registered.",
            payload.company_name, payload.sector
        ),
    )
    .with_priority(NotificationPriority::High)
    .requires(RequiredPermission::manage(resources::COLLABORATORS))
    .with_action_url(format!("/admin/collaborators?id={}", payload.id))
    .with_data(json!({
        "id": payload.id,
        "companyName": payload.company_name,
        "email": payload.email,
        "sector": payload.sector,
    }))
}

pub fn new_innovator_event(payload: &InnovatorSubmission) -> NotificationEvent {
    NotificationEvent::new(
        NotificationType::NewInnovator,
        "New Innovator Project Submission",
        format!(
            "{} has submitted a new project: \"{}\".",
            payload.name, payload.project_title
        ),
    )
    .with_priority(NotificationPriority::High)
    .requires(RequiredPermission::manage(resources::INNOVATORS))
    .with_action_url(format!("/admin/innovators?id={}", payload.id))
    .with_data(json!({
        "id": payload.id,
        "name": payload.name,
        "projectTitle": payload.project_title,
        "email": payload.email,
    }))
}

pub fn system_error_event(payload: &SystemErrorReport) -> NotificationEvent {
    let mut data = json!({ "error": payload.error });
    if let Some(context) = &payload.context {
        data["context"] = context.clone();
    }
    if let Some(stack) = &payload.stack_trace {
        data["stackTrace"] = json!(stack);
    }

    NotificationEvent::new(
        NotificationType::SystemError,
        "⚠️ System Error Detected",
        format!("An error occurred: {}", payload.error),
    )
    .with_priority(NotificationPriority::Urgent)
    .requires(RequiredPermission::manage(resources::DASHBOARD))
    .with_action_url("/admin/system/logs")
    .with_data(data)
}

pub fn security_alert_event(payload: &SecurityAlertReport) -> NotificationEvent {
    let mut data = json!({ "alert": payload.alert });
    if let Some(user_id) = &payload.user_id {
        data["userId"] = json!(user_id);
    }
    if let Some(ip) = &payload.ip_address {
        data["ipAddress"] = json!(ip);
    }

    NotificationEvent::new(
        NotificationType::SecurityAlert,
        "🔒 Security Alert",
        payload.alert.clone(),
    )
    .with_priority(NotificationPriority::Urgent)
    .requires(RequiredPermission::manage(resources::DASHBOARD))
    .with_action_url("/admin/security/alerts")
    .with_data(data)
}

pub fn failed_login_event(payload: &FailedLoginReport) -> NotificationEvent {
    let mut data = json!({ "email": payload.email, "attempts": payload.attempts });
    if let Some(ip) = &payload.ip_address {
        data["ipAddress"] = json!(ip);
    }

    NotificationEvent::new(
        NotificationType::FailedLoginAttempts,
        "🚨 Multiple Failed Login Attempts",
        format!(
            "{} failed login attempts detected for {}",
            payload.attempts, payload.email
        ),
    )
    .with_priority(NotificationPriority::High)
    .requires(RequiredPermission::manage(resources::DASHBOARD))
    .with_action_url("/admin/security/logins")
    .with_data(data)
}

impl AdminNotifier {
    /// Tell collaborator managers about a new registration.
    pub async fn notify_new_collaborator(&self, payload: &CollaboratorRegistration) -> FanOutResult {
        self.notify_admins(&new_collaborator_event(payload)).await
    }

    /// Tell innovator managers about a new project.
    pub async fn notify_new_innovator(&self, payload: &InnovatorSubmission) -> FanOutResult {
        self.notify_admins(&new_innovator_event(payload)).await
    }

    /// Tell dashboard managers about an unhandled error.
    pub async fn notify_system_error(&self, payload: &SystemErrorReport) -> FanOutResult {
        self.notify_admins(&system_error_event(payload)).await
    }

    pub async fn notify_security_alert(&self, payload: &SecurityAlertReport) -> FanOutResult {
        self.notify_admins(&security_alert_event(payload)).await
    }

    pub async fn notify_failed_login_attempts(&self, payload: &FailedLoginReport) -> FanOutResult {
        self.notify_admins(&failed_login_event(payload)).await
    }
}
