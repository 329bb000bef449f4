//! Admin notification preference record.

use serde::{Deserialize, Serialize};

use super::kind::PreferenceCategory;

/// How often an admin wants notification emails batched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestMode {
    /// One email per event.
    #[default]
    Immediate,
    /// One summary per day.
    Daily,
    /// One summary per week.
    Weekly,
}

/// Per-admin email overrides, stored as a JSON object on the user row.
///
/// Every flag is optional; an absent flag means "enabled".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminNotificationPreferences {
    /// New collaborator/innovator registrations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_new_submissions: Option<bool>,
    /// Submission approvals and rejections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_status_changes: Option<bool>,
    /// Unhandled server errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_system_errors: Option<bool>,
    /// Security alerts and failed-login bursts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_security_alerts: Option<bool>,
    /// Account creation and role changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_user_activity: Option<bool>,
    /// Backup completion reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_backups: Option<bool>,
    /// Batching mode. Stored but not yet honoured: every mode delivers
    /// immediately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest_mode: Option<DigestMode>,
}

impl AdminNotificationPreferences {
    /// The explicit flag stored for a category, if any.
    pub fn flag(&self, category: PreferenceCategory) -> Option<bool> {
        match category {
            PreferenceCategory::NewSubmissions => self.email_new_submissions,
            PreferenceCategory::StatusChanges => self.email_status_changes,
            PreferenceCategory::SystemErrors => self.email_system_errors,
            PreferenceCategory::SecurityAlerts => self.email_security_alerts,
            PreferenceCategory::UserActivity => self.email_user_activity,
            PreferenceCategory::Backups => self.email_backups,
        }
    }

    /// Overlay every field set in `patch` onto `self`.
    pub fn merge(&mut self, patch: &AdminNotificationPreferences) {
        fn take<T: Copy>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        take(&mut self.email_new_submissions, patch.email_new_submissions);
        take(&mut self.email_status_changes, patch.email_status_changes);
        take(&mut self.email_system_errors, patch.email_system_errors);
        take(&mut self.email_security_alerts, patch.email_security_alerts);
        take(&mut self.email_user_activity, patch.email_user_activity);
        take(&mut self.email_backups, patch.email_backups);
        take(&mut self.digest_mode, patch.digest_mode);
    }
}
