//! Notification type enumeration and its preference category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of event a notification reports.
///
/// Stored as its uppercase name. Names the back office does not know are
/// kept verbatim in [`NotificationType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationType {
    /// Generic new registration.
    NewRegistration,
    /// A collaborator company registered.
    NewCollaborator,
    /// An innovator submitted a project.
    NewInnovator,
    /// A submission was approved.
    SubmissionApproved,
    /// A submission was rejected.
    SubmissionRejected,
    /// An unhandled server error.
    SystemError,
    /// A security event needing attention.
    SecurityAlert,
    /// A back-office account was created.
    UserAccountCreated,
    /// A user's role changed.
    RoleChanged,
    /// A scheduled database backup finished.
    DatabaseBackupComplete,
    /// Repeated failed logins for one account.
    FailedLoginAttempts,
    /// Any other type name.
    Other(String),
}

/// Preference flag that gates email for a group of notification types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreferenceCategory {
    /// `emailNewSubmissions`
    NewSubmissions,
    /// `emailStatusChanges`
    StatusChanges,
    /// `emailSystemErrors`
    SystemErrors,
    /// `emailSecurityAlerts`
    SecurityAlerts,
    /// `emailUserActivity`
    UserActivity,
    /// `emailBackups`
    Backups,
}

impl NotificationType {
    /// Return the stored type name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NewRegistration => "NEW_REGISTRATION",
            Self::NewCollaborator => "NEW_COLLABORATOR",
            Self::NewInnovator => "NEW_INNOVATOR",
            Self::SubmissionApproved => "SUBMISSION_APPROVED",
            Self::SubmissionRejected => "SUBMISSION_REJECTED",
            Self::SystemError => "SYSTEM_ERROR",
            Self::SecurityAlert => "SECURITY_ALERT",
            Self::UserAccountCreated => "USER_ACCOUNT_CREATED",
            Self::RoleChanged => "ROLE_CHANGED",
            Self::DatabaseBackupComplete => "DATABASE_BACKUP_COMPLETE",
            Self::FailedLoginAttempts => "FAILED_LOGIN_ATTEMPTS",
            Self::Other(name) => name,
        }
    }

    /// The preference category that gates this type, if any.
    pub fn preference_category(&self) -> Option<PreferenceCategory> {
        match self {
            Self::NewRegistration | Self::NewCollaborator | Self::NewInnovator => {
                Some(PreferenceCategory::NewSubmissions)
            }
            Self::SubmissionApproved | Self::SubmissionRejected => {
                Some(PreferenceCategory::StatusChanges)
            }
            Self::SystemError => Some(PreferenceCategory::SystemErrors),
            Self::SecurityAlert | Self::FailedLoginAttempts => {
                Some(PreferenceCategory::SecurityAlerts)
            }
            Self::UserAccountCreated | Self::RoleChanged => Some(PreferenceCategory::UserActivity),
            Self::DatabaseBackupComplete => Some(PreferenceCategory::Backups),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for NotificationType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "NEW_REGISTRATION" => Self::NewRegistration,
            "NEW_COLLABORATOR" => Self::NewCollaborator,
            "NEW_INNOVATOR" => Self::NewInnovator,
            "SUBMISSION_APPROVED" => Self::SubmissionApproved,
            "SUBMISSION_REJECTED" => Self::SubmissionRejected,
            "SYSTEM_ERROR" => Self::SystemError,
            "SECURITY_ALERT" => Self::SecurityAlert,
            "USER_ACCOUNT_CREATED" => Self::UserAccountCreated,
            "ROLE_CHANGED" => Self::RoleChanged,
            "DATABASE_BACKUP_COMPLETE" => Self::DatabaseBackupComplete,
            "FAILED_LOGIN_ATTEMPTS" => Self::FailedLoginAttempts,
            _ => Self::Other(value),
        }
    }
}

impl From<NotificationType> for String {
    fn from(value: NotificationType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for NotificationType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        assert_eq!(
            NotificationType::NewCollaborator.preference_category(),
            Some(PreferenceCategory::NewSubmissions)
        );
        assert_eq!(
            NotificationType::FailedLoginAttempts.preference_category(),
            Some(PreferenceCategory::SecurityAlerts)
        );
        assert_eq!(
            NotificationType::SystemError.preference_category(),
            Some(PreferenceCategory::SystemErrors)
        );
        assert_eq!(
            NotificationType::Other("NEWSLETTER_SENT".into()).preference_category(),
            None
        );
    }

    #[test]
    fn test_string_roundtrip_keeps_unknown_names() {
        let known: NotificationType = "SECURITY_ALERT".parse().unwrap();
        assert_eq!(known, NotificationType::SecurityAlert);

        let unknown: NotificationType = "CUSTOM_THING".parse().unwrap();
        assert_eq!(unknown.as_str(), "CUSTOM_THING");
        assert_eq!(String::from(unknown), "CUSTOM_THING");
    }
}
