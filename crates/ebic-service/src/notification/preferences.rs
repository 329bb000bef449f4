//! Preference resolution.

use ebic_entity::notification::{AdminNotificationPreferences, NotificationType};

/// Whether an admin wants notifications of type `ty`.
///
/// A missing record, a missing flag and an ungated type all resolve to
/// enabled. Only an explicit `false` opts out.
pub fn is_category_enabled(
    preferences: Option<&AdminNotificationPreferences>,
    ty: &NotificationType,
) -> bool {
    let Some(category) = ty.preference_category() else {
        return true;
    };
    preferences
        .and_then(|p| p.flag(category))
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_record_enables_everything() {
        assert!(is_category_enabled(None, &NotificationType::SystemError));
        assert!(is_category_enabled(None, &NotificationType::NewCollaborator));
    }

    #[test]
    fn test_missing_flag_is_enabled() {
        let prefs = AdminNotificationPreferences {
            email_system_errors: Some(false),
            ..Default::default()
        };
        assert!(is_category_enabled(Some(&prefs), &NotificationType::NewInnovator));
        assert!(!is_category_enabled(Some(&prefs), &NotificationType::SystemError));
    }

    #[test]
    fn test_explicit_true() {
        let prefs = AdminNotificationPreferences {
            email_security_alerts: Some(true),
            ..Default::default()
        };
        assert!(is_category_enabled(Some(&prefs), &NotificationType::FailedLoginAttempts));
    }

    #[test]
    fn test_shared_flag_gates_every_mapped_type() {
        let prefs = AdminNotificationPreferences {
            email_new_submissions: Some(false),
            email_user_activity: Some(false),
            ..Default::default()
        };
        for ty in [
            NotificationType::NewRegistration,
            NotificationType::NewCollaborator,
            NotificationType::NewInnovator,
            NotificationType::UserAccountCreated,
            NotificationType::RoleChanged,
        ] {
            assert!(!is_category_enabled(Some(&prefs), &ty), "{ty}");
        }
        assert!(is_category_enabled(Some(&prefs), &NotificationType::SecurityAlert));
    }

    #[test]
    fn test_unmapped_type_is_never_gated() {
        let prefs = AdminNotificationPreferences {
            email_new_submissions: Some(false),
            email_status_changes: Some(false),
            email_system_errors: Some(false),
            email_security_alerts: Some(false),
            email_user_activity: Some(false),
            email_backups: Some(false),
            digest_mode: None,
        };
        let ty = NotificationType::Other("NEWSLETTER_SENT".to_string());
        assert!(is_category_enabled(Some(&prefs), &ty));
    }
}
