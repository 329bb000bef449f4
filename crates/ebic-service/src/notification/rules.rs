//! Recipient eligibility rules: decides which admins receive an event.

use std::fmt;

use ebic_auth::RbacEnforcer;
use ebic_entity::notification::PreferenceCategory;
use ebic_entity::user::{AdminUser, RequiredPermission};

use super::event::NotificationEvent;
use super::preferences::is_category_enabled;

/// Why an admin was left out of a fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The account is disabled.
    Inactive,
    /// The admin's role does not grant the event's permission.
    MissingPermission(RequiredPermission),
    /// The admin opted out of this category.
    OptedOut(PreferenceCategory),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => write!(f, "inactive"),
            Self::MissingPermission(p) => write!(f, "missing permission {p}"),
            Self::OptedOut(c) => write!(f, "opted out of {c:?}"),
        }
    }
}

/// Evaluates the eligibility of admins for an event.
#[derive(Debug, Clone, Default)]
pub struct NotificationRules {
    enforcer: RbacEnforcer,
}

impl NotificationRules {
    /// Creates a new rules engine.
    pub fn new(enforcer: RbacEnforcer) -> Self {
        Self { enforcer }
    }

    /// `Ok(())` if `admin` should receive `event`. Checks are applied in
    /// order: active flag, permission, preference.
    pub fn check(&self, admin: &AdminUser, event: &NotificationEvent) -> Result<(), SkipReason> {
        if !admin.is_active {
            return Err(SkipReason::Inactive);
        }

        if let Some(required) = &event.required_permission {
            if !self.enforcer.satisfies(admin, required) {
                return Err(SkipReason::MissingPermission(required.clone()));
            }
        }

        let Some(category) = event.notification_type.preference_category() else {
            return Ok(());
        };
        if !is_category_enabled(
            admin.notification_preferences.as_ref(),
            &event.notification_type,
        ) {
            return Err(SkipReason::OptedOut(category));
        }

        Ok(())
    }
}
