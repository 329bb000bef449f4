//! Admin notification fan-out.
//!
//! One event becomes one inbox row per eligible admin plus a best-effort
//! email. Persistence decides the outcome: an admin counts as `sent` once
//! the row is stored, whatever happens to the email afterwards.

use std::sync::Arc;

use futures::StreamExt;
use futures::stream;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use ebic_core::config::NotificationsConfig;
use ebic_core::traits::Mailer;
use ebic_entity::user::AdminUser;
use ebic_mail::{AdminEmailContent, AdminEmailRenderer};

use super::event::NotificationEvent;
use super::rules::NotificationRules;
use super::store::{AdminDirectory, NotificationSink};

/// Aggregate outcome of one fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanOutResult {
    /// Admins whose inbox row was stored.
    pub sent: usize,
    /// Admins whose row could not be stored, or `1` when the candidate
    /// list itself could not be loaded.
    pub failed: usize,
}

impl FanOutResult {
    /// Whether nothing failed.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// What happened for one admin.
#[derive(Debug)]
enum Outcome {
    Sent,
    Failed,
    Skipped,
}

/// Fans notification events out to eligible admins.
pub struct AdminNotifier {
    directory: Arc<dyn AdminDirectory>,
    sink: Arc<dyn NotificationSink>,
    mailer: Arc<dyn Mailer>,
    renderer: Arc<AdminEmailRenderer>,
    rules: NotificationRules,
    email_enabled: bool,
    max_concurrency: usize,
}

impl AdminNotifier {
    /// Create a notifier with email enabled and the default concurrency.
    pub fn new(
        directory: Arc<dyn AdminDirectory>,
        sink: Arc<dyn NotificationSink>,
        mailer: Arc<dyn Mailer>,
        renderer: Arc<AdminEmailRenderer>,
        rules: NotificationRules,
    ) -> Self {
        let defaults = NotificationsConfig::default();
        Self {
            directory,
            sink,
            mailer,
            renderer,
            rules,
            email_enabled: defaults.email_enabled,
            max_concurrency: defaults.max_concurrency,
        }
    }

    /// Apply the `notifications` section.
    pub fn with_settings(mut self, config: &NotificationsConfig) -> Self {
        self.email_enabled = config.email_enabled;
        self.max_concurrency = config.max_concurrency.max(1);
        self
    }

    /// Deliver `event` to every eligible admin.
    ///
    /// Never fails. Ineligible admins are in neither count. A failure to
    /// load the candidates is reported as `{ sent: 0, failed: 1 }`.
    pub async fn notify_admins(&self, event: &NotificationEvent) -> FanOutResult {
        let admins = match self.directory.find_active_admins().await {
            Ok(admins) => admins,
            Err(e) => {
                error!(
                    event_type = %event.notification_type,
                    error = %e,
                    "Failed to load admins for notification"
                );
                return FanOutResult { sent: 0, failed: 1 };
            }
        };

        if admins.is_empty() {
            warn!(event_type = %event.notification_type, "No active admins to notify");
            return FanOutResult::default();
        }

        let outcomes: Vec<Outcome> = stream::iter(admins.iter())
            .map(|admin| self.notify_one(admin, event))
            .buffer_unordered(self.max_concurrency.max(1))
            .collect()
            .await;

        let result = outcomes
            .iter()
            .fold(FanOutResult::default(), |mut acc, outcome| {
                match outcome {
                    Outcome::Sent => acc.sent += 1,
                    Outcome::Failed => acc.failed += 1,
                    Outcome::Skipped => {}
                }
                acc
            });
        let skipped = outcomes.len() - result.sent - result.failed;

        info!(
            event_type = %event.notification_type,
            candidates = admins.len(),
            skipped,
            sent = result.sent,
            failed = result.failed,
            "Admin notification fan-out complete"
        );

        result
    }

    async fn notify_one(&self, admin: &AdminUser, event: &NotificationEvent) -> Outcome {
        if let Err(reason) = self.rules.check(admin, event) {
            debug!(admin_id = %admin.id, reason = %reason, "Skipping admin");
            return Outcome::Skipped;
        }

        if let Err(e) = self
            .sink
            .create_admin_notification(event.to_row(admin.id))
            .await
        {
            error!(
                admin_id = %admin.id,
                event_type = %event.notification_type,
                error = %e,
                "Failed to store admin notification"
            );
            return Outcome::Failed;
        }

        self.send_email(admin, event).await;
        Outcome::Sent
    }

    /// Best-effort email. Every failure is logged and dropped.
    async fn send_email(&self, admin: &AdminUser, event: &NotificationEvent) {
        if !self.email_enabled {
            return;
        }
        let Some(to) = admin.email.as_deref().filter(|e| !e.is_empty()) else {
            debug!(admin_id = %admin.id, "Admin has no email address");
            return;
        };

        let name = admin.display_name();
        let content = AdminEmailContent {
            recipient_name: &name,
            title: &event.title,
            message: &event.message,
            priority: event.priority,
            action_url: event.action_url.as_deref(),
        };
        let message = match self.renderer.render(to, &content) {
            Ok(m) => m,
            Err(e) => {
                warn!(admin_id = %admin.id, error = %e, "Failed to render notification email");
                return;
            }
        };

        let result = self.mailer.send_email(message).await;
        if !result.success {
            warn!(
                admin_id = %admin.id,
                error = result.error.as_deref().unwrap_or_default(),
                "Notification email not delivered"
            );
        }
    }
}

impl std::fmt::Debug for AdminNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminNotifier")
            .field("rules", &self.rules)
            .field("email_enabled", &self.email_enabled)
            .field("max_concurrency", &self.max_concurrency)
            .finish()
    }
}
