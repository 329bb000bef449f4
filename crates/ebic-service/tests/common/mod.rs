//! Shared in-memory fakes for fan-out tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use ebic_core::config::NotificationsConfig;
use ebic_core::error::AppError;
use ebic_core::result::AppResult;
use ebic_core::traits::{EmailMessage, Locale, Mailer, SendResult};
use ebic_entity::notification::{
    AdminNotification, AdminNotificationPreferences, NewAdminNotification,
};
use ebic_entity::user::{AdminUser, Permission};
use ebic_mail::AdminEmailRenderer;
use ebic_service::{AdminDirectory, AdminNotifier, NotificationRules, NotificationSink};

/// Admin directory backed by a fixed list.
#[derive(Default)]
pub struct FakeDirectory {
    pub admins: Vec<AdminUser>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl AdminDirectory for FakeDirectory {
    async fn find_active_admins(&self) -> AppResult<Vec<AdminUser>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::database("connection refused"));
        }
        Ok(self.admins.iter().filter(|a| a.is_active).cloned().collect())
    }
}

/// Records every insert attempt; fails for the listed users.
#[derive(Default)]
pub struct FakeSink {
    pub attempts: Mutex<Vec<NewAdminNotification>>,
    pub stored: Mutex<Vec<AdminNotification>>,
    pub fail_for: HashSet<Uuid>,
}

impl FakeSink {
    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }

    pub fn stored(&self) -> Vec<AdminNotification> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for FakeSink {
    async fn create_admin_notification(
        &self,
        row: NewAdminNotification,
    ) -> AppResult<AdminNotification> {
        self.attempts.lock().unwrap().push(row.clone());
        if self.fail_for.contains(&row.user_id) {
            return Err(AppError::database("insert failed"));
        }
        let stored = AdminNotification {
            id: Uuid::new_v4(),
            user_id: row.user_id,
            notification_type: row.notification_type.as_str().to_string(),
            title: row.title,
            message: row.message,
            priority: row.priority,
            action_url: row.action_url,
            data: row.data,
            is_read: false,
            read_at: None,
            created_at: Utc::now(),
        };
        self.stored.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

/// Records every message; reports failure when `fail` is set.
#[derive(Default)]
pub struct FakeMailer {
    pub sent: Mutex<Vec<EmailMessage>>,
    pub fail: bool,
}

impl FakeMailer {
    pub fn recipients(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|m| m.to.clone()).collect()
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn send_email(&self, message: EmailMessage) -> SendResult {
        self.sent.lock().unwrap().push(message);
        if self.fail {
            SendResult::failed("smtp unreachable")
        } else {
            SendResult::sent("test-id")
        }
    }
}

/// Build an active admin holding `grants`.
pub fn admin(email: &str, grants: &[(&str, &str)]) -> AdminUser {
    AdminUser {
        id: Uuid::new_v4(),
        name: Some(email.split('@').next().unwrap_or("admin").to_string()),
        email: Some(email.to_string()),
        is_active: true,
        role_name: Some("admin".to_string()),
        permissions: grants.iter().map(|(r, a)| Permission::new(*r, *a)).collect(),
        notification_preferences: None,
    }
}

/// `admin` with a preference record.
pub fn admin_with_prefs(
    email: &str,
    grants: &[(&str, &str)],
    prefs: AdminNotificationPreferences,
) -> AdminUser {
    AdminUser {
        notification_preferences: Some(prefs),
        ..admin(email, grants)
    }
}

/// A notifier wired to fakes.
pub struct TestNotifier {
    pub directory: Arc<FakeDirectory>,
    pub sink: Arc<FakeSink>,
    pub mailer: Arc<FakeMailer>,
    pub notifier: AdminNotifier,
}

impl TestNotifier {
    pub fn new(admins: Vec<AdminUser>) -> Self {
        Self::build(
            FakeDirectory {
                admins,
                ..Default::default()
            },
            FakeSink::default(),
            FakeMailer::default(),
            NotificationsConfig::default(),
        )
    }

    pub fn build(
        directory: FakeDirectory,
        sink: FakeSink,
        mailer: FakeMailer,
        config: NotificationsConfig,
    ) -> Self {
        let directory = Arc::new(directory);
        let sink = Arc::new(sink);
        let mailer = Arc::new(mailer);
        let renderer = Arc::new(
            AdminEmailRenderer::new(Locale::En, "http://localhost:3000", "[EBIC Admin]")
                .expect("templates parse"),
        );
        let notifier = AdminNotifier::new(
            directory.clone(),
            sink.clone(),
            mailer.clone(),
            renderer,
            NotificationRules::default(),
        )
        .with_settings(&config);

        Self {
            directory,
            sink,
            mailer,
            notifier,
        }
    }
}
