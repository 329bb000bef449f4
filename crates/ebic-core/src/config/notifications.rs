//! Admin notification fan-out configuration.

use serde::{Deserialize, Serialize};

/// Settings for the admin notification fan-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Whether notification emails are sent at all. Rows are persisted
    /// either way.
    #[serde(default = "default_true")]
    pub email_enabled: bool,
    /// Maximum number of admins processed concurrently per event.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Prefix prepended to every admin email subject.
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            email_enabled: true,
            max_concurrency: default_max_concurrency(),
            subject_prefix: default_subject_prefix(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_concurrency() -> usize {
    8
}

fn default_subject_prefix() -> String {
    "[EBIC Admin]".to_string()
}
