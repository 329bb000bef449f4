//! Outbound email configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Email delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Default sender address.
    #[serde(default = "default_from")]
    pub from: String,
    /// Public base URL used to turn relative action links into absolute ones.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Default locale for rendered templates: `"en"` or `"ar"`.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// SMTP relay settings. Without a host no email is delivered and every
    /// send reports a failure.
    #[serde(default)]
    pub smtp: SmtpConfig,
}

/// SMTP relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// Relay hostname.
    #[serde(default)]
    pub host: Option<String>,
    /// Relay port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Login name.
    #[serde(default)]
    pub username: Option<String>,
    /// Login password.
    #[serde(default)]
    pub password: Option<String>,
    /// TLS mode: `"none"`, `"starttls"` or `"tls"`.
    #[serde(default = "default_tls")]
    pub tls: String,
    /// Per-message send timeout in seconds. Zero is treated as one.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl SmtpConfig {
    /// Whether a relay host is configured. Authentication is optional.
    pub fn has_relay(&self) -> bool {
        self.host.as_deref().is_some_and(|h| !h.is_empty())
    }

    /// Send timeout, never shorter than one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            from: default_from(),
            base_url: default_base_url(),
            locale: default_locale(),
            smtp: SmtpConfig::default(),
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: default_port(),
            username: None,
            password: None,
            tls: default_tls(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_from() -> String {
    "ebic@cit.edu.ly".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_port() -> u16 {
    587
}

fn default_tls() -> String {
    "starttls".to_string()
}

fn default_timeout() -> u64 {
    30
}
