//! Email transports.
//!
//! [`EmailTransport`] is the seam between [`EmailService`](crate::EmailService)
//! and the wire. Production uses [`SmtpEmailTransport`].

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use ebic_core::config::SmtpConfig;
use ebic_core::error::AppError;

/// Delivers fully built messages.
#[async_trait]
pub trait EmailTransport: Send + Sync + 'static {
    /// Send one message. The error is a human-readable description.
    async fn send(&self, message: Message) -> Result<(), String>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// SMTP relay transport backed by `lettre`.
pub struct SmtpEmailTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailTransport {
    /// Build a relay transport from the SMTP settings.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, AppError> {
        let host = config
            .host
            .as_deref()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| AppError::configuration("email.smtp.host is not set"))?;

        let builder = match config.tls.to_lowercase().as_str() {
            "none" => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host),
            "starttls" => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                .map_err(|e| AppError::configuration(format!("Invalid SMTP relay '{host}': {e}")))?,
            "tls" => AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .map_err(|e| AppError::configuration(format!("Invalid SMTP relay '{host}': {e}")))?,
            other => {
                return Err(AppError::configuration(format!(
                    "Invalid email.smtp.tls '{other}'. Expected one of: none, starttls, tls"
                )));
            }
        };

        let builder = builder
            .port(config.port)
            .timeout(Some(config.timeout()));

        let builder = match (&config.username, &config.password) {
            (Some(user), Some(pass)) => builder.credentials(Credentials::new(user.clone(), pass.clone())),
            (None, None) => builder,
            _ => {
                return Err(AppError::configuration(
                    "email.smtp.username and email.smtp.password must be set together",
                ));
            }
        };

        Ok(Self {
            inner: builder.build(),
        })
    }
}

#[async_trait]
impl EmailTransport for SmtpEmailTransport {
    async fn send(&self, message: Message) -> Result<(), String> {
        self.inner
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}
