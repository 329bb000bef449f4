//! Email delivery service.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lettre::Message;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use tracing::{debug, info, warn};
use uuid::Uuid;

use ebic_core::config::EmailConfig;
use ebic_core::error::AppError;
use ebic_core::traits::{EmailMessage, Mailer, SendResult};
use ebic_entity::email::{EmailStatus, NewEmailLog};

use crate::log_sink::EmailLogSink;
use crate::transport::{EmailTransport, SmtpEmailTransport};

/// Template name logged for messages that do not carry one.
const CUSTOM_TEMPLATE: &str = "custom";

/// Error reported for every send when no relay is configured.
const NOT_CONFIGURED: &str = "Email transport not initialized";

/// Sends email through an [`EmailTransport`] and records every attempt.
///
/// `send_email` never fails: address errors, transport errors and
/// timeouts all come back as a failed [`SendResult`]. Without a transport
/// every send fails and nothing is logged.
pub struct EmailService {
    transport: Option<Arc<dyn EmailTransport>>,
    log_sink: Option<Arc<dyn EmailLogSink>>,
    from: String,
    timeout: Duration,
}

impl EmailService {
    /// Build the service from the `email` section.
    ///
    /// Uses SMTP whenever a relay host is configured; login is optional.
    /// Without a host the service is built unconfigured.
    pub fn from_config(config: &EmailConfig) -> Result<Self, AppError> {
        if !config.smtp.has_relay() {
            warn!("email.smtp.host is not set, emails will not be sent");
            return Ok(Self::unconfigured(config.from.clone()));
        }

        let transport = Arc::new(SmtpEmailTransport::from_config(&config.smtp)?);
        info!(
            transport = transport.name(),
            from = %config.from,
            "Email service initialized"
        );

        Ok(Self::with_transport(
            transport,
            config.from.clone(),
            config.smtp.timeout(),
        ))
    }

    /// A service with no transport. Every send reports a failure.
    pub fn unconfigured(from: impl Into<String>) -> Self {
        Self {
            transport: None,
            log_sink: None,
            from: from.into(),
            timeout: Duration::from_secs(1),
        }
    }

    /// Build the service around an explicit transport.
    pub fn with_transport(
        transport: Arc<dyn EmailTransport>,
        from: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport: Some(transport),
            log_sink: None,
            from: from.into(),
            timeout: timeout.max(Duration::from_secs(1)),
        }
    }

    /// Record attempts into `sink`.
    pub fn with_log_sink(mut self, sink: Arc<dyn EmailLogSink>) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Name of the active transport, `"none"` when unconfigured.
    pub fn transport_name(&self) -> &'static str {
        self.transport.as_ref().map_or("none", |t| t.name())
    }

    fn build_message(&self, email: &EmailMessage, from: &str, message_id: &str) -> Result<Message, String> {
        let from: Mailbox = from
            .parse()
            .map_err(|e| format!("Invalid sender address '{from}': {e}"))?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| format!("Invalid recipient address '{}': {e}", email.to))?;

        let builder = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone())
            .message_id(Some(message_id.to_string()));

        let built = match (&email.html, &email.text) {
            (Some(html), Some(text)) => {
                builder.multipart(MultiPart::alternative_plain_html(text.clone(), html.clone()))
            }
            (Some(html), None) => builder.singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_HTML)
                    .body(html.clone()),
            ),
            (None, Some(text)) => builder.singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_PLAIN)
                    .body(text.clone()),
            ),
            (None, None) => return Err("Email has neither an HTML nor a text body".to_string()),
        };

        built.map_err(|e| format!("Failed to build email: {e}"))
    }

    async fn deliver(
        &self,
        transport: &dyn EmailTransport,
        email: &EmailMessage,
        from: &str,
    ) -> SendResult {
        let message_id = format!("<{}@ebic>", Uuid::new_v4());
        let message = match self.build_message(email, from, &message_id) {
            Ok(m) => m,
            Err(e) => return SendResult::failed(e),
        };

        match tokio::time::timeout(self.timeout, transport.send(message)).await {
            Ok(Ok(())) => SendResult::sent(message_id),
            Ok(Err(e)) => SendResult::failed(e),
            Err(_) => SendResult::failed(format!(
                "Timed out after {}s",
                self.timeout.as_secs()
            )),
        }
    }

    async fn record(&self, email: &EmailMessage, from: &str, result: &SendResult) {
        let Some(sink) = &self.log_sink else {
            return;
        };

        let entry = NewEmailLog {
            recipient: email.to.clone(),
            sender: from.to_string(),
            subject: email.subject.clone(),
            status: if result.success {
                EmailStatus::Sent
            } else {
                EmailStatus::Failed
            },
            message_id: result.message_id.clone(),
            error_message: result.error.clone(),
            template: email
                .template
                .clone()
                .unwrap_or_else(|| CUSTOM_TEMPLATE.to_string()),
        };

        if let Err(e) = sink.record(entry).await {
            warn!(to = %email.to, error = %e, "Failed to record email log");
        }
    }
}

#[async_trait]
impl Mailer for EmailService {
    async fn send_email(&self, message: EmailMessage) -> SendResult {
        let Some(transport) = &self.transport else {
            warn!(to = %message.to, subject = %message.subject, "{NOT_CONFIGURED}");
            return SendResult::failed(NOT_CONFIGURED);
        };

        let from = message.from.clone().unwrap_or_else(|| self.from.clone());
        let result = self.deliver(transport.as_ref(), &message, &from).await;

        if result.success {
            debug!(to = %message.to, subject = %message.subject, "Email sent");
        } else {
            warn!(
                to = %message.to,
                subject = %message.subject,
                error = result.error.as_deref().unwrap_or_default(),
                "Email delivery failed"
            );
        }

        self.record(&message, &from, &result).await;
        result
    }
}

impl std::fmt::Debug for EmailService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailService")
            .field("transport", &self.transport_name())
            .field("from", &self.from)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use ebic_core::result::AppResult;

    #[derive(Default)]
    struct MockTransport {
        sent: Mutex<Vec<Message>>,
        fail_with: Mutex<Option<String>>,
        hang: AtomicBool,
    }

    #[async_trait]
    impl EmailTransport for MockTransport {
        async fn send(&self, message: Message) -> Result<(), String> {
            if self.hang.load(Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
            if let Some(err) = self.fail_with.lock().unwrap().clone() {
                return Err(err);
            }
            self.sent.lock().unwrap().push(message);
            Ok(())
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        entries: Mutex<Vec<NewEmailLog>>,
        broken: bool,
    }

    #[async_trait]
    impl EmailLogSink for RecordingSink {
        async fn record(&self, entry: NewEmailLog) -> AppResult<()> {
            if self.broken {
                return Err(AppError::database("email_logs unavailable"));
            }
            self.entries.lock().unwrap().push(entry);
            Ok(())
        }
    }

    fn service(transport: Arc<MockTransport>, sink: Arc<RecordingSink>) -> EmailService {
        EmailService::with_transport(transport, "ebic@cit.edu.ly", Duration::from_secs(5))
            .with_log_sink(sink)
    }

    #[tokio::test]
    async fn test_successful_send_is_logged() {
        let transport = Arc::new(MockTransport::default());
        let sink = Arc::new(RecordingSink::default());
        let svc = service(transport.clone(), sink.clone());

        let result = svc
            .send_email(EmailMessage::html("admin@cit.edu.ly", "Hi", "<p>Hi</p>").with_text("Hi"))
            .await;

        assert!(result.success);
        assert!(result.message_id.is_some());
        assert_eq!(transport.sent.lock().unwrap().len(), 1);

        let entries = sink.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, EmailStatus::Sent);
        assert_eq!(entries[0].sender, "ebic@cit.edu.ly");
        assert_eq!(entries[0].template, "custom");
    }

    #[tokio::test]
    async fn test_transport_error_is_a_failed_result() {
        let transport = Arc::new(MockTransport::default());
        *transport.fail_with.lock().unwrap() = Some("550 mailbox unavailable".to_string());
        let sink = Arc::new(RecordingSink::default());
        let svc = service(transport, sink.clone());

        let result = svc
            .send_email(EmailMessage::html("admin@cit.edu.ly", "Hi", "<p>Hi</p>").with_template("admin_notification"))
            .await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("550 mailbox unavailable"));
        let entries = sink.entries.lock().unwrap();
        assert_eq!(entries[0].status, EmailStatus::Failed);
        assert_eq!(entries[0].template, "admin_notification");
    }

    #[tokio::test]
    async fn test_invalid_recipient_never_reaches_transport() {
        let transport = Arc::new(MockTransport::default());
        let svc = service(transport.clone(), Arc::new(RecordingSink::default()));

        let result = svc
            .send_email(EmailMessage::html("not an address", "Hi", "<p>Hi</p>"))
            .await;

        assert!(!result.success);
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_a_failed_result() {
        let transport = Arc::new(MockTransport::default());
        transport.hang.store(true, Ordering::SeqCst);
        let svc = service(transport, Arc::new(RecordingSink::default()));

        let result = svc
            .send_email(EmailMessage::html("admin@cit.edu.ly", "Hi", "<p>Hi</p>"))
            .await;

        assert!(!result.success);
        assert!(result.error.unwrap().contains("Timed out"));
    }

    #[tokio::test]
    async fn test_log_failure_does_not_change_result() {
        let transport = Arc::new(MockTransport::default());
        let sink = Arc::new(RecordingSink {
            broken: true,
            ..Default::default()
        });
        let svc = service(transport, sink);

        let result = svc
            .send_email(EmailMessage::html("admin@cit.edu.ly", "Hi", "<p>Hi</p>"))
            .await;
        assert!(result.success);
    }

    #[tokio::test]
    async fn test_without_relay_every_send_fails_unlogged() {
        let sink = Arc::new(RecordingSink::default());
        let svc = EmailService::from_config(&EmailConfig::default())
            .unwrap()
            .with_log_sink(sink.clone());
        assert_eq!(svc.transport_name(), "none");

        let result = svc
            .send_email(EmailMessage::html("admin@cit.edu.ly", "Hi", "<p>Hi</p>"))
            .await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Email transport not initialized"));
        assert!(sink.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_relay_host_without_login_uses_smtp() {
        let mut config = EmailConfig::default();
        config.smtp.host = Some("mail.internal".to_string());
        config.smtp.port = 25;
        config.smtp.tls = "none".to_string();

        let svc = EmailService::from_config(&config).unwrap();
        assert_eq!(svc.transport_name(), "smtp");
    }

    #[tokio::test]
    async fn test_zero_timeout_is_raised_to_one_second() {
        let mut config = EmailConfig::default();
        config.smtp.host = Some("mail.internal".to_string());
        config.smtp.tls = "none".to_string();
        config.smtp.timeout_seconds = 0;
        let svc = EmailService::from_config(&config).unwrap();
        assert_eq!(svc.timeout, Duration::from_secs(1));

        let transport = Arc::new(MockTransport::default());
        let svc = EmailService::with_transport(transport.clone(), "ebic@cit.edu.ly", Duration::ZERO);
        let result = svc
            .send_email(EmailMessage::html("admin@cit.edu.ly", "Hi", "<p>Hi</p>"))
            .await;
        assert!(result.success);
        assert_eq!(transport.sent.lock().unwrap().len(), 1);
    }
}
