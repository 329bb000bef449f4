//! Mail delivery abstraction.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Template language for outgoing mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, left-to-right.
    #[default]
    En,
    /// Arabic, right-to-left.
    Ar,
}

impl Locale {
    /// Return the locale code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Whether text in this locale is laid out right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::Ar)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = crate::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            _ => Err(crate::AppError::validation(format!(
                "Invalid locale: '{s}'. Expected one of: en, ar"
            ))),
        }
    }
}

/// A single outgoing email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: Option<String>,
    /// Plain-text body.
    pub text: Option<String>,
    /// Sender override; the service default is used when absent.
    pub from: Option<String>,
    /// Template name recorded in the email log.
    pub template: Option<String>,
}

impl EmailMessage {
    /// Create a message with an HTML body.
    pub fn html(to: impl Into<String>, subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html: Some(html.into()),
            text: None,
            from: None,
            template: None,
        }
    }

    /// Attach a plain-text alternative.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Record which template produced this message.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// Outcome of a delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    /// Whether the transport accepted the message.
    pub success: bool,
    /// Transport-assigned message id.
    pub message_id: Option<String>,
    /// Failure description.
    pub error: Option<String>,
}

impl SendResult {
    /// A successful delivery.
    pub fn sent(message_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message_id: Some(message_id.into()),
            error: None,
        }
    }

    /// A failed delivery.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error.into()),
        }
    }
}

/// Sends email on behalf of the application.
///
/// Implementations never return an error: every failure, including
/// timeouts, is reported as a [`SendResult`] with `success == false`.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Deliver a single message.
    async fn send_email(&self, message: EmailMessage) -> SendResult;
}
