//! Email log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// Delivery status recorded for an email attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "email_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum EmailStatus {
    /// The transport accepted the message.
    Sent,
    /// The transport rejected the message or was unreachable.
    Failed,
}

impl fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent => write!(f, "SENT"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// One recorded email attempt.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmailLog {
    /// Unique log identifier.
    pub id: Uuid,
    /// Recipient address.
    pub recipient: String,
    /// Sender address.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Delivery status.
    pub status: EmailStatus,
    /// Transport message id, when sent.
    pub message_id: Option<String>,
    /// Failure description, when failed.
    pub error_message: Option<String>,
    /// Template that produced the message.
    pub template: String,
    /// When the attempt was made.
    pub created_at: DateTime<Utc>,
}

/// Data required to record an email attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmailLog {
    /// Recipient address.
    pub recipient: String,
    /// Sender address.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Delivery status.
    pub status: EmailStatus,
    /// Transport message id.
    pub message_id: Option<String>,
    /// Failure description.
    pub error_message: Option<String>,
    /// Template name.
    pub template: String,
}
