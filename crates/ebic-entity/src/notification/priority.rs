//! Notification priority levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority used for sorting and highlighting notifications.
///
/// Ordered: `Low < Normal < High < Urgent`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[sqlx(type_name = "notification_priority", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationPriority {
    /// Background information.
    Low,
    /// Standard events.
    #[default]
    Normal,
    /// Actionable submissions and repeated failed logins.
    High,
    /// System errors and security alerts.
    Urgent,
}

impl NotificationPriority {
    /// Return the priority as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }

    /// Badge colour used in rendered emails.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Urgent => "#dc2626",
            Self::High => "#ea580c",
            Self::Normal => "#2563eb",
            Self::Low => "#16a34a",
        }
    }

    /// Arabic label for the priority badge.
    pub fn arabic_label(&self) -> &'static str {
        match self {
            Self::Urgent => "عاجل",
            Self::High => "عالية",
            Self::Normal => "عادية",
            Self::Low => "منخفضة",
        }
    }
}

impl fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationPriority {
    type Err = ebic_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "NORMAL" => Ok(Self::Normal),
            "HIGH" => Ok(Self::High),
            "URGENT" => Ok(Self::Urgent),
            _ => Err(ebic_core::AppError::validation(format!(
                "Invalid priority: '{s}'. Expected one of: LOW, NORMAL, HIGH, URGENT"
            ))),
        }
    }
}
