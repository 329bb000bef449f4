//! Admin notification domain entities.

pub mod kind;
pub mod model;
pub mod preference;
pub mod priority;

pub use kind::{NotificationType, PreferenceCategory};
pub use model::{AdminNotification, NewAdminNotification};
pub use preference::{AdminNotificationPreferences, DigestMode};
pub use priority::NotificationPriority;
