//! # ebic-service
//!
//! Business logic for EBIC admin notifications. [`AdminNotifier`] fans
//! application events out to eligible admins; [`AdminInboxService`]
//! serves the admin's own inbox and preferences.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod inbox;
pub mod notification;

pub use inbox::{AdminInboxService, InboxPage, InboxStore, PreferenceStore};
pub use notification::{
    AdminDirectory, AdminNotifier, FanOutResult, NotificationEvent, NotificationRules,
    NotificationSink,
};
