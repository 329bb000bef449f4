//! Admin inbox: reading, marking and deleting notifications, plus the
//! admin's notification preferences.

pub mod service;
pub mod store;

pub use service::{AdminInboxService, InboxPage};
pub use store::{InboxStore, PreferenceStore};
