//! Repository implementations for EBIC entities.

pub mod admin;
pub mod email_log;
pub mod notification;

pub use admin::AdminRepository;
pub use email_log::EmailLogRepository;
pub use notification::{AdminNotificationRepository, NotificationFilter};
