//! Core traits defined in `ebic-core` and implemented by other crates.

pub mod mailer;

pub use mailer::{EmailMessage, Locale, Mailer, SendResult};
