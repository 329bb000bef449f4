//! # ebic-mail
//!
//! Outbound email for the EBIC back office. [`EmailService`] implements
//! the core [`Mailer`](ebic_core::traits::Mailer) trait on top of a
//! pluggable [`EmailTransport`] (SMTP via `lettre`) and records every
//! delivery attempt in the email log.
//!
//! The admin notification email is rendered by [`AdminEmailRenderer`].

pub mod log_sink;
pub mod service;
pub mod template;
pub mod transport;

pub use log_sink::EmailLogSink;
pub use service::EmailService;
pub use template::{AdminEmailContent, AdminEmailRenderer};
pub use transport::{EmailTransport, SmtpEmailTransport};
