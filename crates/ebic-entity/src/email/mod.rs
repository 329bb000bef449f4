//! Outbound email log entities.

pub mod log;

pub use log::{EmailLog, EmailStatus, NewEmailLog};
