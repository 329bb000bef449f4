//! Admin notification fan-out, eligibility rules and event builders.

pub mod builders;
pub mod event;
pub mod fanout;
pub mod preferences;
pub mod rules;
pub mod store;

pub use builders::{
    CollaboratorRegistration, FailedLoginReport, InnovatorSubmission, SecurityAlertReport,
    SystemErrorReport,
};
pub use event::NotificationEvent;
pub use fanout::{AdminNotifier, FanOutResult};
pub use preferences::is_category_enabled;
pub use rules::{NotificationRules, SkipReason};
pub use store::{AdminDirectory, NotificationSink};
