//! Admin notification email rendering.

use minijinja::{Environment, context};

use ebic_core::config::{EmailConfig, NotificationsConfig};
use ebic_core::error::{AppError, ErrorKind};
use ebic_core::traits::{EmailMessage, Locale};
use ebic_entity::notification::NotificationPriority;

const HTML_TEMPLATE: &str = "admin_notification.html";
const TEXT_TEMPLATE: &str = "admin_notification.txt";

/// Name recorded in the email log for messages built here.
pub const TEMPLATE_NAME: &str = "admin_notification";

/// The per-recipient content of an admin notification email.
#[derive(Debug, Clone, Copy)]
pub struct AdminEmailContent<'a> {
    /// Name used in the greeting.
    pub recipient_name: &'a str,
    pub title: &'a str,
    pub message: &'a str,
    pub priority: NotificationPriority,
    /// Back-office link, relative or absolute.
    pub action_url: Option<&'a str>,
}

/// Renders admin notification emails in the configured locale.
pub struct AdminEmailRenderer {
    env: Environment<'static>,
    locale: Locale,
    base_url: String,
    subject_prefix: String,
}

impl AdminEmailRenderer {
    /// Create a renderer. Fails if a built-in template does not parse.
    pub fn new(
        locale: Locale,
        base_url: impl Into<String>,
        subject_prefix: impl Into<String>,
    ) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.add_template(HTML_TEMPLATE, include_str!("../templates/admin_notification.html"))
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Invalid HTML template", e))?;
        env.add_template(TEXT_TEMPLATE, include_str!("../templates/admin_notification.txt"))
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Invalid text template", e))?;

        Ok(Self {
            env,
            locale,
            base_url: base_url.into(),
            subject_prefix: subject_prefix.into(),
        })
    }

    /// Create a renderer from the `email` and `notifications` sections.
    pub fn from_config(email: &EmailConfig, notifications: &NotificationsConfig) -> Result<Self, AppError> {
        let locale = email.locale.parse()?;
        Self::new(locale, &email.base_url, &notifications.subject_prefix)
    }

    /// Subject line: `"{prefix} {title}"`.
    pub fn subject(&self, title: &str) -> String {
        if self.subject_prefix.is_empty() {
            title.to_string()
        } else {
            format!("{} {title}", self.subject_prefix)
        }
    }

    /// Turn a relative back-office path into an absolute link.
    pub fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            url.trim_start_matches('/')
        )
    }

    /// Render a ready-to-send message for `to`.
    pub fn render(&self, to: &str, content: &AdminEmailContent<'_>) -> Result<EmailMessage, AppError> {
        let labels = Labels::for_locale(self.locale);
        let ctx = context! {
            locale => self.locale.as_str(),
            dir => if self.locale.is_rtl() { "rtl" } else { "ltr" },
            align => if self.locale.is_rtl() { "right" } else { "left" },
            title => content.title,
            message => content.message,
            greeting => labels.greeting(content.recipient_name),
            priority_color => content.priority.color(),
            priority_label => labels.priority(content.priority),
            action_url => content.action_url.map(|u| self.absolute_url(u)),
            action_label => labels.action,
            footer => labels.footer,
        };

        let html = self.render_one(HTML_TEMPLATE, &ctx)?;
        let text = self.render_one(TEXT_TEMPLATE, &ctx)?;

        Ok(EmailMessage::html(to, self.subject(content.title), html)
            .with_text(text)
            .with_template(TEMPLATE_NAME))
    }

    fn render_one(&self, name: &str, ctx: &minijinja::Value) -> Result<String, AppError> {
        self.env
            .get_template(name)
            .and_then(|t| t.render(ctx))
            .map_err(|e| AppError::with_source(ErrorKind::Internal, format!("Failed to render {name}"), e))
    }
}

struct Labels {
    action: &'static str,
    footer: &'static str,
    locale: Locale,
}

impl Labels {
    fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                action: "Take Action",
                footer: "You are receiving this email because you are an EBIC administrator. \
                         You can manage your notification preferences from the admin dashboard.",
                locale,
            },
            Locale::Ar => Self {
                action: "اتخاذ إجراء",
                footer: "تتلقى هذا البريد لأنك مسؤول في EBIC. \
                         يمكنك إدارة تفضيلات الإشعارات من لوحة التحكم.",
                locale,
            },
        }
    }

    fn greeting(&self, name: &str) -> String {
        match self.locale {
            Locale::En => format!("Dear {name},"),
            Locale::Ar => format!("عزيزي/عزيزتي {name}،"),
        }
    }

    fn priority(&self, priority: NotificationPriority) -> &'static str {
        match self.locale {
            Locale::En => priority.as_str(),
            Locale::Ar => priority.arabic_label(),
        }
    }
}
