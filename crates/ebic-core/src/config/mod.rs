//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod auth;
pub mod database;
pub mod email;
pub mod logging;
pub mod notifications;

use serde::{Deserialize, Serialize};

pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::email::{EmailConfig, SmtpConfig};
pub use self::logging::LoggingConfig;
pub use self::notifications::NotificationsConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// (base file + environment overlay + `EBIC__` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Outbound email settings.
    #[serde(default)]
    pub email: EmailConfig,
    /// Permission evaluation settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Admin notification fan-out settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// `path` is given without requiring the extension to exist; a missing
    /// file falls back to defaults. When `EBIC_ENV` is set, the sibling
    /// `config/{env}` overlay is merged on top. Environment variables
    /// prefixed with `EBIC__` win over both (e.g. `EBIC__DATABASE__URL`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(path).required(false));

        if let Ok(env) = std::env::var("EBIC_ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{env}")).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("EBIC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
