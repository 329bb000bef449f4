//! Authorization configuration.

use serde::{Deserialize, Serialize};

/// Role/permission evaluation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Whether a `manage` grant on a resource satisfies any other action
    /// on the same resource. When `false`, permissions match exactly.
    #[serde(default = "default_true")]
    pub manage_implies_all: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            manage_implies_all: true,
        }
    }
}

fn default_true() -> bool {
    true
}
