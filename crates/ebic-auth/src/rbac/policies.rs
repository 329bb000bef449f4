//! Action implication rules for role grants.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use ebic_core::config::AuthConfig;
use ebic_entity::user::actions;

/// Which required actions a granted action satisfies, beyond itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionScope {
    /// Every action on the same resource.
    All,
    /// Only the listed actions.
    Only(HashSet<String>),
}

/// Maps a granted action to the other actions it implies on the same
/// resource. A grant always satisfies its own action.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    implications: HashMap<String, ActionScope>,
}

impl RbacPolicies {
    /// Default policy: `manage` implies every action on its resource.
    pub fn new() -> Self {
        let mut implications = HashMap::new();
        implications.insert(actions::MANAGE.to_string(), ActionScope::All);
        Self { implications }
    }

    /// Exact matching only; no action implies another.
    pub fn exact() -> Self {
        Self {
            implications: HashMap::new(),
        }
    }

    /// Build the policy selected by configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        if config.manage_implies_all {
            Self::new()
        } else {
            Self::exact()
        }
    }

    /// Add `granted ⇒ implied`. Ignored when `granted` already implies all.
    pub fn with_implication(mut self, granted: &str, implied: &str) -> Self {
        let scope = self
            .implications
            .entry(granted.to_string())
            .or_insert_with(|| ActionScope::Only(HashSet::new()));
        if let ActionScope::Only(set) = scope {
            set.insert(implied.to_string());
        }
        self
    }

    /// Whether holding `granted` satisfies a check for `required`.
    pub fn action_satisfies(&self, granted: &str, required: &str) -> bool {
        if granted == required {
            return true;
        }
        match self.implications.get(granted) {
            Some(ActionScope::All) => true,
            Some(ActionScope::Only(set)) => set.contains(required),
            None => false,
        }
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manage_implies_everything_by_default() {
        let policies = RbacPolicies::new();
        assert!(policies.action_satisfies("manage", "read"));
        assert!(policies.action_satisfies("manage", "approve"));
        assert!(policies.action_satisfies("read", "read"));
        assert!(!policies.action_satisfies("read", "manage"));
    }

    #[test]
    fn test_exact_policy() {
        let policies = RbacPolicies::exact();
        assert!(policies.action_satisfies("manage", "manage"));
        assert!(!policies.action_satisfies("manage", "read"));
    }

    #[test]
    fn test_custom_implication() {
        let policies = RbacPolicies::exact().with_implication("update", "read");
        assert!(policies.action_satisfies("update", "read"));
        assert!(!policies.action_satisfies("update", "delete"));
    }

    #[test]
    fn test_from_config() {
        let strict = AuthConfig {
            manage_implies_all: false,
        };
        assert!(!RbacPolicies::from_config(&strict).action_satisfies("manage", "read"));
        assert!(RbacPolicies::from_config(&AuthConfig::default()).action_satisfies("manage", "read"));
    }
}
