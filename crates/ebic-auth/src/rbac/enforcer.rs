//! RBAC enforcement: checks whether an admin's role grants a
//! `(resource, action)` pair.

use ebic_core::error::AppError;
use ebic_entity::user::{AdminUser, RequiredPermission};

use super::policies::RbacPolicies;

/// Evaluates role grants against required permissions.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer {
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Creates an enforcer with custom policies.
    pub fn with_policies(policies: RbacPolicies) -> Self {
        Self { policies }
    }

    /// Whether any of the admin's grants covers `resource:action`.
    pub fn has_permission(&self, admin: &AdminUser, resource: &str, action: &str) -> bool {
        admin
            .permissions
            .iter()
            .any(|p| p.resource == resource && self.policies.action_satisfies(&p.action, action))
    }

    /// [`has_permission`](Self::has_permission) for a parsed requirement.
    pub fn satisfies(&self, admin: &AdminUser, required: &RequiredPermission) -> bool {
        self.has_permission(admin, &required.resource, &required.action)
    }

    /// Like [`satisfies`](Self::satisfies) but returns an authorization
    /// error when the grant is missing.
    pub fn require(&self, admin: &AdminUser, required: &RequiredPermission) -> Result<(), AppError> {
        if self.satisfies(admin, required) {
            Ok(())
        } else {
            tracing::debug!(admin_id = %admin.id, permission = %required, "Permission denied");
            Err(AppError::authorization(format!(
                "Admin {} lacks permission '{required}'",
                admin.id
            )))
        }
    }

    /// Returns a reference to the underlying policies.
    pub fn policies(&self) -> &RbacPolicies {
        &self.policies
    }
}
