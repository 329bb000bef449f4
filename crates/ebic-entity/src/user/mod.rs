//! Admin user and role permission entities.

pub mod model;
pub mod permission;

pub use model::AdminUser;
pub use permission::{Permission, RequiredPermission, actions, resources};
