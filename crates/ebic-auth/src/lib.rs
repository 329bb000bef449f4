//! # ebic-auth
//!
//! Authorization for the EBIC back office.
//!
//! ## Modules
//!
//! - `rbac`: role grant evaluation with configurable action implication

pub mod rbac;

pub use rbac::{RbacEnforcer, RbacPolicies};
