//! # ebic-core
//!
//! Core crate for the EBIC admin back office. Contains the mail delivery
//! trait, configuration schemas, pagination types, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other EBIC crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
