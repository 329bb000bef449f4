//! # ebic-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for admins, admin notifications, and the email log.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
