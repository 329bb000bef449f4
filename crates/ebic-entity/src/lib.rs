//! # ebic-entity
//!
//! Domain entity models for the EBIC admin back office. Every struct in
//! this crate represents a database table row or a domain value object.
//! Database rows additionally derive `sqlx::FromRow`.

pub mod email;
pub mod notification;
pub mod user;
