//! Core type definitions used across the EBIC workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
