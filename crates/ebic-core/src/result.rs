//! Convenience result type alias for EBIC.

use crate::error::AppError;

/// A specialized `Result` type for EBIC operations.
pub type AppResult<T> = Result<T, AppError>;
