//! Error handling for StrataDB.
//!
//! This module provides a unified error type and result alias used
//! across all StrataDB components.

mod catalog;

pub use catalog::{ErrorCode, StrataError};

/// Result type alias for StrataDB operations.
pub type StrataResult<T> = std::result::Result<T, StrataError>;
