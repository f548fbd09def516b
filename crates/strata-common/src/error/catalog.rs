//! Catalog and proc tree error types.
//!
//! Provides error types for metadata and introspection operations.

use std::fmt;
use thiserror::Error;

/// Error codes for categorizing errors.
///
/// These codes can be used for programmatic error handling and
/// are stable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // General errors (0x0000 - 0x00FF)
    /// Unknown or unspecified error.
    Unknown = 0x0000,
    /// Internal error (bug).
    Internal = 0x0001,
    /// Invalid argument provided.
    InvalidArgument = 0x0002,

    // Catalog errors (0x0100 - 0x01FF)
    /// A required precondition on catalog state was not met.
    PreconditionFailed = 0x0100,
    /// Entity not found in current metadata.
    NotFound = 0x0101,
}

impl ErrorCode {
    /// Returns the numeric code.
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match (*self as u16) >> 8 {
            0x00 => "General",
            0x01 => "Catalog",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The main error type for StrataDB metadata operations.
///
/// # Example
///
/// ```rust
/// use strata_common::error::{StrataError, StrataResult};
///
/// fn find_index(name: &str) -> StrataResult<()> {
///     Err(StrataError::not_found("index", name))
/// }
/// ```
#[derive(Debug, Error)]
pub enum StrataError {
    /// Internal error - this indicates a bug.
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },

    /// Invalid argument provided.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Error message.
        message: String,
    },

    /// A required precondition on catalog state was not met.
    ///
    /// Raised for a missing required reference, a table variant that does
    /// not match the operation, or a partitioned index whose partition id
    /// has no resolvable range. Fatal to the request; retrying without a
    /// catalog change cannot succeed.
    #[error("precondition failed: {message}")]
    PreconditionFailed {
        /// Description of the failed precondition.
        message: String,
    },

    /// No entity with the given name exists in current metadata.
    ///
    /// The caller may retry after the catalog changes.
    #[error("{entity} '{name}' not found")]
    NotFound {
        /// The kind of entity that was looked up.
        entity: &'static str,
        /// The name that had no match.
        name: String,
    },
}

impl StrataError {
    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        StrataError::Internal {
            message: message.into(),
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        StrataError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a precondition failure.
    pub fn precondition(message: impl Into<String>) -> Self {
        StrataError::PreconditionFailed {
            message: message.into(),
        }
    }

    /// Creates a not-found error for the given entity kind and name.
    pub fn not_found(entity: &'static str, name: impl Into<String>) -> Self {
        StrataError::NotFound {
            entity,
            name: name.into(),
        }
    }

    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            StrataError::Internal { .. } => ErrorCode::Internal,
            StrataError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            StrataError::PreconditionFailed { .. } => ErrorCode::PreconditionFailed,
            StrataError::NotFound { .. } => ErrorCode::NotFound,
        }
    }

    /// Returns true if retrying after a catalog change could succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, StrataError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StrataError::not_found("index", "idx_missing");
        assert_eq!(err.to_string(), "index 'idx_missing' not found");

        let err = StrataError::precondition("table is not externally backed");
        assert_eq!(
            err.to_string(),
            "precondition failed: table is not externally backed"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StrataError::internal("boom").code(),
            ErrorCode::Internal
        );
        assert_eq!(
            StrataError::not_found("table", "t").code().as_u16(),
            0x0101
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ErrorCode::Internal.category(), "General");
        assert_eq!(ErrorCode::PreconditionFailed.category(), "Catalog");
        assert_eq!(ErrorCode::NotFound.category(), "Catalog");
    }

    #[test]
    fn test_retryable() {
        assert!(StrataError::not_found("index", "i").is_retryable());
        assert!(!StrataError::precondition("nope").is_retryable());
    }
}
