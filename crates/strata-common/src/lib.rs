//! # strata-common
//!
//! Common types, errors, and constants for StrataDB.
//!
//! This crate provides the foundational types and abstractions used across
//! all StrataDB components. It includes:
//!
//! - **Types**: Core identifiers (`DatabaseId`, `TableId`, `PartitionId`)
//! - **Errors**: Unified error handling with `StrataError`
//! - **Constants**: System-wide constants and limits
//!
//! ## Example
//!
//! ```rust
//! use strata_common::types::{DatabaseId, TableId};
//! use strata_common::error::StrataResult;
//!
//! fn example() -> StrataResult<()> {
//!     let db_id = DatabaseId::new(1);
//!     let table_id = TableId::new(42);
//!     assert!(db_id.as_u64() < table_id.as_u64());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items at the crate root
pub use constants::*;
pub use error::{ErrorCode, StrataError, StrataResult};
pub use types::{DatabaseId, PartitionId, TableId};
