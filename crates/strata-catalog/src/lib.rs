//! # strata-catalog
//!
//! In-memory cluster catalog for StrataDB.
//!
//! This crate implements the metadata layer shared by query processing and
//! administrative introspection:
//! - Cluster-level database registry
//! - Databases, each owning a reader/writer lock over its tables' metadata
//! - Table variants (native and externally-backed)
//! - Range partition metadata
//! - Externally-synchronized physical index state
//!
//! All catalog objects are long-lived and mutated in place under the owning
//! database's write lock by DDL and the external synchronization process.
//! Readers take the database's read lock and see a consistent snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

/// Cluster-level database registry
pub mod catalog;

/// Database entity and its metadata lock
pub mod database;

/// Externally-synchronized index state
pub mod external;

/// Partition metadata
pub mod partition;

/// Table entity and variants
pub mod table;

pub use catalog::Catalog;
pub use database::{Database, DatabaseMeta};
pub use external::{ExternalTableState, IndexState, ShardRouting};
pub use partition::{
    Column, DataType, PartitionBound, PartitionInfo, PartitionRange, PartitionValue,
    RangePartitionInfo,
};
pub use table::{ExternalTable, NativeTable, Table, TableVariant};
