//! # strata-proc
//!
//! Administrative metadata introspection tree for StrataDB.
//!
//! The proc tree exposes live catalog state - databases, tables, partitions,
//! physical shard placement - as a navigable virtual namespace of tabular
//! snapshots, analogous to a diagnostics filesystem. Administrative queries
//! resolve a path like
//! `/dbs/{databaseId}/{tableId}/partitions/{indexName}` by repeated
//! [`ProcDir::lookup`] calls and fetch a [`ProcResult`] from the node they
//! reach.
//!
//! The tree is read-only by contract: every fetch takes the owning
//! database's read lock for the duration of metadata access, builds an
//! immutable snapshot, and returns it. No node caches results or children.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

/// Node and directory abstractions
pub mod node;

/// Partition listing for externally-backed tables
pub mod partitions;

/// Result set assembly
pub mod result;

/// Path resolution service
pub mod service;

/// Shard-level nodes
pub mod shard;

/// Navigation tree over the catalog
pub mod tree;

pub use node::{ProcDir, ProcEntry, ProcNode, StaticProcDir};
pub use partitions::PartitionsProcDir;
pub use result::{Cell, ProcResult, ProcResultBuilder};
pub use service::ProcService;
pub use shard::IndexShardProcNode;
pub use tree::{DbProcDir, DbsProcDir, TableProcDir};
