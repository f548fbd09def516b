//! System-wide constants for StrataDB.
//!
//! This module defines constants used across the database.

// =============================================================================
// Catalog Constants
// =============================================================================

/// Replication number reported for externally-backed indices.
///
/// The catalog layer does not track per-shard replica counts for external
/// tables; the remote system owns replication. Every external index is
/// reported with this fixed value.
pub const REPLICATION_NUM: u64 = 1;

/// Maximum length of a database or table name, in bytes.
pub const MAX_NAME_LEN: usize = 256;

// =============================================================================
// Proc Tree Constants
// =============================================================================

/// Separator character in proc tree paths.
pub const PROC_PATH_SEPARATOR: char = '/';

/// Name of the proc tree entry listing a table's partitions.
pub const PARTITIONS_ENTRY_NAME: &str = "partitions";
