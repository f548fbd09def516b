//! Core identifier types for StrataDB.
//!
//! These types provide type-safe wrappers around numeric identifiers,
//! preventing accidental misuse of different ID types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Database identifier - uniquely identifies a database in the cluster.
///
/// # Example
///
/// ```rust
/// use strata_common::types::DatabaseId;
///
/// let db = DatabaseId::new(42);
/// assert_eq!(db.as_u64(), 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DatabaseId(u64);

impl DatabaseId {
    /// Invalid database ID constant, used as a sentinel value.
    pub const INVALID: Self = Self(u64::MAX);

    /// Creates a new `DatabaseId` from a raw u64 value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Checks if this is a valid database ID.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

impl fmt::Debug for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DatabaseId({})", self.0)
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Table identifier - uniquely identifies a table within the cluster.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct TableId(u64);

impl TableId {
    /// Invalid table ID constant, used as a sentinel value.
    pub const INVALID: Self = Self(u64::MAX);

    /// Creates a new `TableId` from a raw u64 value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Checks if this is a valid table ID.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableId({})", self.0)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Partition identifier - identifies one partition of a partitioned table.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PartitionId(u64);

impl PartitionId {
    /// Creates a new `PartitionId` from a raw u64 value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartitionId({})", self.0)
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        assert_eq!(DatabaseId::new(7).as_u64(), 7);
        assert_eq!(TableId::new(11).as_u64(), 11);
        assert_eq!(PartitionId::new(5).as_u64(), 5);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(DatabaseId::new(7).to_string(), "7");
        assert_eq!(format!("{:?}", TableId::new(11)), "TableId(11)");
    }

    #[test]
    fn test_invalid_sentinel() {
        assert!(!DatabaseId::INVALID.is_valid());
        assert!(DatabaseId::new(0).is_valid());
        assert!(!TableId::INVALID.is_valid());
    }

    #[test]
    fn test_id_ordering() {
        assert!(PartitionId::new(1) < PartitionId::new(2));
        assert_eq!(DatabaseId::new(3), DatabaseId::new(3));
    }
}
