//! Partition metadata for tables.
//!
//! Range-partitioned tables carry an ordered list of partition key columns
//! and a mapping from partition id to the key range that partition covers.
//! Ranges are lower-inclusive, upper-exclusive and have a fixed display
//! form, e.g. `[10, 20)`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strata_common::types::PartitionId;

/// Data type of a partition key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    BigInt,
    /// Variable-length string.
    Text,
    /// Calendar date.
    Date,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Int => write!(f, "INT"),
            DataType::BigInt => write!(f, "BIGINT"),
            DataType::Text => write!(f, "TEXT"),
            DataType::Date => write!(f, "DATE"),
        }
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Column data type.
    pub data_type: DataType,
}

impl Column {
    /// Creates a new column.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// A scalar value usable as a partition key bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionValue {
    /// Integer key value.
    Int(i64),
    /// String key value.
    Text(String),
}

impl fmt::Display for PartitionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionValue::Int(v) => write!(f, "{}", v),
            PartitionValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// One end of a partition key range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionBound {
    /// Unbounded below.
    NegativeInfinity,
    /// A concrete key value.
    Value(PartitionValue),
    /// Unbounded above.
    PositiveInfinity,
}

impl fmt::Display for PartitionBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionBound::NegativeInfinity => write!(f, "-infinity"),
            PartitionBound::Value(v) => write!(f, "{}", v),
            PartitionBound::PositiveInfinity => write!(f, "+infinity"),
        }
    }
}

/// A contiguous key range covered by one partition.
///
/// The lower bound is inclusive, the upper bound exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionRange {
    /// Inclusive lower bound.
    pub lower: PartitionBound,
    /// Exclusive upper bound.
    pub upper: PartitionBound,
}

impl PartitionRange {
    /// Creates a range with the given bounds.
    pub fn new(lower: PartitionBound, upper: PartitionBound) -> Self {
        Self { lower, upper }
    }

    /// Creates a range over integer keys: `[lower, upper)`.
    pub fn int(lower: i64, upper: i64) -> Self {
        Self {
            lower: PartitionBound::Value(PartitionValue::Int(lower)),
            upper: PartitionBound::Value(PartitionValue::Int(upper)),
        }
    }
}

impl fmt::Display for PartitionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}

/// Range partition metadata for a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangePartitionInfo {
    /// Ordered partition key columns.
    columns: Vec<Column>,
    /// Key range covered by each partition.
    ranges: BTreeMap<PartitionId, PartitionRange>,
}

impl RangePartitionInfo {
    /// Creates range partition info over the given key columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ranges: BTreeMap::new(),
        }
    }

    /// Registers the key range for a partition.
    pub fn add_range(&mut self, id: PartitionId, range: PartitionRange) {
        self.ranges.insert(id, range);
    }

    /// Returns the ordered partition key columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the ordered partition key column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns the key range registered for a partition, if any.
    pub fn range_for(&self, id: PartitionId) -> Option<&PartitionRange> {
        self.ranges.get(&id)
    }

    /// Returns the number of registered partitions.
    pub fn partition_count(&self) -> usize {
        self.ranges.len()
    }
}

/// How a table is partitioned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PartitionInfo {
    /// The table is not partitioned.
    Unpartitioned,
    /// The table is range-partitioned.
    Range(RangePartitionInfo),
}

impl PartitionInfo {
    /// Returns the range partition info, if this table is range-partitioned.
    pub fn as_range(&self) -> Option<&RangePartitionInfo> {
        match self {
            PartitionInfo::Range(info) => Some(info),
            PartitionInfo::Unpartitioned => None,
        }
    }

    /// Returns the partition scheme name for display.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            PartitionInfo::Unpartitioned => "UNPARTITIONED",
            PartitionInfo::Range(_) => "RANGE",
        }
    }
}
