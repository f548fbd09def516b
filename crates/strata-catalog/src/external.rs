//! Externally-synchronized index state.
//!
//! An externally-backed table mirrors physical indices that live in a remote
//! search system. A background synchronization process keeps this state
//! current; it mutates it only while holding the owning database's write
//! lock, so readers under the read lock always see a consistent snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strata_common::types::PartitionId;

/// Physical placement record for one shard of an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardRouting {
    /// Shard number within the index.
    pub shard_id: u32,
    /// Host the shard is placed on.
    pub host: String,
    /// Port of the hosting node.
    pub port: u16,
    /// Whether this placement is the primary copy.
    pub primary: bool,
}

impl ShardRouting {
    /// Creates a new shard routing record.
    pub fn new(shard_id: u32, host: impl Into<String>, port: u16, primary: bool) -> Self {
        Self {
            shard_id,
            host: host.into(),
            port,
            primary,
        }
    }

    /// Returns the placement address as `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// State of one physical externally-backed index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexState {
    /// Index name, unique within the table.
    name: String,
    /// Partition this index belongs to, present iff the table is partitioned.
    partition_id: Option<PartitionId>,
    /// Ordered physical placement records, one per shard.
    shard_routings: Vec<ShardRouting>,
}

impl IndexState {
    /// Creates state for an index of an unpartitioned table.
    pub fn unpartitioned(name: impl Into<String>, shard_routings: Vec<ShardRouting>) -> Self {
        Self {
            name: name.into(),
            partition_id: None,
            shard_routings,
        }
    }

    /// Creates state for an index backing one partition.
    pub fn partitioned(
        name: impl Into<String>,
        partition_id: PartitionId,
        shard_routings: Vec<ShardRouting>,
    ) -> Self {
        Self {
            name: name.into(),
            partition_id: Some(partition_id),
            shard_routings,
        }
    }

    /// Returns the index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the partition this index belongs to, if any.
    pub fn partition_id(&self) -> Option<PartitionId> {
        self.partition_id
    }

    /// Returns the ordered shard placement records.
    pub fn shard_routings(&self) -> &[ShardRouting] {
        &self.shard_routings
    }

    /// Returns the number of shards.
    pub fn shard_count(&self) -> usize {
        self.shard_routings.len()
    }

    /// Replaces the shard placement records (used by resynchronization).
    pub fn set_shard_routings(&mut self, shard_routings: Vec<ShardRouting>) {
        self.shard_routings = shard_routings;
    }
}

/// Externally-synchronized physical state of a table.
///
/// Indices are split into two disjoint maps keyed by index name: an index is
/// partitioned iff it carries a partition id, and it appears in exactly one
/// of the two maps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalTableState {
    partitioned: BTreeMap<String, IndexState>,
    unpartitioned: BTreeMap<String, IndexState>,
}

impl ExternalTableState {
    /// Creates empty external state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an index, routed to the partitioned or unpartitioned
    /// map by the presence of its partition id.
    pub fn add_index(&mut self, index: IndexState) {
        let name = index.name().to_string();
        if index.partition_id().is_some() {
            self.unpartitioned.remove(&name);
            self.partitioned.insert(name, index);
        } else {
            self.partitioned.remove(&name);
            self.unpartitioned.insert(name, index);
        }
    }

    /// Removes an index by name from whichever map holds it.
    pub fn remove_index(&mut self, name: &str) -> Option<IndexState> {
        self.partitioned
            .remove(name)
            .or_else(|| self.unpartitioned.remove(name))
    }

    /// Returns true if an index with the given name exists in either map.
    pub fn contains_index(&self, name: &str) -> bool {
        self.partitioned.contains_key(name) || self.unpartitioned.contains_key(name)
    }

    /// Looks up an index by name in either map.
    pub fn index(&self, name: &str) -> Option<&IndexState> {
        self.partitioned
            .get(name)
            .or_else(|| self.unpartitioned.get(name))
    }

    /// Returns the indices that back partitions, keyed by index name.
    pub fn partitioned_indices(&self) -> &BTreeMap<String, IndexState> {
        &self.partitioned
    }

    /// Returns the indices of the unpartitioned form, keyed by index name.
    pub fn unpartitioned_indices(&self) -> &BTreeMap<String, IndexState> {
        &self.unpartitioned
    }

    /// Returns a mutable reference to an index in either map.
    pub fn index_mut(&mut self, name: &str) -> Option<&mut IndexState> {
        if self.partitioned.contains_key(name) {
            self.partitioned.get_mut(name)
        } else {
            self.unpartitioned.get_mut(name)
        }
    }

    /// Returns the total number of indices across both maps.
    pub fn index_count(&self) -> usize {
        self.partitioned.len() + self.unpartitioned.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routings(n: u32) -> Vec<ShardRouting> {
        (0..n)
            .map(|i| ShardRouting::new(i, "10.0.0.1", 9300, i == 0))
            .collect()
    }

    #[test]
    fn test_add_index_routes_by_partition_id() {
        let mut state = ExternalTableState::new();
        state.add_index(IndexState::unpartitioned("idx_a", routings(3)));
        state.add_index(IndexState::partitioned(
            "idx_b",
            PartitionId::new(5),
            routings(2),
        ));

        assert_eq!(state.unpartitioned_indices().len(), 1);
        assert_eq!(state.partitioned_indices().len(), 1);
        assert!(state.contains_index("idx_a"));
        assert!(state.contains_index("idx_b"));
        assert_eq!(state.index("idx_b").unwrap().shard_count(), 2);
    }

    #[test]
    fn test_add_index_moves_between_maps() {
        let mut state = ExternalTableState::new();
        state.add_index(IndexState::unpartitioned("idx", routings(1)));
        assert_eq!(state.unpartitioned_indices().len(), 1);

        // Re-sync discovered the index now backs a partition.
        state.add_index(IndexState::partitioned(
            "idx",
            PartitionId::new(1),
            routings(1),
        ));
        assert_eq!(state.unpartitioned_indices().len(), 0);
        assert_eq!(state.partitioned_indices().len(), 1);
        assert_eq!(state.index_count(), 1);
    }

    #[test]
    fn test_remove_index() {
        let mut state = ExternalTableState::new();
        state.add_index(IndexState::unpartitioned("idx", routings(1)));

        let removed = state.remove_index("idx").unwrap();
        assert_eq!(removed.name(), "idx");
        assert!(!state.contains_index("idx"));
        assert!(state.remove_index("idx").is_none());
    }

    #[test]
    fn test_shard_routing_address() {
        let routing = ShardRouting::new(0, "10.0.0.2", 9300, true);
        assert_eq!(routing.address(), "10.0.0.2:9300");
    }
}
