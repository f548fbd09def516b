//! Partition listing for externally-backed tables.
//!
//! `/dbs/{databaseId}/{tableId}/partitions` - one normalized row per
//! physical index, whether it backs a partition of a range-partitioned
//! table or the single unpartitioned form.

use std::sync::Arc;

use strata_catalog::{Database, PartitionRange};
use strata_common::constants::REPLICATION_NUM;
use strata_common::error::{StrataError, StrataResult};
use strata_common::types::TableId;

use crate::node::{ProcDir, ProcEntry, ProcNode};
use crate::result::{Cell, ProcResult, ProcResultBuilder};
use crate::shard::IndexShardProcNode;

const TITLES: [&str; 6] = [
    "IndexName",
    "PartitionKey",
    "Range",
    "DistributionKey",
    "Shards",
    "ReplicationNum",
];

/// Placeholder cell for attributes an unpartitioned index does not have.
const EMPTY_CELL: &str = "-";

/// Row data collected under the read lock, formatted after release.
struct IndexSnapshot {
    name: String,
    /// Partition key column names and the index's key range, present iff
    /// the index backs a partition.
    partition: Option<(Vec<String>, PartitionRange)>,
    shard_count: usize,
}

/// Directory listing the physical indices of one externally-backed table.
pub struct PartitionsProcDir {
    db: Arc<Database>,
    table_id: TableId,
}

impl PartitionsProcDir {
    /// Creates a partition listing scoped to one table.
    pub fn new(db: Arc<Database>, table_id: TableId) -> Self {
        Self { db, table_id }
    }

    /// Collects one snapshot entry per index while holding the read lock.
    fn collect(&self) -> StrataResult<Vec<IndexSnapshot>> {
        let meta = self.db.read();
        let table = meta.table(self.table_id).ok_or_else(|| {
            StrataError::precondition(format!(
                "table {} no longer exists in database {}",
                self.table_id,
                self.db.id()
            ))
        })?;
        let external = table.as_external().ok_or_else(|| {
            StrataError::precondition(format!(
                "table '{}' is not externally backed",
                table.name()
            ))
        })?;
        let range_info = external.partition_info.as_range();

        let mut snapshots = Vec::with_capacity(external.state.index_count());
        for index in external.state.unpartitioned_indices().values() {
            snapshots.push(IndexSnapshot {
                name: index.name().to_string(),
                partition: None,
                shard_count: index.shard_count(),
            });
        }
        for index in external.state.partitioned_indices().values() {
            let info = range_info.ok_or_else(|| {
                StrataError::precondition(format!(
                    "index '{}' is partitioned but table '{}' has no range partition info",
                    index.name(),
                    table.name()
                ))
            })?;
            let partition_id = index.partition_id().ok_or_else(|| {
                StrataError::precondition(format!(
                    "index '{}' is in the partitioned set without a partition id",
                    index.name()
                ))
            })?;
            let range = info.range_for(partition_id).ok_or_else(|| {
                StrataError::precondition(format!(
                    "partition {} of table '{}' has no registered range",
                    partition_id,
                    table.name()
                ))
            })?;
            let columns = info.column_names().iter().map(|c| c.to_string()).collect();
            snapshots.push(IndexSnapshot {
                name: index.name().to_string(),
                partition: Some((columns, range.clone())),
                shard_count: index.shard_count(),
            });
        }
        Ok(snapshots)
    }
}

impl ProcNode for PartitionsProcDir {
    /// Builds one row per physical index.
    ///
    /// Rows are sorted by index name; the order is part of this node's
    /// contract, not an accident of map iteration. Joining and range
    /// formatting happen outside the read lock.
    fn fetch_result(&self) -> StrataResult<ProcResult> {
        let mut snapshots = self.collect()?;
        snapshots.sort_by(|a, b| a.name.cmp(&b.name));

        let mut builder = ProcResultBuilder::new(TITLES);
        for snapshot in snapshots {
            let (key, range) = match &snapshot.partition {
                Some((columns, range)) => (columns.join(", "), range.to_string()),
                None => (EMPTY_CELL.to_string(), EMPTY_CELL.to_string()),
            };
            builder.row(vec![
                Cell::new(&snapshot.name),
                Cell::new(key),
                Cell::new(range),
                Cell::new(EMPTY_CELL),
                Cell::new(snapshot.shard_count),
                Cell::new(REPLICATION_NUM),
            ]);
        }
        builder.build()
    }
}

impl ProcDir for PartitionsProcDir {
    /// Resolves one physical index into a shard-level node.
    ///
    /// The child is constructed fresh on every call; nothing is cached
    /// across lookups.
    fn lookup(&self, index_name: &str) -> StrataResult<ProcEntry> {
        {
            let meta = self.db.read();
            let table = meta.table(self.table_id).ok_or_else(|| {
                StrataError::precondition(format!(
                    "table {} no longer exists in database {}",
                    self.table_id,
                    self.db.id()
                ))
            })?;
            let external = table.as_external().ok_or_else(|| {
                StrataError::precondition(format!(
                    "table '{}' is not externally backed",
                    table.name()
                ))
            })?;
            if !external.state.contains_index(index_name) {
                return Err(StrataError::not_found("index", index_name));
            }
        }
        Ok(ProcEntry::Node(Arc::new(IndexShardProcNode::new(
            Arc::clone(&self.db),
            self.table_id,
            index_name,
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_catalog::{
        Column, DataType, ExternalTable, ExternalTableState, IndexState, NativeTable,
        PartitionInfo, PartitionRange, RangePartitionInfo, ShardRouting, Table, TableVariant,
    };
    use strata_common::types::{DatabaseId, PartitionId};

    fn routings(n: u32) -> Vec<ShardRouting> {
        (0..n)
            .map(|i| ShardRouting::new(i, "10.0.0.1", 9300, i == 0))
            .collect()
    }

    /// Table `t` from the worked example: unpartitioned `idx_a` with 3
    /// shards, partitioned `idx_b` at partition 5 with range `[10, 20)`
    /// over column `dt`, 2 shards.
    fn example_db() -> Arc<Database> {
        let mut range_info = RangePartitionInfo::new(vec![Column::new("dt", DataType::Date)]);
        range_info.add_range(PartitionId::new(5), PartitionRange::int(10, 20));

        let mut state = ExternalTableState::new();
        state.add_index(IndexState::unpartitioned("idx_a", routings(3)));
        state.add_index(IndexState::partitioned(
            "idx_b",
            PartitionId::new(5),
            routings(2),
        ));

        let table = Table::new(
            TableId::new(10),
            "t",
            TableVariant::External(ExternalTable::new(
                PartitionInfo::Range(range_info),
                state,
            )),
        );

        let db = Database::new(DatabaseId::new(1), "analytics");
        db.write().create_table(table).unwrap();
        Arc::new(db)
    }

    #[test]
    fn test_fetch_result_example_rows() {
        let db = example_db();
        let dir = PartitionsProcDir::new(db, TableId::new(10));

        let result = dir.fetch_result().unwrap();
        assert_eq!(
            result.titles(),
            &[
                "IndexName",
                "PartitionKey",
                "Range",
                "DistributionKey",
                "Shards",
                "ReplicationNum"
            ]
        );
        assert_eq!(
            result.rows(),
            &[
                vec!["idx_a", "-", "-", "-", "3", "1"],
                vec!["idx_b", "dt", "[10, 20)", "-", "2", "1"],
            ]
        );
        for row in result.rows() {
            assert_eq!(row.len(), result.titles().len());
        }
    }

    #[test]
    fn test_rows_sorted_by_index_name() {
        let db = example_db();
        {
            let mut meta = db.write();
            let external = meta
                .table_mut(TableId::new(10))
                .unwrap()
                .as_external_mut()
                .unwrap();
            external
                .state
                .add_index(IndexState::unpartitioned("idx_z", routings(1)));
            external
                .state
                .add_index(IndexState::unpartitioned("idx_0", routings(1)));
        }

        let dir = PartitionsProcDir::new(db, TableId::new(10));
        let names: Vec<_> = dir
            .fetch_result()
            .unwrap()
            .rows()
            .iter()
            .map(|row| row[0].clone())
            .collect();
        assert_eq!(names, vec!["idx_0", "idx_a", "idx_b", "idx_z"]);
    }

    #[test]
    fn test_joined_partition_columns() {
        let mut range_info = RangePartitionInfo::new(vec![
            Column::new("dt", DataType::Date),
            Column::new("region", DataType::Text),
        ]);
        range_info.add_range(PartitionId::new(1), PartitionRange::int(0, 10));

        let mut state = ExternalTableState::new();
        state.add_index(IndexState::partitioned(
            "idx",
            PartitionId::new(1),
            routings(1),
        ));

        let db = Database::new(DatabaseId::new(1), "d");
        db.write()
            .create_table(Table::new(
                TableId::new(1),
                "t",
                TableVariant::External(ExternalTable::new(
                    PartitionInfo::Range(range_info),
                    state,
                )),
            ))
            .unwrap();

        let dir = PartitionsProcDir::new(Arc::new(db), TableId::new(1));
        let result = dir.fetch_result().unwrap();
        assert_eq!(result.rows()[0][1], "dt, region");
    }

    #[test]
    fn test_wrong_variant_is_precondition_failure() {
        let db = Database::new(DatabaseId::new(1), "d");
        db.write()
            .create_table(Table::new(
                TableId::new(1),
                "native",
                TableVariant::Native(NativeTable::new(vec![Column::new("id", DataType::Int)])),
            ))
            .unwrap();

        let dir = PartitionsProcDir::new(Arc::new(db), TableId::new(1));
        assert!(matches!(
            dir.fetch_result(),
            Err(StrataError::PreconditionFailed { .. })
        ));
        assert!(matches!(
            dir.lookup("idx"),
            Err(StrataError::PreconditionFailed { .. })
        ));
    }

    #[test]
    fn test_missing_table_is_precondition_failure() {
        let db = example_db();
        let dir = PartitionsProcDir::new(Arc::clone(&db), TableId::new(99));
        assert!(matches!(
            dir.fetch_result(),
            Err(StrataError::PreconditionFailed { .. })
        ));
    }

    #[test]
    fn test_unresolvable_partition_range_is_precondition_failure() {
        let db = example_db();
        {
            let mut meta = db.write();
            let external = meta
                .table_mut(TableId::new(10))
                .unwrap()
                .as_external_mut()
                .unwrap();
            // Partition id 6 has no registered range.
            external.state.add_index(IndexState::partitioned(
                "idx_c",
                PartitionId::new(6),
                routings(1),
            ));
        }

        let dir = PartitionsProcDir::new(db, TableId::new(10));
        assert!(matches!(
            dir.fetch_result(),
            Err(StrataError::PreconditionFailed { .. })
        ));
    }

    #[test]
    fn test_lookup_existing_and_missing_index() {
        let db = example_db();
        let dir = PartitionsProcDir::new(db, TableId::new(10));

        let entry = dir.lookup("idx_a").unwrap();
        assert_eq!(entry.fetch_result().unwrap().row_count(), 3);

        assert!(matches!(
            dir.lookup("idx_missing"),
            Err(StrataError::NotFound { .. })
        ));
    }

    #[test]
    fn test_register_is_refused() {
        let db = example_db();
        let dir = PartitionsProcDir::new(Arc::clone(&db), TableId::new(10));
        let child = ProcEntry::Node(Arc::new(IndexShardProcNode::new(
            db,
            TableId::new(10),
            "idx_a",
        )));
        assert!(!dir.register("idx_a", child));
    }
}
