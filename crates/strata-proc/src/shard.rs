//! Shard-level nodes.
//!
//! `/dbs/{databaseId}/{tableId}/partitions/{indexName}` - physical
//! placement of each shard of one externally-backed index.

use std::sync::Arc;

use strata_catalog::Database;
use strata_common::error::{StrataError, StrataResult};
use strata_common::types::TableId;

use crate::node::ProcNode;
use crate::result::{Cell, ProcResult, ProcResultBuilder};

const TITLES: [&str; 3] = ["ShardId", "Address", "Primary"];

/// Shard placement data collected under the read lock.
struct ShardSnapshot {
    shard_id: u32,
    address: String,
    primary: bool,
}

/// Terminal node listing the shard placements of one physical index.
pub struct IndexShardProcNode {
    db: Arc<Database>,
    table_id: TableId,
    index_name: String,
}

impl IndexShardProcNode {
    /// Creates a shard listing scoped to one index.
    pub fn new(db: Arc<Database>, table_id: TableId, index_name: impl Into<String>) -> Self {
        Self {
            db,
            table_id,
            index_name: index_name.into(),
        }
    }

    fn collect(&self) -> StrataResult<Vec<ShardSnapshot>> {
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
        let index = external
            .state
            .index(&self.index_name)
            .ok_or_else(|| StrataError::not_found("index", &*self.index_name))?;

        Ok(index
            .shard_routings()
            .iter()
            .map(|routing| ShardSnapshot {
                shard_id: routing.shard_id,
                address: routing.address(),
                primary: routing.primary,
            })
            .collect())
    }
}

impl ProcNode for IndexShardProcNode {
    /// Builds one row per shard routing, in routing order.
    fn fetch_result(&self) -> StrataResult<ProcResult> {
        let snapshots = self.collect()?;

        let mut builder = ProcResultBuilder::new(TITLES);
        for snapshot in snapshots {
            builder.row(vec![
                Cell::new(snapshot.shard_id),
                Cell::new(snapshot.address),
                Cell::new(snapshot.primary),
            ]);
        }
        builder.build()
    }
}
