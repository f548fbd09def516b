//! Navigation tree over the catalog.
//!
//! The dynamic directories between the root and the per-table nodes:
//! `/dbs` lists databases, `/dbs/{databaseId}` lists tables, and
//! `/dbs/{databaseId}/{tableId}` lists the introspection entries available
//! for that table. All of them resolve children from current catalog state
//! on every lookup and refuse static registration.

use std::sync::Arc;

use strata_catalog::{Catalog, Database};
use strata_common::constants::PARTITIONS_ENTRY_NAME;
use strata_common::error::{StrataError, StrataResult};
use strata_common::types::{DatabaseId, TableId};

use crate::node::{ProcDir, ProcEntry, ProcNode};
use crate::partitions::PartitionsProcDir;
use crate::result::{Cell, ProcResult, ProcResultBuilder};

/// Directory listing the cluster's databases.
pub struct DbsProcDir {
    catalog: Arc<Catalog>,
}

impl DbsProcDir {
    /// Creates the database listing over a catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl ProcNode for DbsProcDir {
    fn fetch_result(&self) -> StrataResult<ProcResult> {
        let dbs = self.catalog.list_databases();

        let mut builder = ProcResultBuilder::new(["DbId", "DbName", "TableNum"]);
        for db in dbs {
            let table_count = db.read().table_count();
            builder.row(vec![
                Cell::new(db.id()),
                Cell::new(db.name()),
                Cell::new(table_count),
            ]);
        }
        builder.build()
    }
}

impl ProcDir for DbsProcDir {
    fn lookup(&self, db_id: &str) -> StrataResult<ProcEntry> {
        let id = db_id
            .parse::<u64>()
            .map_err(|_| StrataError::not_found("database", db_id))?;
        let db = self
            .catalog
            .database(DatabaseId::new(id))
            .ok_or_else(|| StrataError::not_found("database", db_id))?;
        Ok(ProcEntry::Dir(Arc::new(DbProcDir::new(db))))
    }
}

/// Directory listing the tables of one database.
pub struct DbProcDir {
    db: Arc<Database>,
}

impl DbProcDir {
    /// Creates the table listing over a database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl ProcNode for DbProcDir {
    fn fetch_result(&self) -> StrataResult<ProcResult> {
        struct TableSnapshot {
            id: TableId,
            name: String,
            type_name: &'static str,
            partition_type: &'static str,
        }

        let snapshots: Vec<TableSnapshot> = {
            let meta = self.db.read();
            meta.tables()
                .map(|table| TableSnapshot {
                    id: table.id(),
                    name: table.name().to_string(),
                    type_name: table.type_name(),
                    partition_type: table
                        .as_external()
                        .map_or("-", |external| external.partition_info.type_name()),
                })
                .collect()
        };

        let mut builder =
            ProcResultBuilder::new(["TableId", "TableName", "Type", "PartitionType"]);
        for snapshot in snapshots {
            builder.row(vec![
                Cell::new(snapshot.id),
                Cell::new(snapshot.name),
                Cell::new(snapshot.type_name),
                Cell::new(snapshot.partition_type),
            ]);
        }
        builder.build()
    }
}

impl ProcDir for DbProcDir {
    fn lookup(&self, table_id: &str) -> StrataResult<ProcEntry> {
        let id = table_id
            .parse::<u64>()
            .map_err(|_| StrataError::not_found("table", table_id))?;
        let id = TableId::new(id);
        {
            let meta = self.db.read();
            if meta.table(id).is_none() {
                return Err(StrataError::not_found("table", table_id));
            }
        }
        Ok(ProcEntry::Dir(Arc::new(TableProcDir::new(
            Arc::clone(&self.db),
            id,
        ))))
    }
}

/// Directory listing the introspection entries of one table.
pub struct TableProcDir {
    db: Arc<Database>,
    table_id: TableId,
}

impl TableProcDir {
    /// Creates the entry listing for one table.
    pub fn new(db: Arc<Database>, table_id: TableId) -> Self {
        Self { db, table_id }
    }
}

impl ProcNode for TableProcDir {
    fn fetch_result(&self) -> StrataResult<ProcResult> {
        let mut builder = ProcResultBuilder::new(["Entry"]);
        builder.row(vec![Cell::new(PARTITIONS_ENTRY_NAME)]);
        builder.build()
    }
}

impl ProcDir for TableProcDir {
    fn lookup(&self, entry_name: &str) -> StrataResult<ProcEntry> {
        if entry_name != PARTITIONS_ENTRY_NAME {
            return Err(StrataError::not_found("proc entry", entry_name));
        }
        Ok(ProcEntry::Dir(Arc::new(PartitionsProcDir::new(
            Arc::clone(&self.db),
            self.table_id,
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_catalog::{
        Column, DataType, ExternalTable, ExternalTableState, NativeTable, PartitionInfo, Table,
        TableVariant,
    };

    fn catalog_with_tables() -> Arc<Catalog> {
        let db = Database::new(DatabaseId::new(1), "analytics");
        db.write()
            .create_table(Table::new(
                TableId::new(10),
                "logs",
                TableVariant::External(ExternalTable::new(
                    PartitionInfo::Unpartitioned,
                    ExternalTableState::new(),
                )),
            ))
            .unwrap();
        db.write()
            .create_table(Table::new(
                TableId::new(11),
                "users",
                TableVariant::Native(NativeTable::new(vec![Column::new("id", DataType::Int)])),
            ))
            .unwrap();

        let catalog = Catalog::new();
        catalog.create_database(Arc::new(db)).unwrap();
        Arc::new(catalog)
    }

    #[test]
    fn test_dbs_listing() {
        let dir = DbsProcDir::new(catalog_with_tables());
        let result = dir.fetch_result().unwrap();
        assert_eq!(result.titles(), &["DbId", "DbName", "TableNum"]);
        assert_eq!(result.rows(), &[vec!["1", "analytics", "2"]]);
    }

    #[test]
    fn test_dbs_lookup() {
        let dir = DbsProcDir::new(catalog_with_tables());

        let entry = dir.lookup("1").unwrap();
        assert!(entry.as_dir().is_some());

        assert!(matches!(dir.lookup("2"), Err(StrataError::NotFound { .. })));
        assert!(matches!(
            dir.lookup("analytics"),
            Err(StrataError::NotFound { .. })
        ));
    }

    #[test]
    fn test_db_listing() {
        let catalog = catalog_with_tables();
        let db = catalog.database(DatabaseId::new(1)).unwrap();

        let result = DbProcDir::new(db).fetch_result().unwrap();
        assert_eq!(
            result.rows(),
            &[
                vec!["10", "logs", "EXTERNAL", "UNPARTITIONED"],
                vec!["11", "users", "NATIVE", "-"],
            ]
        );
    }

    #[test]
    fn test_table_entries() {
        let catalog = catalog_with_tables();
        let db = catalog.database(DatabaseId::new(1)).unwrap();
        let dir = TableProcDir::new(db, TableId::new(10));

        let result = dir.fetch_result().unwrap();
        assert_eq!(result.rows(), &[vec!["partitions"]]);

        assert!(dir.lookup("partitions").unwrap().as_dir().is_some());
        assert!(matches!(
            dir.lookup("schema"),
            Err(StrataError::NotFound { .. })
        ));
    }

    #[test]
    fn test_dynamic_dirs_refuse_registration() {
        let catalog = catalog_with_tables();
        let db = catalog.database(DatabaseId::new(1)).unwrap();

        let dbs = DbsProcDir::new(Arc::clone(&catalog));
        let entry = dbs.lookup("1").unwrap();
        assert!(!dbs.register("x", entry.clone()));
        assert!(!DbProcDir::new(Arc::clone(&db)).register("x", entry.clone()));
        assert!(!TableProcDir::new(db, TableId::new(10)).register("x", entry));
    }
}
