//! Database entity and its metadata lock.
//!
//! A database owns the single reader/writer lock guarding all of its
//! tables' metadata. Readers take `read()` and see a consistent snapshot;
//! DDL and external synchronization take `write()` and mutate in place.
//! The parking_lot guards release on every exit path, including panics.

use std::collections::BTreeMap;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use strata_common::error::{StrataError, StrataResult};
use strata_common::types::{DatabaseId, TableId};

use crate::table::Table;

/// The lock-guarded metadata of a database.
#[derive(Debug, Default)]
pub struct DatabaseMeta {
    /// Tables by ID.
    tables: BTreeMap<TableId, Table>,
    /// Table name to ID index.
    names: BTreeMap<String, TableId>,
}

impl DatabaseMeta {
    /// Returns a table by ID.
    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.get(&id)
    }

    /// Returns a table by name.
    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.names.get(name).and_then(|id| self.tables.get(id))
    }

    /// Returns a mutable table reference for DDL or resynchronization.
    pub fn table_mut(&mut self, id: TableId) -> Option<&mut Table> {
        self.tables.get_mut(&id)
    }

    /// Registers a table.
    pub fn create_table(&mut self, table: Table) -> StrataResult<()> {
        if self.names.contains_key(table.name()) {
            return Err(StrataError::invalid_argument(format!(
                "table '{}' already exists",
                table.name()
            )));
        }
        self.names.insert(table.name().to_string(), table.id());
        self.tables.insert(table.id(), table);
        Ok(())
    }

    /// Drops a table by ID.
    pub fn drop_table(&mut self, id: TableId) -> StrataResult<Table> {
        let table = self
            .tables
            .remove(&id)
            .ok_or_else(|| StrataError::not_found("table", id.to_string()))?;
        self.names.remove(table.name());
        Ok(table)
    }

    /// Returns the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Iterates over tables in ID order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }
}

/// A database in the cluster catalog.
///
/// Owns the reader/writer lock coordinating all reads and writes of its
/// tables' metadata.
#[derive(Debug)]
pub struct Database {
    id: DatabaseId,
    name: String,
    meta: RwLock<DatabaseMeta>,
}

impl Database {
    /// Creates an empty database.
    pub fn new(id: DatabaseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            meta: RwLock::new(DatabaseMeta::default()),
        }
    }

    /// Returns the database ID.
    pub fn id(&self) -> DatabaseId {
        self.id
    }

    /// Returns the database name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Acquires the metadata read lock.
    ///
    /// Any number of readers proceed concurrently; a writer blocks until
    /// they release. Hold the guard only while touching shared metadata;
    /// do formatting and joining after dropping it.
    pub fn read(&self) -> RwLockReadGuard<'_, DatabaseMeta> {
        self.meta.read()
    }

    /// Acquires the metadata write lock for DDL or resynchronization.
    pub fn write(&self) -> RwLockWriteGuard<'_, DatabaseMeta> {
        self.meta.write()
    }
}
