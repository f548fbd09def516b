//! Cluster-level database registry.
//!
//! The catalog maps database IDs to long-lived [`Database`] entities. It is
//! shared across request handlers and the synchronization process; each
//! database carries its own metadata lock, so the registry lock here is
//! held only for registry lookups and DDL on the set of databases.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use strata_common::error::{StrataError, StrataResult};
use strata_common::types::DatabaseId;

use crate::database::Database;

/// Registry of the cluster's databases.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Databases by ID.
    dbs: RwLock<BTreeMap<DatabaseId, Arc<Database>>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new database.
    pub fn create_database(&self, db: Arc<Database>) -> StrataResult<()> {
        let mut dbs = self.dbs.write();
        if dbs.contains_key(&db.id()) {
            return Err(StrataError::invalid_argument(format!(
                "database {} already exists",
                db.id()
            )));
        }
        tracing::info!(db_id = db.id().as_u64(), db_name = db.name(), "create database");
        dbs.insert(db.id(), db);
        Ok(())
    }

    /// Removes a database by ID.
    pub fn drop_database(&self, id: DatabaseId) -> StrataResult<Arc<Database>> {
        let mut dbs = self.dbs.write();
        let db = dbs
            .remove(&id)
            .ok_or_else(|| StrataError::not_found("database", id.to_string()))?;
        tracing::info!(db_id = id.as_u64(), "drop database");
        Ok(db)
    }

    /// Returns a database by ID.
    pub fn database(&self, id: DatabaseId) -> Option<Arc<Database>> {
        self.dbs.read().get(&id).cloned()
    }

    /// Returns a database by name.
    pub fn database_by_name(&self, name: &str) -> Option<Arc<Database>> {
        self.dbs.read().values().find(|db| db.name() == name).cloned()
    }

    /// Returns all databases in ID order.
    pub fn list_databases(&self) -> Vec<Arc<Database>> {
        self.dbs.read().values().cloned().collect()
    }

    /// Returns the number of databases.
    pub fn database_count(&self) -> usize {
        self.dbs.read().len()
    }
}
