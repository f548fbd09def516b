//! Path resolution service.
//!
//! Resolves slash-separated proc paths like
//! `/dbs/10001/10010/partitions/idx_a` by walking the tree with chained
//! lookups, starting from a statically assembled root.

use std::sync::Arc;

use strata_catalog::Catalog;
use strata_common::constants::PROC_PATH_SEPARATOR;
use strata_common::error::{StrataError, StrataResult};

use crate::node::{ProcDir, ProcEntry, StaticProcDir};
use crate::tree::DbsProcDir;

/// Entry point for proc tree navigation.
pub struct ProcService {
    root: Arc<StaticProcDir>,
}

impl ProcService {
    /// Creates the service over a catalog, with `dbs` mounted at the root.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let root = Arc::new(StaticProcDir::new());
        root.register("dbs", ProcEntry::Dir(Arc::new(DbsProcDir::new(catalog))));
        Self { root }
    }

    /// Returns the root directory.
    pub fn root(&self) -> ProcEntry {
        ProcEntry::Dir(Arc::clone(&self.root) as Arc<dyn ProcDir>)
    }

    /// Resolves a path to a proc tree entry.
    ///
    /// The path must be absolute; empty segments are ignored, so `/`,
    /// `""` and `//dbs//` all resolve. Each segment is resolved with
    /// `lookup` against current metadata.
    pub fn resolve(&self, path: &str) -> StrataResult<ProcEntry> {
        if !path.is_empty() && !path.starts_with(PROC_PATH_SEPARATOR) {
            return Err(StrataError::invalid_argument(format!(
                "proc path must be absolute: '{}'",
                path
            )));
        }
        tracing::debug!(path, "resolve proc path");

        let mut entry = self.root();
        for segment in path.split(PROC_PATH_SEPARATOR) {
            if segment.is_empty() {
                continue;
            }
            entry = entry.lookup(segment)?;
        }
        Ok(entry)
    }
}
