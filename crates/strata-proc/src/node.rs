//! Node and directory abstractions for the proc tree.
//!
//! Every node can produce a tabular snapshot; directories additionally
//! resolve children by name. Nodes backed by dynamically-synchronized
//! catalog state refuse static registration - their subtrees are generated,
//! not user-assembled.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use strata_common::error::{StrataError, StrataResult};

use crate::result::{Cell, ProcResult, ProcResultBuilder};

/// A node in the proc tree.
pub trait ProcNode: Send + Sync {
    /// Builds a fresh snapshot of this node's metadata.
    fn fetch_result(&self) -> StrataResult<ProcResult>;
}

/// A directory node: resolves children by name.
pub trait ProcDir: ProcNode {
    /// Resolves a child by name against current metadata.
    ///
    /// Fails with `NotFound` when no entity with that name exists.
    fn lookup(&self, name: &str) -> StrataResult<ProcEntry>;

    /// Statically registers a child under this directory.
    ///
    /// Returns `false` for directories backed by dynamically-synchronized
    /// state; statically assembled directories insert the child and return
    /// `true`.
    fn register(&self, name: &str, entry: ProcEntry) -> bool {
        let _ = (name, entry);
        false
    }
}

/// A handle to a resolved proc tree entry.
#[derive(Clone)]
pub enum ProcEntry {
    /// A terminal node.
    Node(Arc<dyn ProcNode>),
    /// A directory with further children.
    Dir(Arc<dyn ProcDir>),
}

impl ProcEntry {
    /// Builds a fresh snapshot from the underlying node.
    pub fn fetch_result(&self) -> StrataResult<ProcResult> {
        match self {
            ProcEntry::Node(node) => node.fetch_result(),
            ProcEntry::Dir(dir) => dir.fetch_result(),
        }
    }

    /// Resolves a child by name.
    ///
    /// Terminal nodes have no children; looking one up is `NotFound`.
    pub fn lookup(&self, name: &str) -> StrataResult<ProcEntry> {
        match self {
            ProcEntry::Node(_) => Err(StrataError::not_found("proc entry", name)),
            ProcEntry::Dir(dir) => dir.lookup(name),
        }
    }

    /// Returns the directory capability, if this entry is a directory.
    pub fn as_dir(&self) -> Option<&Arc<dyn ProcDir>> {
        match self {
            ProcEntry::Dir(dir) => Some(dir),
            ProcEntry::Node(_) => None,
        }
    }
}

/// A statically assembled directory.
///
/// Children are registered up front and listed by name. This is the only
/// directory kind whose `register` succeeds.
#[derive(Default)]
pub struct StaticProcDir {
    children: RwLock<BTreeMap<String, ProcEntry>>,
}

impl StaticProcDir {
    /// Creates an empty static directory.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProcNode for StaticProcDir {
    fn fetch_result(&self) -> StrataResult<ProcResult> {
        let children = self.children.read();
        let mut builder = ProcResultBuilder::new(["Name"]);
        for name in children.keys() {
            builder.row(vec![Cell::new(name)]);
        }
        drop(children);
        builder.build()
    }
}

impl ProcDir for StaticProcDir {
    fn lookup(&self, name: &str) -> StrataResult<ProcEntry> {
        self.children
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| StrataError::not_found("proc entry", name))
    }

    fn register(&self, name: &str, entry: ProcEntry) -> bool {
        self.children.write().insert(name.to_string(), entry);
        true
    }
}
