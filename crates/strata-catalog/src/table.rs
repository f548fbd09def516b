//! Table entity and its variants.
//!
//! Tables are a closed tagged union: each variant carries the data its
//! capabilities need, and callers check the variant explicitly instead of
//! downcasting.

use strata_common::types::TableId;

use crate::external::ExternalTableState;
use crate::partition::{Column, PartitionInfo};

/// A table stored natively by the cluster.
#[derive(Debug, Clone)]
pub struct NativeTable {
    /// Ordered table columns.
    pub columns: Vec<Column>,
}

impl NativeTable {
    /// Creates a native table with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

/// A table whose physical state mirrors a remote search/index system.
#[derive(Debug, Clone)]
pub struct ExternalTable {
    /// How the table is partitioned.
    pub partition_info: PartitionInfo,
    /// Externally-synchronized physical index state.
    pub state: ExternalTableState,
}

impl ExternalTable {
    /// Creates an externally-backed table.
    pub fn new(partition_info: PartitionInfo, state: ExternalTableState) -> Self {
        Self {
            partition_info,
            state,
        }
    }
}

/// The kind of a table, with variant-specific data.
#[derive(Debug, Clone)]
pub enum TableVariant {
    /// Stored natively by the cluster.
    Native(NativeTable),
    /// Backed by a remote search/index system.
    External(ExternalTable),
}

impl TableVariant {
    /// Returns the variant name for display.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            TableVariant::Native(_) => "NATIVE",
            TableVariant::External(_) => "EXTERNAL",
        }
    }
}

/// A table in a database.
#[derive(Debug, Clone)]
pub struct Table {
    id: TableId,
    name: String,
    variant: TableVariant,
}

impl Table {
    /// Creates a new table.
    pub fn new(id: TableId, name: impl Into<String>, variant: TableVariant) -> Self {
        Self {
            id,
            name: name.into(),
            variant,
        }
    }

    /// Returns the table ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Returns the table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the table variant.
    pub fn variant(&self) -> &TableVariant {
        &self.variant
    }

    /// Returns a mutable reference to the table variant.
    ///
    /// Callers must hold the owning database's write lock.
    pub fn variant_mut(&mut self) -> &mut TableVariant {
        &mut self.variant
    }

    /// Returns the variant name for display.
    pub const fn type_name(&self) -> &'static str {
        self.variant.type_name()
    }

    /// Returns the external variant data, if this table is externally backed.
    pub fn as_external(&self) -> Option<&ExternalTable> {
        match &self.variant {
            TableVariant::External(external) => Some(external),
            TableVariant::Native(_) => None,
        }
    }

    /// Returns mutable external variant data, if this table is externally
    /// backed. Callers must hold the owning database's write lock.
    pub fn as_external_mut(&mut self) -> Option<&mut ExternalTable> {
        match &mut self.variant {
            TableVariant::External(external) => Some(external),
            TableVariant::Native(_) => None,
        }
    }
}
