//! Core types for StrataDB.

mod ids;

pub use ids::{DatabaseId, PartitionId, TableId};
