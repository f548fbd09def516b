//! Result set assembly for proc tree nodes.
//!
//! A [`ProcResult`] is an immutable snapshot: ordered column titles plus
//! ordered rows of string cells, one row per entity. Results are created
//! fresh per fetch and never cached or mutated after construction.

use std::fmt;

use strata_common::error::{StrataError, StrataResult};

/// A single display cell.
///
/// Cell conversion is value-agnostic: any value with a `Display`
/// implementation may populate a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell(String);

impl Cell {
    /// Creates a cell from any displayable value.
    pub fn new(value: impl fmt::Display) -> Self {
        Self(value.to_string())
    }

    /// Returns the cell contents.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the cell, returning its contents.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// An immutable tabular snapshot produced by a proc tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcResult {
    titles: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ProcResult {
    /// Returns the ordered column titles.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Returns the ordered rows. Every row has exactly as many cells as
    /// there are titles.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Builder for [`ProcResult`].
///
/// The column count is fixed by the titles; [`ProcResultBuilder::build`]
/// rejects any row whose width does not match.
#[derive(Debug)]
pub struct ProcResultBuilder {
    titles: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ProcResultBuilder {
    /// Creates a builder with the given ordered column titles.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row of cells.
    pub fn row(&mut self, cells: Vec<Cell>) -> &mut Self {
        self.rows
            .push(cells.into_iter().map(Cell::into_string).collect());
        self
    }

    /// Finishes the result, verifying every row's width against the titles.
    pub fn build(self) -> StrataResult<ProcResult> {
        let width = self.titles.len();
        for row in &self.rows {
            if row.len() != width {
                return Err(StrataError::internal(format!(
                    "proc result row has {} cells, expected {}",
                    row.len(),
                    width
                )));
            }
        }
        Ok(ProcResult {
            titles: self.titles,
            rows: self.rows,
        })
    }
}
