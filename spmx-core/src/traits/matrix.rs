//! Core container abstraction traits
//!
//! This module defines the fundamental traits that both sparse engines
//! satisfy. These are pure interfaces with no concrete implementations.

use alloc::vec::Vec;

use super::element::MatrixElement;
use crate::Coord;

/// Occupancy contribution of one axis-map entry
///
/// A materialized cell contributes one, an empty placeholder contributes
/// zero, and a nested structure contributes its own occupied-cell count.
/// Size accounting at every level is the sum of these contributions.
pub trait Occupancy {
    /// Number of materialized cells reachable through this entry
    fn occupied(&self) -> usize;
}

/// Core sparse matrix trait for engine-agnostic read access
///
/// This trait provides the minimal interface that both sparse engines
/// provide, regardless of how their storage recurses.
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Number of coordinate dimensions this matrix addresses
    fn rank(&self) -> usize;

    /// The value unmaterialized coordinates read as
    fn default_value(&self) -> Self::Element;

    /// Probe a coordinate tuple without creating anything
    ///
    /// Returns `None` if the cell is not materialized or if the number of
    /// coordinates does not match the rank.
    fn get_at(&self, coords: &[Coord]) -> Option<Self::Element>;

    /// Number of materialized (non-default) cells stored
    fn nnz(&self) -> usize;
}

/// Extension trait for whole-row/column extraction
///
/// This trait provides higher-level operations that require allocation.
pub trait MatrixOperations: SparseMatrix {
    /// Get all materialized cells in a row
    ///
    /// Returns the `(column, value)` pairs of the specified row in
    /// ascending column order.
    fn row_values(&self, row: Coord) -> Vec<(Coord, Self::Element)>;

    /// Get all materialized cells in a column
    ///
    /// Returns the `(row, value)` pairs of the specified column in
    /// ascending row order.
    fn col_values(&self, col: Coord) -> Vec<(Coord, Self::Element)>;
}
