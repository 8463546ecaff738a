//! Dense window rendering over sparse matrices
//!
//! A sparse matrix has no bounds, so console output works through an
//! explicit window: a rectangular coordinate range rendered densely by
//! reading through the defaults.

use std::fmt::Display;
use std::ops::Range;

use crate::{Coord, Matrix2d, MatrixElement};

/// Rectangular fragment of the coordinate plane selected for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    /// Row range, half-open
    pub rows: Range<Coord>,
    /// Column range, half-open
    pub cols: Range<Coord>,
}

impl WindowConfig {
    /// Window over `rows` x `cols`
    pub const fn new(rows: Range<Coord>, cols: Range<Coord>) -> Self {
        Self { rows, cols }
    }

    /// Replace the row range
    pub fn with_rows(mut self, rows: Range<Coord>) -> Self {
        self.rows = rows;
        self
    }

    /// Replace the column range
    pub fn with_cols(mut self, cols: Range<Coord>) -> Self {
        self.cols = cols;
        self
    }

    /// Number of cells the window covers
    pub fn area(&self) -> usize {
        let height = self.rows.end.saturating_sub(self.rows.start).max(0) as usize;
        let width = self.cols.end.saturating_sub(self.cols.start).max(0) as usize;
        height * width
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(0..10, 0..10)
    }
}

/// Render the window densely, one console line per row, cells separated
/// by single spaces
///
/// Unmaterialized coordinates render as the matrix default; nothing is
/// created by rendering.
pub fn render_window<T>(matrix: &Matrix2d<T>, window: &WindowConfig) -> String
where
    T: MatrixElement + Display,
{
    let mut out = String::new();
    for row in window.rows.clone() {
        let line = window
            .cols
            .clone()
            .map(|col| matrix.get(row, col).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// List every materialized cell as one `row col value` line, in row-major
/// ascending order
pub fn render_occupied<T>(matrix: &Matrix2d<T>) -> String
where
    T: MatrixElement + Display,
{
    let mut out = String::new();
    for (row, col, value) in matrix.iter() {
        out.push_str(&format!("{row} {col} {value}\n"));
    }
    out
}

/// Materialize the window into a dense row-major matrix of values
pub fn to_dense<T: MatrixElement>(matrix: &Matrix2d<T>, window: &WindowConfig) -> Vec<Vec<T>> {
    window
        .rows
        .clone()
        .map(|row| {
            window
                .cols
                .clone()
                .map(|col| matrix.get(row, col))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparseMatrix;

    fn diagonal_matrix() -> Matrix2d<i32> {
        let mut m = Matrix2d::new(0);
        for i in 0..10 {
            m.set(i, i, i as i32).unwrap();
        }
        for i in 0..10 {
            m.set(i, 9 - i, (9 - i) as i32).unwrap();
        }
        m
    }

    #[test]
    fn renders_the_inner_fragment_of_the_diagonal_fill() {
        let m = diagonal_matrix();
        let rendered = render_window(&m, &WindowConfig::new(1..9, 1..9));
        let expected = "\
1 0 0 0 0 0 0 8
0 2 0 0 0 7 0 0
0 0 3 6 0 0 0 0
0 0 0 4 5 0 0 0
0 0 0 4 5 0 0 0
0 0 3 6 0 0 0 0
0 2 0 0 0 7 0 0
1 0 0 0 0 0 0 8
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn rendering_does_not_materialize_anything() {
        let m: Matrix2d<i32> = Matrix2d::new(3);
        let rendered = render_window(&m, &WindowConfig::new(0..2, 0..2));
        assert_eq!(rendered, "3 3\n3 3\n");
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn window_builder_and_area() {
        let window = WindowConfig::default().with_rows(-2..2).with_cols(0..3);
        assert_eq!(window.rows, -2..2);
        assert_eq!(window.cols, 0..3);
        assert_eq!(window.area(), 12);
        assert_eq!(WindowConfig::new(5..5, 0..4).area(), 0);
    }

    #[test]
    fn dense_extraction_reads_through_defaults() {
        let mut m = Matrix2d::new(-1);
        m.set(0, 1, 5).unwrap();
        let dense = to_dense(&m, &WindowConfig::new(0..2, 0..2));
        assert_eq!(dense, [[-1, 5], [-1, -1]]);
    }

    #[test]
    fn occupied_listing_is_row_major() {
        let mut m = Matrix2d::new(0);
        m.set(2, 0, 20).unwrap();
        m.set(-1, 4, 14).unwrap();
        m.set(2, -5, 25).unwrap();
        assert_eq!(render_occupied(&m), "-1 4 14\n2 -5 25\n2 0 20\n");
    }
}
