//! SPMX - Sparse Unbounded Multi-Dimensional Matrix
//!
//! This library provides sparse matrices addressed by unbounded signed
//! coordinates: only cells holding a non-default value occupy storage, and
//! writing the default back reclaims it.
//!
//! ## Architecture
//!
//! SPMX follows a clean core/implementation separation:
//!
//! - **spmx-core**: the sparse engines, traits and error taxonomy (no I/O)
//! - **spmx**: window rendering, densification, demos and benches
//!
//! ## Quick Start
//!
//! ```rust
//! use spmx::{Matrix2d, SparseMatrix};
//!
//! fn example() -> spmx::Result<()> {
//!     let mut matrix = Matrix2d::new(0);
//!
//!     // any signed coordinate is addressable
//!     matrix.set(1_000_000, -3, 7)?;
//!     assert_eq!(matrix.get(1_000_000, -3), 7);
//!     assert_eq!(matrix.nnz(), 1);
//!
//!     // writing the default frees the cell again
//!     matrix.set(1_000_000, -3, 0)?;
//!     assert_eq!(matrix.nnz(), 0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export core abstractions and engines
pub use spmx_core::{
    // Core traits
    MatrixElement, MatrixOperations, Occupancy, SparseMatrix,
    // Engines
    AxisMap, Cell, Cursor, Entry, Matrix2d, MatrixIter, MatrixNd, Row, RowIter,
    // Coordinates
    Coord,
    // Error handling
    ErrorCategory, Result, SparseError,
};

// Implementation modules
pub mod window;

// Public exports
pub use window::{render_occupied, render_window, to_dense, WindowConfig};
