#![no_std]

//! SPMX Core - Sparse Unbounded Matrix Engines
//!
//! This crate provides the core engines and traits for sparse matrices with
//! unbounded signed coordinates: only cells holding a non-default value
//! occupy storage, and writing the default back reclaims it.

extern crate alloc;

pub mod axis;
pub mod cell;
pub mod error;
pub mod matrix2d;
pub mod ndim;
pub mod traits;

pub use axis::*;
pub use cell::*;
pub use error::*;
pub use matrix2d::*;
pub use ndim::*;
pub use traits::*;

/// Signed coordinate along one matrix axis, unbounded in either direction
pub type Coord = i64;
