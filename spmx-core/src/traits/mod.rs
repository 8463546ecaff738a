//! Abstract interfaces shared by both sparse engines
//!
//! This module defines the trait abstractions of the crate. Traits are pure
//! interfaces - no concrete implementations.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixOperations, Occupancy, SparseMatrix};
