//! Error types for sparse matrix operations

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SparseError {
    /// A new map entry or cell could not be created
    AllocationFailed,
    /// An iteration cursor was dereferenced past its last element
    CursorExhausted,
    /// A scalar read was attempted on a sub-matrix handle
    ScalarReadOfSubmatrix,
    /// A scalar write was attempted on a sub-matrix handle
    ScalarWriteToSubmatrix,
    /// An index operation was attempted on a leaf value handle
    IndexIntoValue,
    /// A coordinate slice did not match the matrix rank
    RankMismatch,
}

/// Coarse classification of sparse matrix errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// Storage could not be obtained; fatal to the operation in progress
    Allocation,
    /// Misuse of the iteration protocol
    Iteration,
    /// A malformed indexing chain reached a guarded operation
    Contract,
}

impl SparseError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SparseError::AllocationFailed => ErrorCategory::Allocation,
            SparseError::CursorExhausted => ErrorCategory::Iteration,
            SparseError::ScalarReadOfSubmatrix
            | SparseError::ScalarWriteToSubmatrix
            | SparseError::IndexIntoValue
            | SparseError::RankMismatch => ErrorCategory::Contract,
        }
    }

    /// True for errors that only a malformed indexing chain can produce
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self.category(), ErrorCategory::Contract)
    }
}

impl core::fmt::Display for SparseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SparseError::AllocationFailed => "Failed to create a map entry",
            SparseError::CursorExhausted => "Cursor dereferenced past the last occupied cell",
            SparseError::ScalarReadOfSubmatrix => "Scalar read of a sub-matrix handle",
            SparseError::ScalarWriteToSubmatrix => "Scalar write to a sub-matrix handle",
            SparseError::IndexIntoValue => "Index operation on a leaf value handle",
            SparseError::RankMismatch => "Coordinate count does not match matrix rank",
        };
        write!(f, "{msg}")
    }
}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SparseError>;
