//! Error types for elementwise operations
//!
//! Provides a unified error type for all elemwise crates.

use crate::kind::TypeKind;
use thiserror::Error;

/// Core error type for promotion, dispatch and registry operations
#[derive(Error, Debug)]
pub enum Error {
    /// No executable promotion entry or kernel exists for the operand kinds.
    ///
    /// This is reported the same way whether the pairing is mathematically
    /// undefined or simply has no implementation in this build.
    #[error("Unsupported operand kinds for {op}: ({left}, {right})")]
    UnsupportedOperand {
        op: String,
        left: TypeKind,
        right: TypeKind,
    },

    /// Operation name not recognised
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Type kind name not recognised
    #[error("Unknown type kind: {0}")]
    UnknownKind(String),

    /// Memory could not be reserved
    #[error("Memory error: {0}")]
    Allocation(String),

    /// The function already holds the maximum number of kernels
    #[error("{function}: maximum number of kernels reached ({capacity})")]
    CapacityExceeded { function: String, capacity: usize },

    /// No function with that name is registered
    #[error("Function not found: {0}")]
    FunctionNotFound(String),

    /// A function with that name is already registered
    #[error("Function already exists: {0}")]
    DuplicateFunction(String),

    /// A typed call used an element type that does not match the kernel
    #[error("Kind mismatch: expected {expected}, got {actual}")]
    KindMismatch { expected: TypeKind, actual: TypeKind },

    /// Single-output call on a dual-output kernel, or the other way round
    #[error("Arity mismatch: kernel has {expected} output(s), call provides {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an operation that has no kernel for the pair
    pub fn unsupported(op: impl Into<String>, left: TypeKind, right: TypeKind) -> Self {
        Self::UnsupportedOperand {
            op: op.into(),
            left,
            right,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error from a failed reservation
    pub fn allocation(context: &str, err: std::collections::TryReserveError) -> Self {
        Self::Allocation(format!("{context}: {err}"))
    }

    /// Whether the error means "operation undefined for these types"
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperand { .. })
    }
}
