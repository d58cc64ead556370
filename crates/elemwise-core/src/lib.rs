//! Core types for elementwise binary operations
//!
//! This crate provides everything an elementwise kernel needs to know before
//! it touches memory:
//!
//! 1. **Kinds** - [`TypeKind`], the comparable identity of a scalar element type
//! 2. **Elements** - [`Scalar`], [`Element`] and [`Promote`], binding kinds to Rust types
//! 3. **Primitives** - per-element numeric semantics (wrapping arithmetic,
//!    floor divmod, lexicographic complex ordering)
//! 4. **Promotion** - the static table of common and result kinds per
//!    operation family and operand pair
//!
//! # Example
//!
//! ```rust
//! use elemwise_core::{promotion, Operation, TypeKind};
//!
//! let entry = promotion::resolve(Operation::Add, TypeKind::Uint8, TypeKind::Int8).unwrap();
//! assert_eq!(entry.common, TypeKind::Int16);
//!
//! let err = promotion::resolve(Operation::Divide, TypeKind::Uint64, TypeKind::Uint64);
//! assert!(err.unwrap_err().is_unsupported());
//! ```

pub mod error;
pub mod kind;
pub mod numeric;
pub mod ops;
pub mod primitives;
pub mod promotion;

pub use error::{Error, Result};
pub use kind::TypeKind;
pub use numeric::{Element, Promote, Scalar, C128, C64};
pub use ops::{BinaryOp, DualOp, OpFamily, Operation};
pub use promotion::{Availability, PromotionEntry, PROMOTION_TABLE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::kind::TypeKind;
    pub use crate::numeric::{Element, Promote, Scalar, C128, C64};
    pub use crate::ops::{BinaryOp, DualOp, OpFamily, Operation};
    pub use crate::promotion::{Availability, PromotionEntry};
}
