//! Scalar numeric primitives behind every elementwise operation
//!
//! This module provides the per-element semantics the kernel templates are
//! built from:
//!
//! - floor division and modulo with the sign-of-divisor convention
//! - complex division that does not overflow on wide-range operands
//! - lexicographic ordering for complex numbers, NaN-aware
//! - one trait per operation family, implemented for each common type
//!
//! # Usage
//!
//! ```rust
//! use elemwise_core::primitives::{divmod_signed, Arithmetic, FloorDivMod};
//!
//! assert_eq!(divmod_signed(-7i32, 2), (-4, 1));
//! assert_eq!(FloorDivMod::divmod(-7.0f64, 2.0), (-4.0, 1.0));
//! assert_eq!(Arithmetic::add(250u8, 10), 4);
//! ```

pub mod cdiv;
pub mod divmod;
pub mod lexorder;
pub mod traits;

pub use cdiv::complex_divide;
pub use divmod::{divmod_float, divmod_signed, divmod_unsigned};
pub use lexorder::{lexorder_ge, lexorder_gt, lexorder_le, lexorder_lt};
pub use traits::{Arithmetic, FloorDivMod, Ordered, TrueDivide};
