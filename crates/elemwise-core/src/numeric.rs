//! Element traits binding Rust storage types to type kinds
//!
//! This module provides the type foundation the kernel templates are
//! instantiated over:
//!
//! - [`Scalar`]: any storable element type, tagged with its [`TypeKind`]
//! - [`Element`]: a scalar that can be read back from raw memory (every
//!   bit pattern valid), i.e. every kind except `bool`
//! - [`Promote`]: conversion of an operand into the common computation type
//!
//! Complex kinds are named by total width: `complex64` is stored as
//! `Complex<f32>` and `complex128` as `Complex<f64>`.

use crate::kind::TypeKind;
use bytemuck::Pod;
use num_complex::Complex;
use std::fmt::Debug;

/// Storage type of `complex64`
pub type C64 = Complex<f32>;

/// Storage type of `complex128`
pub type C128 = Complex<f64>;

/// Base trait for element types a kernel may store
pub trait Scalar: Copy + Debug + Send + Sync + 'static {
    /// The kind this type stores
    const KIND: TypeKind;
}

/// Scalar types that can be read from arbitrary initialised memory
pub trait Element: Scalar + Pod {}

/// Conversion of an operand into the common type `C`
///
/// Follows C cast semantics: integer narrowing truncates, widening
/// sign- or zero-extends, integer to float rounds to nearest, real to
/// complex sets a zero imaginary part.
pub trait Promote<C>: Element {
    fn promote(self) -> C;
}

macro_rules! impl_scalar {
    ($($type:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $type {
                const KIND: TypeKind = TypeKind::$kind;
            }
        )*
    };
}

impl_scalar!(
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    C64 => Complex64,
    C128 => Complex128,
    bool => Bool,
);

impl Element for u8 {}
impl Element for u16 {}
impl Element for u32 {}
impl Element for u64 {}
impl Element for i8 {}
impl Element for i16 {}
impl Element for i32 {}
impl Element for i64 {}
impl Element for f32 {}
impl Element for f64 {}
impl Element for C64 {}
impl Element for C128 {}

// Real to real: plain `as` casts for every ordered pair
macro_rules! impl_promote_real {
    ($($from:ty),*) => {
        $( impl_promote_real!(@to $from; u8, u16, u32, u64, i8, i16, i32, i64, f32, f64); )*
    };
    (@to $from:ty; $($to:ty),*) => {
        $(
            impl Promote<$to> for $from {
                #[inline(always)]
                fn promote(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}

impl_promote_real!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

// Real to complex: zero imaginary part
macro_rules! impl_promote_complex {
    ($($from:ty),*) => {
        $(
            impl Promote<C64> for $from {
                #[inline(always)]
                fn promote(self) -> C64 {
                    Complex::new(self as f32, 0.0)
                }
            }

            impl Promote<C128> for $from {
                #[inline(always)]
                fn promote(self) -> C128 {
                    Complex::new(self as f64, 0.0)
                }
            }
        )*
    };
}

impl_promote_complex!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl Promote<C64> for C64 {
    #[inline(always)]
    fn promote(self) -> C64 {
        self
    }
}

impl Promote<C128> for C64 {
    #[inline(always)]
    fn promote(self) -> C128 {
        Complex::new(self.re as f64, self.im as f64)
    }
}

impl Promote<C128> for C128 {
    #[inline(always)]
    fn promote(self) -> C128 {
        self
    }
}
