//! Per-type primitive operations on common (computation) types
//!
//! Each operation family is one trait, implemented only for the common types
//! the promotion table can select for that family. Methods are meant to be
//! called with fully qualified syntax (`Arithmetic::add(a, b)`) to stay clear
//! of the `std::ops` and `PartialOrd` method names.

use super::cdiv::complex_divide;
use super::divmod::{divmod_float, divmod_signed, divmod_unsigned};
use super::lexorder::{lexorder_ge, lexorder_gt, lexorder_le, lexorder_lt};
use crate::numeric::{C128, C64};

/// `add`, `subtract`, `multiply`: wrap-around for integers, IEEE otherwise
pub trait Arithmetic: Copy {
    fn add(self, rhs: Self) -> Self;
    fn subtract(self, rhs: Self) -> Self;
    fn multiply(self, rhs: Self) -> Self;
}

/// Floor division and modulo, remainder with the sign of the divisor
pub trait FloorDivMod: Copy {
    fn divmod(self, rhs: Self) -> (Self, Self);
}

/// True division on floating kinds
pub trait TrueDivide: Copy {
    fn divide(self, rhs: Self) -> Self;
}

/// Ordering relations; lexicographic for complex kinds
pub trait Ordered: Copy {
    fn less(self, rhs: Self) -> bool;
    fn less_equal(self, rhs: Self) -> bool;
    fn greater_equal(self, rhs: Self) -> bool;
    fn greater(self, rhs: Self) -> bool;
}

macro_rules! impl_integer {
    ($divmod:ident: $($type:ty),*) => {
        $(
            impl Arithmetic for $type {
                #[inline(always)]
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn subtract(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline(always)]
                fn multiply(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }

            impl FloorDivMod for $type {
                #[inline(always)]
                fn divmod(self, rhs: Self) -> (Self, Self) {
                    $divmod(self, rhs)
                }
            }
        )*
    };
}

impl_integer!(divmod_unsigned: u8, u16, u32, u64);
impl_integer!(divmod_signed: i8, i16, i32, i64);

macro_rules! impl_float {
    ($($type:ty),*) => {
        $(
            impl Arithmetic for $type {
                #[inline(always)]
                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn subtract(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline(always)]
                fn multiply(self, rhs: Self) -> Self {
                    self * rhs
                }
            }

            impl FloorDivMod for $type {
                #[inline(always)]
                fn divmod(self, rhs: Self) -> (Self, Self) {
                    divmod_float(self, rhs)
                }
            }

            impl TrueDivide for $type {
                #[inline(always)]
                fn divide(self, rhs: Self) -> Self {
                    self / rhs
                }
            }
        )*
    };
}

impl_float!(f32, f64);

macro_rules! impl_ordered_real {
    ($($type:ty),*) => {
        $(
            impl Ordered for $type {
                #[inline(always)]
                fn less(self, rhs: Self) -> bool {
                    self < rhs
                }

                #[inline(always)]
                fn less_equal(self, rhs: Self) -> bool {
                    self <= rhs
                }

                #[inline(always)]
                fn greater_equal(self, rhs: Self) -> bool {
                    self >= rhs
                }

                #[inline(always)]
                fn greater(self, rhs: Self) -> bool {
                    self > rhs
                }
            }
        )*
    };
}

impl_ordered_real!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

macro_rules! impl_complex {
    ($($type:ty),*) => {
        $(
            impl Arithmetic for $type {
                #[inline(always)]
                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn subtract(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline(always)]
                fn multiply(self, rhs: Self) -> Self {
                    self * rhs
                }
            }

            impl TrueDivide for $type {
                #[inline(always)]
                fn divide(self, rhs: Self) -> Self {
                    complex_divide(self, rhs)
                }
            }

            impl Ordered for $type {
                #[inline(always)]
                fn less(self, rhs: Self) -> bool {
                    lexorder_lt(self, rhs)
                }

                #[inline(always)]
                fn less_equal(self, rhs: Self) -> bool {
                    lexorder_le(self, rhs)
                }

                #[inline(always)]
                fn greater_equal(self, rhs: Self) -> bool {
                    lexorder_ge(self, rhs)
                }

                #[inline(always)]
                fn greater(self, rhs: Self) -> bool {
                    lexorder_gt(self, rhs)
                }
            }
        )*
    };
}

impl_complex!(C64, C128);
