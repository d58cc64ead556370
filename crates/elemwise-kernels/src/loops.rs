//! Loop templates every builtin kernel is instantiated from
//!
//! Each template is generic over the left operand type `L`, the right
//! operand type `R`, the common type `C` and an operation marker. Operands
//! are read, promoted to `C`, combined and written back as the operation's
//! output type. Elements are visited in ascending index order.
//!
//! # Safety Contract
//!
//! All templates operate on untyped byte pointers. Callers must ensure:
//! - `in0` and `in1` point to `n` initialised elements of `L` and `R`
//! - every output pointer is valid for writes of `n` output elements
//! - an output overlaps an input only when both describe the same elements
//!   with the same element size
//!
//! Alignment is not required; every access is unaligned-tolerant.

use elemwise_core::{BinaryOp, DualOp, Promote, Scalar};
use std::ptr;

#[inline(always)]
unsafe fn load<T: Scalar>(base: *const u8, i: usize) -> T {
    ptr::read_unaligned(base.cast::<T>().add(i))
}

#[inline(always)]
unsafe fn store<T: Scalar>(base: *mut u8, i: usize, value: T) {
    ptr::write_unaligned(base.cast::<T>().add(i), value)
}

/// Contiguous single-output loop over `n` elements
///
/// # Safety
/// See the module-level contract.
pub unsafe fn contiguous<L, R, C, Op>(in0: *const u8, in1: *const u8, out: *mut u8, n: usize)
where
    L: Promote<C>,
    R: Promote<C>,
    Op: BinaryOp<C>,
{
    for i in 0..n {
        let a = load::<L>(in0, i).promote();
        let b = load::<R>(in1, i).promote();
        store(out, i, Op::apply(a, b));
    }
}

/// Single-output operation on one pair of scalars
///
/// # Safety
/// See the module-level contract, with `n == 1`.
pub unsafe fn rank0<L, R, C, Op>(in0: *const u8, in1: *const u8, out: *mut u8)
where
    L: Promote<C>,
    R: Promote<C>,
    Op: BinaryOp<C>,
{
    let a = load::<L>(in0, 0).promote();
    let b = load::<R>(in1, 0).promote();
    store(out, 0, Op::apply(a, b));
}

/// Contiguous two-output loop; one primitive call per element
///
/// # Safety
/// See the module-level contract. `out0` and `out1` must not overlap.
pub unsafe fn contiguous_dual<L, R, C, Op>(
    in0: *const u8,
    in1: *const u8,
    out0: *mut u8,
    out1: *mut u8,
    n: usize,
) where
    L: Promote<C>,
    R: Promote<C>,
    C: Scalar,
    Op: DualOp<C>,
{
    for i in 0..n {
        let a = load::<L>(in0, i).promote();
        let b = load::<R>(in1, i).promote();
        let (first, second) = Op::apply(a, b);
        store(out0, i, first);
        store(out1, i, second);
    }
}

/// Two-output operation on one pair of scalars
///
/// # Safety
/// See [`contiguous_dual`], with `n == 1`.
pub unsafe fn rank0_dual<L, R, C, Op>(in0: *const u8, in1: *const u8, out0: *mut u8, out1: *mut u8)
where
    L: Promote<C>,
    R: Promote<C>,
    C: Scalar,
    Op: DualOp<C>,
{
    let a = load::<L>(in0, 0).promote();
    let b = load::<R>(in1, 0).promote();
    let (first, second) = Op::apply(a, b);
    store(out0, 0, first);
    store(out1, 0, second);
}
