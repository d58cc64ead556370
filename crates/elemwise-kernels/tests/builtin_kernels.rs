//! Behaviour of the generated builtin kernels

mod common;

use approx::assert_relative_eq;
use common::edge_case_lengths;
use elemwise_core::{Error, TypeKind, C128, C64};
use elemwise_kernels::{Kernel, Registry};
use num_complex::Complex;
use proptest::prelude::*;
use std::sync::OnceLock;

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| Registry::with_builtins().unwrap())
}

fn kernel(name: &str, left: TypeKind, right: TypeKind) -> &'static Kernel {
    registry().resolve(name, left, right).unwrap()
}

#[test]
fn test_uint8_addition_wraps() {
    let add = kernel("add", TypeKind::Uint8, TypeKind::Uint8);
    assert_eq!(add.result(), TypeKind::Uint8);
    assert_eq!(add.apply_scalar::<u8, u8, u8>(250, 10).unwrap(), 4);
}

#[test]
fn test_mixed_integer_promotion() {
    let sub = kernel("subtract", TypeKind::Uint16, TypeKind::Int8);
    assert_eq!(sub.result(), TypeKind::Int32);
    let mut out = [0i32; 3];
    sub.apply_slices(&[0u16, 65535, 100], &[1i8, -128, 100], &mut out)
        .unwrap();
    assert_eq!(out, [-1, 65663, 0]);
}

#[test]
fn test_contiguous_matches_rank0() {
    let mul = kernel("multiply", TypeKind::Int16, TypeKind::Float32);
    assert_eq!(mul.result(), TypeKind::Float32);
    for n in edge_case_lengths() {
        let a: Vec<i16> = (0..n).map(|i| i as i16 * 37 - 200).collect();
        let b: Vec<f32> = (0..n).map(|i| i as f32 * 0.25 - 1.0).collect();
        let mut out = vec![f32::NAN; n];
        mul.apply_slices(&a, &b, &mut out).unwrap();
        for i in 0..n {
            let expected: f32 = mul.apply_scalar(a[i], b[i]).unwrap();
            assert_eq!(out[i], expected, "n = {n}, i = {i}");
        }
    }
}

#[test]
fn test_true_divide_result_kinds() {
    let entry = elemwise_core::promotion::lookup(
        elemwise_core::OpFamily::TrueDivide,
        TypeKind::Uint8,
        TypeKind::Uint8,
    )
    .unwrap();
    assert!(entry.result.is_real());

    let div = kernel("divide", TypeKind::Uint16, TypeKind::Uint16);
    assert_eq!(div.result(), TypeKind::Float32);
    let q: f32 = div.apply_scalar(7u16, 2u16).unwrap();
    assert_eq!(q, 3.5);

    let div = kernel("divide", TypeKind::Int32, TypeKind::Int32);
    let q: f64 = div.apply_scalar(1i32, 3i32).unwrap();
    assert_relative_eq!(q, 1.0 / 3.0);
    let inf: f64 = div.apply_scalar(1i32, 0i32).unwrap();
    assert!(inf.is_infinite());

    let err = registry()
        .resolve("divide", TypeKind::Uint64, TypeKind::Uint64)
        .unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn test_complex_division() {
    let div = kernel("divide", TypeKind::Complex64, TypeKind::Float32);
    assert_eq!(div.result(), TypeKind::Complex64);
    let q: C64 = div.apply_scalar(Complex::new(3.0f32, -6.0), 3.0f32).unwrap();
    assert_eq!(q, Complex::new(1.0, -2.0));
}

#[test]
fn test_complex_division_wide_range() {
    let div = kernel("divide", TypeKind::Complex128, TypeKind::Complex128);
    let z = Complex::new(1e200f64, 1e200);
    let mut out = [C128::default(); 2];
    div.apply_slices(&[z, Complex::new(1.0, 2.0)], &[z, C128::default()], &mut out)
        .unwrap();
    assert_eq!(out[0], Complex::new(1.0, 0.0));
    assert!(out[1].re.is_infinite() && out[1].im.is_infinite());
}

#[test]
fn test_entry_points_write_declared_width() {
    const SENTINEL: u8 = 0xAA;
    let zeros = [0u8; 16];
    for row in elemwise_kernels::builtin_loops() {
        let kernel = row.kernel();
        let width = kernel.result().size();
        let mut out0 = [SENTINEL; 32];
        let mut out1 = [SENTINEL; 32];
        // SAFETY: one element per buffer, each at least 16 bytes long
        unsafe {
            match kernel.function() {
                elemwise_kernels::KernelFn::Binary { contiguous, .. } => {
                    contiguous(zeros.as_ptr(), zeros.as_ptr(), out0.as_mut_ptr(), 1)
                }
                elemwise_kernels::KernelFn::Dual { contiguous, .. } => contiguous(
                    zeros.as_ptr(),
                    zeros.as_ptr(),
                    out0.as_mut_ptr(),
                    out1.as_mut_ptr(),
                    1,
                ),
            }
        }
        assert!(out0[width..].iter().all(|&b| b == SENTINEL), "{:?}", row);
        assert!(out1[width..].iter().all(|&b| b == SENTINEL), "{:?}", row);
    }
}

#[test]
fn test_floor_divide_and_remainder() {
    let fd = kernel("floor_divide", TypeKind::Int8, TypeKind::Int8);
    let rem = kernel("remainder", TypeKind::Int8, TypeKind::Int8);
    let a = [7i8, -7, 7, -7, i8::MIN, 5];
    let b = [2i8, 2, -2, -2, -1, 0];
    let mut q = [0i8; 6];
    let mut r = [0i8; 6];
    fd.apply_slices(&a, &b, &mut q).unwrap();
    rem.apply_slices(&a, &b, &mut r).unwrap();
    assert_eq!(q, [3, -4, -4, 3, i8::MIN, 0]);
    assert_eq!(r, [1, 1, -1, -1, 0, 0]);

    let fd = kernel("floor_divide", TypeKind::Float64, TypeKind::Int32);
    let q: f64 = fd.apply_scalar(-7.5f64, 2i32).unwrap();
    assert_eq!(q, -4.0);

    assert!(registry()
        .resolve("remainder", TypeKind::Complex128, TypeKind::Complex128)
        .is_err());
}

#[test]
fn test_divmod() {
    let divmod = kernel("divmod", TypeKind::Int32, TypeKind::Int32);
    assert_eq!(divmod.nout(), 2);
    assert_eq!(divmod.apply_scalar_dual::<i32, i32, i32>(7, 2).unwrap(), (3, 1));

    let err = registry()
        .resolve("divmod", TypeKind::Int32, TypeKind::Float64)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperand { ref op, .. } if op == "divmod"));

    let divmod = kernel("divmod", TypeKind::Float32, TypeKind::Float32);
    let mut q = [0.0f32; 3];
    let mut r = [0.0f32; 3];
    divmod
        .apply_slices_dual(&[7.0f32, -7.0, 1.0], &[2.0f32, 2.0, 0.0], &mut q, &mut r)
        .unwrap();
    assert_eq!(&q[..2], &[3.0, -4.0]);
    assert_eq!(&r[..2], &[1.0, 1.0]);
    assert!(q[2].is_nan() && r[2].is_nan());
}

#[test]
fn test_complex_nan_comparisons() {
    let names = ["less", "less_equal", "greater_equal", "greater"];
    let nan = Complex::new(f64::NAN, 0.0);
    let one = Complex::new(1.0f64, 0.0);
    for name in names {
        let k = kernel(name, TypeKind::Complex128, TypeKind::Complex128);
        assert_eq!(k.result(), TypeKind::Bool);
        for (a, b) in [(nan, nan), (nan, one), (one, nan)] {
            let flag: bool = k.apply_scalar::<C128, C128, bool>(a, b).unwrap();
            assert!(!flag, "{name}({a}, {b})");
        }
    }
}

#[test]
fn test_complex_lexicographic_order() {
    let less = kernel("less", TypeKind::Complex128, TypeKind::Complex128);
    let less_equal = kernel("less_equal", TypeKind::Complex128, TypeKind::Complex128);
    let c = |re: f64, im: f64| Complex::new(re, im);

    assert!(less.apply_scalar::<C128, C128, bool>(c(1.0, 2.0), c(1.0, 3.0)).unwrap());
    assert!(!less.apply_scalar::<C128, C128, bool>(c(2.0, 0.0), c(1.0, 5.0)).unwrap());
    assert!(less_equal.apply_scalar::<C128, C128, bool>(c(1.0, 2.0), c(1.0, 2.0)).unwrap());

    let greater = kernel("greater", TypeKind::Float64, TypeKind::Complex64);
    let flag: bool = greater
        .apply_scalar(2.0f64, Complex::new(2.0f32, -1.0))
        .unwrap();
    assert!(flag);
}

#[test]
fn test_wrong_element_type_is_rejected() {
    let add = kernel("add", TypeKind::Uint8, TypeKind::Uint8);
    let mut out = [0u16; 2];
    let err = add.apply_slices(&[1u8, 2], &[1u8, 2], &mut out).unwrap_err();
    assert!(matches!(err, Error::KindMismatch { .. }));
    assert_eq!(out, [0, 0]);
}

#[test]
fn test_no_kernels_for_inert_or_bool_kinds() {
    for name in ["add", "less", "divide", "divmod"] {
        let entry = registry().get(name).unwrap();
        for k in entry.kernels() {
            for kind in [k.left(), k.right()] {
                assert!(!kind.is_inert() && !kind.is_bool(), "{name}: {kind}");
            }
        }
    }
    assert!(registry()
        .resolve("add", TypeKind::Float16, TypeKind::Float16)
        .is_err());
    assert!(registry()
        .resolve("less", TypeKind::Bool, TypeKind::Bool)
        .is_err());
}

proptest! {
    #[test]
    fn prop_floor_identity_int32(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(b != 0);
        let divmod = kernel("divmod", TypeKind::Int32, TypeKind::Int32);
        let (q, r) = divmod.apply_scalar_dual::<i32, i32, i32>(a, b).unwrap();
        if a == i32::MIN && b == -1 {
            prop_assert_eq!((q, r), (i32::MIN, 0));
        } else {
            prop_assert_eq!(q as i64 * b as i64 + r as i64, a as i64);
            prop_assert!(r == 0 || (r < 0) == (b < 0));
        }
    }

    #[test]
    fn prop_integer_division_by_zero(a in any::<i64>(), u in any::<u16>()) {
        let fd = kernel("floor_divide", TypeKind::Int64, TypeKind::Int64);
        let rem = kernel("remainder", TypeKind::Int64, TypeKind::Int64);
        prop_assert_eq!(fd.apply_scalar::<i64, i64, i64>(a, 0).unwrap(), 0);
        prop_assert_eq!(rem.apply_scalar::<i64, i64, i64>(a, 0).unwrap(), 0);

        let fd = kernel("floor_divide", TypeKind::Uint16, TypeKind::Uint16);
        prop_assert_eq!(fd.apply_scalar::<u16, u16, u16>(u, 0).unwrap(), 0);
    }

    #[test]
    fn prop_wrapping_add_u8(a in any::<u8>(), b in any::<u8>()) {
        let add = kernel("add", TypeKind::Uint8, TypeKind::Uint8);
        prop_assert_eq!(add.apply_scalar::<u8, u8, u8>(a, b).unwrap(), a.wrapping_add(b));
    }
}
