//! Floor division and modulo
//!
//! The remainder always carries the sign of the divisor (or is zero) and the
//! quotient is the mathematical floor of the true quotient. Integer division
//! by zero and the single signed overflow case never trap.

use num_traits::{Float, PrimInt, Signed, Unsigned};

/// Floor divmod for unsigned integers; a zero divisor yields `(0, 0)`
#[inline]
pub fn divmod_unsigned<T: PrimInt + Unsigned>(a: T, b: T) -> (T, T) {
    if b.is_zero() {
        return (T::zero(), T::zero());
    }
    (a / b, a % b)
}

/// Floor divmod for signed integers
///
/// A zero divisor yields `(0, 0)` and `MIN / -1` yields `(MIN, 0)`.
#[inline]
pub fn divmod_signed<T: PrimInt + Signed>(a: T, b: T) -> (T, T) {
    if b.is_zero() {
        return (T::zero(), T::zero());
    }
    if a == T::min_value() && b == -T::one() {
        return (T::min_value(), T::zero());
    }

    let q = a / b;
    let r = a % b;
    if !r.is_zero() && r.is_negative() != b.is_negative() {
        (q - T::one(), r + b)
    } else {
        (q, r)
    }
}

/// Floor divmod for real floats
#[inline]
pub fn divmod_float<F: Float>(v: F, w: F) -> (F, F) {
    let zero = F::zero();
    let one = F::one();
    let half = one / (one + one);

    // `%` on floats is fmod: truncated, sign of the dividend
    let mut rem = v % w;
    // v - rem is mathematically an exact multiple of w, but the subtraction
    // rounds, so div is only close to integral
    let mut div = (v - rem) / w;
    if rem != zero {
        if (w < zero) != (rem < zero) {
            rem = rem + w;
            div = div - one;
        }
    } else {
        // signed zeroes: fmod is inconsistent across platforms
        rem = zero.copysign(w);
    }

    let quot = if div != zero {
        let mut floordiv = div.floor();
        if div - floordiv > half {
            floordiv = floordiv + one;
        }
        floordiv
    } else {
        zero.copysign(v / w)
    };

    (quot, rem)
}
