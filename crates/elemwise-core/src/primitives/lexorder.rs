//! Lexicographic ordering for complex numbers
//!
//! Real parts are compared first, imaginary parts break ties. A NaN in any
//! component of either operand makes every relation false, mirroring IEEE
//! comparison of real NaNs.

use num_complex::Complex;
use num_traits::Float;

#[inline]
fn has_nan<T: Float>(a: &Complex<T>) -> bool {
    a.re.is_nan() || a.im.is_nan()
}

#[inline]
pub fn lexorder_lt<T: Float>(a: Complex<T>, b: Complex<T>) -> bool {
    if has_nan(&a) || has_nan(&b) {
        return false;
    }
    a.re < b.re || (a.re == b.re && a.im < b.im)
}

#[inline]
pub fn lexorder_le<T: Float>(a: Complex<T>, b: Complex<T>) -> bool {
    if has_nan(&a) || has_nan(&b) {
        return false;
    }
    a.re < b.re || (a.re == b.re && a.im <= b.im)
}

#[inline]
pub fn lexorder_ge<T: Float>(a: Complex<T>, b: Complex<T>) -> bool {
    if has_nan(&a) || has_nan(&b) {
        return false;
    }
    a.re > b.re || (a.re == b.re && a.im >= b.im)
}

#[inline]
pub fn lexorder_gt<T: Float>(a: Complex<T>, b: Complex<T>) -> bool {
    if has_nan(&a) || has_nan(&b) {
        return false;
    }
    a.re > b.re || (a.re == b.re && a.im > b.im)
}
