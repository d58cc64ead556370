//! Complex division without intermediate overflow
//!
//! Scales by the larger divisor component (Smith's method) so `|w|^2` is
//! never formed. When both result parts come out NaN, infinities and zero
//! divisors are recovered as in C99 Annex G.

use num_complex::Complex;
use num_traits::Float;

/// `n / d` for complex operands of any float precision
#[inline]
pub fn complex_divide<T: Float>(n: Complex<T>, d: Complex<T>) -> Complex<T> {
    let (a, b) = (n.re, n.im);
    let (c, e) = (d.re, d.im);

    let (re, im) = if c.abs() >= e.abs() {
        let ratio = e / c;
        let den = c + e * ratio;
        ((a + b * ratio) / den, (b - a * ratio) / den)
    } else {
        let ratio = c / e;
        let den = c * ratio + e;
        ((a * ratio + b) / den, (b * ratio - a) / den)
    };

    if re.is_nan() && im.is_nan() {
        return recover(a, b, c, e).unwrap_or(Complex::new(re, im));
    }
    Complex::new(re, im)
}

fn recover<T: Float>(a: T, b: T, c: T, e: T) -> Option<Complex<T>> {
    let zero = T::zero();
    if c == zero && e == zero && (!a.is_nan() || !b.is_nan()) {
        let inf = T::infinity().copysign(c);
        return Some(Complex::new(inf * a, inf * b));
    }
    if (a.is_infinite() || b.is_infinite()) && c.is_finite() && e.is_finite() {
        let (a, b) = (unit_box(a), unit_box(b));
        let inf = T::infinity();
        return Some(Complex::new(inf * (a * c + b * e), inf * (b * c - a * e)));
    }
    if (c.is_infinite() || e.is_infinite()) && a.is_finite() && b.is_finite() {
        let (c, e) = (unit_box(c), unit_box(e));
        return Some(Complex::new(
            zero * (a * c + b * e),
            zero * (b * c - a * e),
        ));
    }
    None
}

/// +-1 for infinities, +-0 otherwise, keeping the sign
#[inline]
fn unit_box<T: Float>(x: T) -> T {
    let magnitude = if x.is_infinite() { T::one() } else { T::zero() };
    magnitude.copysign(x)
}
