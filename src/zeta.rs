//! Riemann zeta and Dirichlet eta functions.

use core::f64::consts::LN_2;

use crate::algo::zeta::{reflect, zeta_right};
use crate::machine::SpecialFloat;

/// Below this, ζ(s) comes from the functional equation.
const REFLECT_BELOW: f64 = -0.5;

#[inline]
fn is_neg_even_integer<T: SpecialFloat>(s: T) -> bool {
    let half = s * T::from_f64(0.5);
    s < T::zero() && s.is_finite() && half == half.trunc()
}

/// Riemann zeta function ζ(s) = Σ n⁻ˢ, analytically continued.
///
/// ζ(1) = +∞, ζ(0) = −1/2, ζ(+∞) = 1 and ζ vanishes at the negative even
/// integers. ζ(−∞) oscillates without bound and gives NaN.
///
/// ```
/// use specfun::zeta;
///
/// let pi = core::f64::consts::PI;
/// assert!((zeta(2.0_f64) - pi * pi / 6.0).abs() < 1e-15);
/// assert!((zeta(-1.0_f64) + 1.0 / 12.0).abs() < 1e-15);
/// ```
pub fn zeta<T: SpecialFloat>(s: T) -> T {
    let one = T::one();

    if s.is_nan() || s == T::neg_infinity() {
        return T::nan();
    }
    if s == T::infinity() {
        return one;
    }
    if s == one {
        return T::infinity();
    }
    if s == T::zero() {
        return T::from_f64(-0.5);
    }
    if is_neg_even_integer(s) {
        return T::zero();
    }
    if s <= T::from_f64(REFLECT_BELOW) {
        return reflect(s);
    }
    zeta_right(s)
}

/// Dirichlet eta function η(s) = Σ (−1)ⁿ⁺¹ n⁻ˢ = (1 − 2¹⁻ˢ) ζ(s).
///
/// η(1) = ln 2, η(0) = 1/2, η(−1) = 1/4, η(+∞) = 1; NaN for NaN and −∞.
///
/// ```
/// use specfun::eta;
///
/// assert!((eta(1.0_f64) - core::f64::consts::LN_2).abs() < 1e-16);
/// ```
pub fn eta<T: SpecialFloat>(s: T) -> T {
    let one = T::one();

    if s.is_nan() || s == T::neg_infinity() {
        return T::nan();
    }
    if s == T::infinity() {
        return one;
    }
    if s == T::zero() {
        return T::from_f64(0.5);
    }
    if s == one {
        return T::from_f64(LN_2);
    }
    if s == -one {
        return T::from_f64(0.25);
    }
    if is_neg_even_integer(s) {
        return T::zero();
    }
    // 1 − 2¹⁻ˢ without cancellation near s = 1
    -((one - s) * T::from_f64(LN_2)).exp_m1() * zeta(s)
}
