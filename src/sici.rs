//! Sine and cosine integrals.

use core::f64::consts::FRAC_PI_2;

use crate::algo::sici::{aux_f, aux_g, ci_large, cin_small, si_small};
use crate::constants::EULER_GAMMA;
use crate::machine::SpecialFloat;

/// Sine integral Si(x) = ∫₀ˣ sin(t)/t dt.
///
/// Odd in x, with Si(±∞) = ±π/2.
///
/// ```
/// use specfun::si;
///
/// assert!((si(1.0_f64) - 0.946083070367183).abs() < 1e-14);
/// ```
pub fn si<T: SpecialFloat>(x: T) -> T {
    let half_pi = T::from_f64(FRAC_PI_2);

    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return half_pi.copysign(x);
    }
    let xabs = x.abs();
    if xabs <= T::from_f64(4.0) {
        return si_small(x);
    }
    let s = T::one().copysign(x);
    let (sin, cos) = xabs.sin_cos();
    s * (half_pi - cos * aux_f(xabs) - sin * aux_g(xabs))
}

/// Cosine integral Ci(x) = γ + ln x − Cin(x), defined for x ≥ 0.
///
/// NaN for negative x, −∞ at 0 and 0 at +∞.
pub fn ci<T: SpecialFloat>(x: T) -> T {
    if x < T::zero() {
        return T::nan();
    }
    if x == T::infinity() {
        return T::zero();
    }
    if x <= T::from_f64(4.0) {
        return T::from_f64(EULER_GAMMA) + x.ln() - cin_small(x);
    }
    ci_large(x)
}

/// Entire cosine integral Cin(x) = ∫₀ˣ (1 − cos t)/t dt.
///
/// Even in x; returns |x| for 0, NaN and ±∞.
///
/// ```
/// use specfun::cin;
///
/// assert_eq!(cin(-10.0_f64), cin(10.0_f64));
/// ```
pub fn cin<T: SpecialFloat>(x: T) -> T {
    let x = x.abs();
    if x.is_nan() || x.is_infinite() || x == T::zero() {
        return x;
    }
    if x <= T::from_f64(4.0) {
        return cin_small(x);
    }
    T::from_f64(EULER_GAMMA) + x.ln() - ci_large(x)
}
