//! Digamma, trigamma, general polygamma and harmonic numbers.
//!
//! All four shift the argument upward with the recurrence
//! ψ⁽ⁿ⁾(x + 1) = ψ⁽ⁿ⁾(x) + (−1)ⁿ n!/xⁿ⁺¹ until an asymptotic expansion
//! about +∞ converges, and handle negative arguments by reflection.

use crate::algo::polygamma::{polygamma2, polygamma3, polygamma4, polygamma5, polygamma_n};
use crate::constants::EULER_GAMMA;
use crate::machine::SpecialFloat;
use crate::utils::{cotpi, horner, is_integer, is_non_pos_int};

/// Asymptotic coefficients of ψ(x) − ln x + 1/(2x) in powers of 1/x².
#[rustfmt::skip]
const DIGAMMA: [f64; 7] = [
    -1.0 / 12.0, 1.0 / 120.0, -1.0 / 252.0, 1.0 / 240.0,
    -1.0 / 132.0, 691.0 / 32760.0, -1.0 / 12.0,
];

/// Asymptotic coefficients of ψ′(x) beyond 1/x + 1/(2x²).
#[rustfmt::skip]
const TRIGAMMA: [f64; 8] = [
    1.0 / 6.0, -1.0 / 30.0, 1.0 / 42.0, -1.0 / 30.0,
    5.0 / 66.0, -691.0 / 2730.0, 7.0 / 6.0, -3617.0 / 510.0,
];

/// Digamma function ψ(x) = d/dx ln Γ(x).
///
/// NaN at NaN, −∞ and the poles x ∈ {0, −1, −2, …}; +∞ at +∞.
///
/// ```
/// use specfun::{digamma, EULER_GAMMA};
///
/// assert!((digamma(1.0_f64) + EULER_GAMMA).abs() < 1e-15);
/// ```
pub fn digamma<T: SpecialFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();

    if x.is_nan() || x == T::neg_infinity() || is_non_pos_int(x) {
        return T::nan();
    }
    if x == T::infinity() {
        return x;
    }

    let xmin = T::from_f64(5.0);
    let mut x = x;
    let mut res = zero;
    while x.abs() < xmin {
        res = res - one / x;
        x = x + one;
    }

    let s = one.copysign(x);
    let x = x.abs();
    let y = one / (x * x);
    res = res + x.ln() - s / T::from_f64(2.0) / x + y * horner(y, &DIGAMMA);
    if s < zero {
        res = res + T::from_f64(core::f64::consts::PI) * cotpi(x);
    }
    res
}

/// Trigamma function ψ′(x).
///
/// NaN at NaN, −∞ and the poles; 0 at +∞.
pub fn trigamma<T: SpecialFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();

    if x.is_nan() || x == T::neg_infinity() || is_non_pos_int(x) {
        return T::nan();
    }
    if x == T::infinity() {
        return zero;
    }

    let xmin = T::from_f64(8.0);
    let mut x = x;
    let mut res = zero;
    while x.abs() < xmin {
        res = res + one / (x * x);
        x = x + one;
    }

    let s = one.copysign(x);
    let x = x.abs();
    let y = one / (x * x);
    let xinv = one / x;
    res = res + s * xinv * (one + s * xinv / T::from_f64(2.0) + y * horner(y, &TRIGAMMA));
    if s < zero {
        let cot = cotpi(x);
        let pi = T::from_f64(core::f64::consts::PI);
        res = res + pi * pi * (one + cot * cot);
    }
    res
}

/// Polygamma function ψ⁽ⁿ⁾(x), the n-th derivative of [`digamma`].
///
/// NaN for `n < 0`, NaN, −∞ and the poles. Orders 0 and 1 delegate to
/// [`digamma`] and [`trigamma`]; for `n ≥ 2` the value at +∞ is 0.
///
/// ```
/// use specfun::polygamma;
///
/// // ψ''(1) = −2ζ(3)
/// let z3 = 1.2020569031595942_f64;
/// assert!((polygamma(2, 1.0_f64) + 2.0 * z3).abs() < 1e-11);
/// ```
pub fn polygamma<T: SpecialFloat>(n: i32, x: T) -> T {
    if n < 0 || x.is_nan() || x == T::neg_infinity() || is_non_pos_int(x) {
        return T::nan();
    }
    match n {
        0 => digamma(x),
        1 => trigamma(x),
        _ if x == T::infinity() => T::zero(),
        2 => polygamma2(x),
        3 => polygamma3(x),
        4 => polygamma4(x),
        5 => polygamma5(x),
        _ => polygamma_n(n, x),
    }
}

/// Harmonic number Hₓ = Σₖ₌₁ˣ 1/k, extended to real x by γ + ψ(x + 1).
///
/// Integers 1..=25 are summed directly.
///
/// ```
/// use specfun::harmonic;
///
/// assert_eq!(harmonic(2.0_f64), 1.5);
/// ```
pub fn harmonic<T: SpecialFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();

    if x == T::infinity() || x == zero || x == one {
        return x;
    }
    if x >= one && x <= T::from_f64(25.0) && is_integer(x) {
        let mut k = x;
        let mut res = one;
        while k > one {
            res = res + one / k;
            k = k - one;
        }
        return res;
    }
    T::from_f64(EULER_GAMMA) + digamma(x + one)
}
