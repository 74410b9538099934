//! Exponential integral kernels.
//!
//! `Ei(x)` is split into four regions by |x|: a Taylor series about zero,
//! an asymptotic series for |x| ≥ 50, a continued fraction for x < −3 and
//! the convergent power series for 3 < x < 50. `Eₙ(x)` uses a continued
//! fraction for large x or n and forward recurrence from E₁ otherwise.

#![allow(clippy::excessive_precision)]

use crate::constants::EULER_GAMMA;
use crate::machine::SpecialFloat;
use crate::utils::horner;

/// 1/(k·k!) for k = 1..26, the coefficients of Ei(x) − γ − ln|x|.
#[rustfmt::skip]
const EI_SMALL: [f64; 26] = [
    1.0,
    1.0 / 4.0,
    1.0 / 18.0,
    1.0 / 96.0,
    1.0 / 600.0,
    1.0 / 4320.0,
    1.0 / 35280.0,
    1.0 / 322560.0,
    1.0 / 3265920.0,
    1.0 / 36288000.0,
    1.0 / 439084800.0,
    1.0 / 5748019200.0,
    1.0 / 80951270400.0,
    1.0 / 1220496076800.0,
    1.0 / 19615115520000.0,
    1.0 / 334764638208000.0,
    1.0 / 6046686277632000.0,
    1.0 / 115242726703104000.0,
    1.0 / 2311256907767808000.0,
    1.0 / 48658040163532800000.0,
    1.0 / 1072909785605898240000.0,
    1.0 / 24728016011107368960000.0,
    1.0 / 594596384994354462720000.0,
    1.0 / 14890761641597746544640000.0,
    1.0 / 387780251083274649600000000.0,
    1.0 / 10485577989291746525184000000.0,
];

/// k! for k = 0..12, the asymptotic series e^x/x · Σ k!/xᵏ.
#[rustfmt::skip]
const EI_LARGE: [f64; 13] = [
    1.0, 1.0, 2.0, 6.0, 24.0, 120.0, 720.0, 5040.0, 40320.0, 362880.0,
    3628800.0, 39916800.0, 479001600.0,
];

const EI_CF_DEPTH: usize = 20;
const EI_SERIES_MAX_ITER: usize = 1000;
const EN_CF_DEPTH: usize = 15;

/// Ei(x) for |x| ≤ 3.
pub(crate) fn ei_small<T: SpecialFloat>(x: T) -> T {
    x.abs().ln() + T::from_f64(EULER_GAMMA) + x * horner(x, &EI_SMALL)
}

/// Ei(x) for |x| ≥ 50.
pub(crate) fn ei_large<T: SpecialFloat>(x: T) -> T {
    let y = T::one() / x;
    let sum = y * horner(y, &EI_LARGE);
    // e^x · sum evaluated as e^(x + ln|sum|) to stay finite near the
    // overflow threshold.
    let s = T::one().copysign(sum);
    s * (x + sum.abs().ln()).exp()
}

/// Ei(x) for −50 < x < −3 from the continued fraction of E₁(−x).
pub(crate) fn ei_cf<T: SpecialFloat>(x: T) -> T {
    let two = T::from_f64(2.0);

    let mut depth = EI_CF_DEPTH;
    let mut an = T::from_f64((2 * depth - 1) as f64) - x;
    let mut bn = -T::from_f64((depth * depth) as f64);
    let mut res = an;
    while depth > 1 {
        depth -= 1;
        an = an - two;
        bn = bn + T::from_f64((2 * depth + 1) as f64);
        res = an + bn / res;
    }
    -x.exp() / res
}

/// Ei(x) for 3 < x < 50 from γ + ln x + Σ xᵏ/(k·k!).
pub(crate) fn ei_series<T: SpecialFloat>(x: T) -> T {
    let tol = T::tol();

    let mut res = x.abs().ln() + T::from_f64(EULER_GAMMA) + x;
    let mut tmp = x;
    let mut i = 2usize;
    while i < EI_SERIES_MAX_ITER && (tmp / res).abs() > tol {
        // Five terms per convergence check.
        for _ in 0..5 {
            let fi = i as f64;
            tmp = tmp * x * T::from_f64((fi - 1.0) / (fi * fi));
            res = res + tmp;
            i += 1;
        }
    }
    res
}

/// Eₙ(x) from its continued fraction; used for x > 5 or n ≥ 100.
pub(crate) fn en_cf<T: SpecialFloat>(n: i32, x: T) -> T {
    let one = T::one();

    let mut res = one;
    for depth in (1..=EN_CF_DEPTH).rev() {
        let b1 = T::from_f64(f64::from(n) + depth as f64 - 1.0);
        let b2 = T::from_f64(depth as f64);
        res = x + b1 / (one + b2 / res);
    }
    (-x).exp() / res
}

/// Eₙ(x) for n ≥ 2 by forward recurrence
/// Eₙ₊₁(x) = (e^−x − x·Eₙ(x))/n, starting from `e1 = E₁(x)`.
pub(crate) fn en_rec<T: SpecialFloat>(n: i32, x: T, e1: T) -> T {
    let u = (-x).exp();
    // k·Eₖ₊₁(x), starting at k = 1.
    let mut res = u - e1 * x;
    for i in 1..n - 1 {
        res = res.fma(-x / T::from_f64(f64::from(i)), u);
    }
    res / T::from_f64(f64::from(n - 1))
}
