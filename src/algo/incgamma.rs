//! Regularised incomplete gamma kernels.
//!
//! P(a, x) is summed from its hypergeometric series and Q(a, x) from a
//! Legendre continued fraction evaluated bottom-up at a fixed depth that
//! depends on x/a.

use crate::machine::SpecialFloat;

const SERIES_MAX_ITER: usize = 2000;

/// P(a, x) = xᵃ e^−x / Γ(a + 1) · Σₖ xᵏ / ((a+1)…(a+k)).
///
/// Clamped to 1 for a > 0.
pub(crate) fn p_series<T: SpecialFloat>(a: T, x: T) -> T {
    let one = T::one();
    let tol = T::tol();

    let mut res = one;
    let mut tmp = one;
    for k in 1..SERIES_MAX_ITER {
        if (tmp / res).abs() <= tol {
            break;
        }
        tmp = tmp * x / (a + T::from_f64(k as f64));
        res = res + tmp;
    }

    let (lga1, sga1) = (a + one).lgamma_r();
    let scale = (a * x.ln() - x - lga1).exp();
    res = res * scale;
    if sga1 < 0 {
        res = -res;
    }
    if a > T::zero() {
        res = res.min(one);
    }
    res
}

/// Q(a, x) from its continued fraction.
pub(crate) fn q_cf<T: SpecialFloat>(a: T, x: T) -> T {
    let one = T::one();
    let two = T::from_f64(2.0);

    let (lga, sga) = a.lgamma_r();
    let s = one.copysign(x);
    let lx = x.abs().ln();
    let xma = x - a;

    let d = cf_depth(a, x);
    let mut cf = xma + T::from_f64((2 * d + 1) as f64);
    for i in (1..=d).rev() {
        let fi = T::from_f64(i as f64);
        let ai = fi * (a - fi);
        let bj = xma + two * fi - one;
        cf = bj + ai / cf;
    }
    let res = s * (a * lx - x - lga).exp() / cf;
    if sga < 0 {
        -res
    } else {
        res
    }
}

/// Continued fraction depth sufficient for convergence at ratio x/a.
fn cf_depth<T: SpecialFloat>(a: T, x: T) -> usize {
    let y = x / a;
    if y > T::from_f64(1.5) {
        10
    } else if y > T::from_f64(1.3) {
        20
    } else if y > T::from_f64(1.1) {
        40
    } else if y > T::from_f64(1.05) {
        50
    } else {
        100
    }
}
