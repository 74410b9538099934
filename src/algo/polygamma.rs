//! Polygamma kernels.
//!
//! Orders 2 through 5 have closed asymptotic forms with their own
//! recurrence thresholds. Higher orders use the Abramowitz & Stegun 6.4.11
//! expansion, a direct series for small arguments, and Euler's partial
//! fraction expansion of the cotangent derivatives for reflection.

#![allow(clippy::excessive_precision)]

use crate::machine::SpecialFloat;
use crate::utils::{cotpi, horner, is_odd, pow_n1, sinpi};

const PI: f64 = core::f64::consts::PI;

/// Cap on the cotangent partial fraction and the direct series.
const MAX_ITER: usize = 200;

/// B₂ₖ/(2k)!, k = 1..14.
#[rustfmt::skip]
pub(crate) const BERNOULLI_SCALED: [f64; 14] = [
    1.0 / 12.0,
    -1.0 / 720.0,
    1.0 / 30240.0,
    -1.0 / 1209600.0,
    1.0 / 47900160.0,
    -691.0 / 1307674368000.0,
    1.0 / 74724249600.0,
    -3617.0 / 10670622842880000.0,
    43867.0 / 5109094217170944000.0,
    -174611.0 / 802857662698291200000.0,
    77683.0 / 14101100039391805440000.0,
    -236364091.0 / 1693824136731743669452800000.0,
    657931.0 / 186134520519971831808000000.0,
    -3392780147.0 / 37893265687455865519472640000000.0,
];

const PG2: [f64; 6] = [-1.0 / 2.0, 1.0 / 6.0, -1.0 / 6.0, 3.0 / 10.0, -5.0 / 6.0, 691.0 / 210.0];
const PG3: [f64; 6] = [2.0, -1.0, 4.0 / 3.0, -3.0 / 11.0, 10.0, -691.0 / 15.0];
const PG4: [f64; 6] = [-10.0, 7.0, -12.0, 33.0, -130.0, 691.0];
const PG5: [f64; 6] = [60.0, -56.0, 120.0, -396.0, 1820.0, -11056.0];

/// Split x into (sign, |x|) after the recurrence has pushed |x| past the
/// asymptotic threshold.
#[inline]
fn sign_abs<T: SpecialFloat>(x: T) -> (T, T) {
    (T::one().copysign(x), x.abs())
}

pub(crate) fn polygamma2<T: SpecialFloat>(mut x: T) -> T {
    let one = T::one();
    let two = T::from_f64(2.0);
    let xmin = T::from_f64(7.0);

    let mut res = T::zero();
    while x.abs() < xmin {
        res = res - two / (x * x * x);
        x = x + one;
    }
    let (s, x) = sign_abs(x);
    let y = one / (x * x);
    res = res + y * (-one - s / x + y * horner(y, &PG2));
    if s < T::zero() {
        let cot = cotpi(x);
        let csc = one / sinpi(x);
        res = res + two * T::from_f64(PI * PI * PI) * cot * csc * csc;
    }
    res
}

pub(crate) fn polygamma3<T: SpecialFloat>(mut x: T) -> T {
    let one = T::one();
    let six = T::from_f64(6.0);
    let xmin = T::from_f64(16.0);

    let mut res = T::zero();
    while x.abs() < xmin {
        let x2 = x * x;
        res = res + six / (x2 * x2);
        x = x + one;
    }
    let (s, x) = sign_abs(x);
    let y = one / (x * x);
    let lead = T::from_f64(2.0) + s * T::from_f64(3.0) / x;
    res = res + s * y / x * (lead + y * horner(y, &PG3));
    if s < T::zero() {
        let cot = cotpi(x);
        let cot2 = cot * cot;
        let poly = one + cot2 * (T::from_f64(4.0) + T::from_f64(3.0) * cot2);
        res = res + T::from_f64(2.0 * PI * PI * PI * PI) * poly;
    }
    res
}

pub(crate) fn polygamma4<T: SpecialFloat>(mut x: T) -> T {
    let one = T::one();
    let two = T::from_f64(2.0);
    let xmin = T::from_f64(13.0);

    let mut res = T::zero();
    while x.abs() < xmin {
        let x2 = x * x;
        res = res - T::from_f64(24.0) / (x2 * x2 * x);
        x = x + one;
    }
    let (s, x) = sign_abs(x);
    let y = one / (x * x);
    let lead = T::from_f64(-6.0) - s * T::from_f64(12.0) / x;
    res = res + y * y * (lead + y * horner(y, &PG4));
    if s < T::zero() {
        let cot = cotpi(x);
        let csc = one / sinpi(x);
        let csc2 = csc * csc;
        let pi5 = T::from_f64(PI * PI * PI * PI * PI);
        res = res + T::from_f64(8.0) * pi5 * csc2 * cot * (cot * cot + two * csc2);
    }
    res
}

pub(crate) fn polygamma5<T: SpecialFloat>(mut x: T) -> T {
    let one = T::one();
    let two = T::from_f64(2.0);
    let xmin = T::from_f64(10.0);

    let mut res = T::zero();
    while x.abs() < xmin {
        let x2 = x * x;
        res = res + T::from_f64(120.0) / (x2 * x2 * x2);
        x = x + one;
    }
    let (s, x) = sign_abs(x);
    let y = one / (x * x);
    let lead = T::from_f64(24.0) + s * T::from_f64(60.0) / x;
    res = res + s * y * y / x * (lead + y * horner(y, &PG5));
    if s < T::zero() {
        let cot = cotpi(x);
        let csc = one / sinpi(x);
        let cot2 = cot * cot;
        let csc2 = csc * csc;
        let pi6 = T::from_f64(PI * PI * PI * PI * PI * PI);
        let poly = two * csc2 * csc2 + two * cot2 * cot2 + T::from_f64(11.0) * cot2 * csc2;
        res = res + T::from_f64(8.0) * pi6 * csc2 * poly;
    }
    res
}

/// ψ⁽ⁿ⁾(x) for n ≥ 6 and any x that is not a pole.
pub(crate) fn polygamma_n<T: SpecialFloat>(n: i32, mut x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let nf = T::from_f64(f64::from(n));
    let s = T::from_f64(f64::from(pow_n1(n)));
    let (lnfac, _) = (nf + one).lgamma_r();

    // ψ⁽ⁿ⁾(x) = (−1)ⁿ ψ⁽ⁿ⁾(1 − x) − π dⁿ/dxⁿ cot(πx)
    let mut c = zero;
    let reflect = x < zero;
    if reflect {
        c = scaled_cot_deriv(n, x);
        if c != zero {
            c = c * lnfac.exp();
        }
        if c.is_infinite() {
            return -c;
        }
        x = one - x;
    }

    let xsmall = two * nf.sqrt();
    let pg = if n >= 10 && x < xsmall {
        series(n, lnfac, x)
    } else {
        // ψ⁽ⁿ⁾(x) = ψ⁽ⁿ⁾(x + 1) − (−1)ⁿ n!/xⁿ⁺¹
        let xlarge = nf.min(T::from_f64(10.0));
        let target = (two * xsmall).max(xlarge);
        let mut shift = zero;
        while x < target {
            shift = shift - (lnfac - (nf + one) * x.ln()).exp();
            x = x + one;
        }
        asymptotic(n, lnfac, x) + s * shift
    };

    if reflect {
        s * pg - c
    } else {
        pg
    }
}

/// π dⁿ/dxⁿ cot(πx) / n! from the partial fraction expansion
///
/// ```text
/// x^-(n+1) + Σₖ (x+k)^-(n+1) + (x−k)^-(n+1)
/// ```
fn scaled_cot_deriv<T: SpecialFloat>(n: i32, x: T) -> T {
    let zero = T::zero();
    let half = T::from_f64(0.5);
    let tol = T::from_f64(1e-14).max(T::tol());
    let p = -(n + 1);

    let mut s = T::from_f64(f64::from(pow_n1(n)));
    // cot(πx) has period 1.
    let mut x = x - x.trunc();
    // The derivative is odd in x for even n and even for odd n.
    if x < zero {
        x = -x;
        if !is_odd(n) {
            s = -s;
        }
    }
    if x == half && !is_odd(n) {
        return zero;
    }

    let mut res = x.powi(p);
    let mut tmp = res;
    for k in 1..=MAX_ITER {
        if (tmp / res).abs() <= tol {
            break;
        }
        let kf = T::from_f64(k as f64);
        tmp = (x + kf).powi(p) + (x - kf).powi(p);
        res = res + tmp;
    }
    s * res
}

/// Abramowitz & Stegun 6.4.11.
fn asymptotic<T: SpecialFloat>(n: i32, lnfac: T, x: T) -> T {
    let one = T::one();
    let nf = T::from_f64(f64::from(n));
    let s = T::from_f64(f64::from(-pow_n1(n)));
    let y = one / (x * x);

    let last = BERNOULLI_SCALED.len() - 1;
    let mut acc = T::from_f64(BERNOULLI_SCALED[last]);
    for i in (0..last).rev() {
        let a = f64::from(n) + 2.0 * i as f64 + 2.0;
        acc = T::from_f64(BERNOULLI_SCALED[i]) + T::from_f64(a * (a + 1.0)) * y * acc;
    }

    let tail = one / nf + one / x * (T::from_f64(0.5) + (nf + one) / x * acc);
    s * (lnfac - nf * x.ln()).exp() * tail
}

/// ψ⁽ⁿ⁾(x) = (−1)ⁿ⁺¹ n! Σₖ (k + x)^-(n+1)
fn series<T: SpecialFloat>(n: i32, lnfac: T, x: T) -> T {
    let one = T::one();
    let np1 = T::from_f64(f64::from(n + 1));
    let tol = T::from_f64(1e-12).max(T::tol());
    let s = T::from_f64(f64::from(-pow_n1(n)));

    let mut res = T::zero();
    let mut tmp = one;
    for k in 0..=MAX_ITER {
        if res != T::zero() && (tmp / res).abs() <= tol {
            break;
        }
        let kx = T::from_f64(k as f64) + x;
        tmp = (lnfac - np1 * kx.ln()).exp();
        res = res + tmp;
    }
    s * res
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn low_orders_positive_and_reflected() {
        assert_relative_eq!(polygamma2(0.5), -16.82879664423432, max_relative = 1e-10);
        assert_relative_eq!(polygamma2(-2.3), 68.71379252927031, max_relative = 1e-10);
        assert_relative_eq!(polygamma3(1.25), 2.782144009188396, max_relative = 1e-10);
        assert_relative_eq!(polygamma3(-0.75), 1557.7451069721515, max_relative = 1e-10);
        assert_relative_eq!(polygamma4(2.5), -0.3137559995067314, max_relative = 1e-10);
        assert_relative_eq!(polygamma4(-3.4), 2037.3739248405475, max_relative = 1e-10);
        assert_relative_eq!(polygamma5(0.3), 164634.84609922304, max_relative = 1e-10);
        assert_relative_eq!(polygamma5(-1.7), 165659.80077263742, max_relative = 1e-10);
    }

    #[test]
    fn high_order_branches() {
        // recurrence + asymptotic
        assert_relative_eq!(polygamma_n(6, 2.5), -1.318006107550035, max_relative = 1e-10);
        assert_relative_eq!(polygamma_n(7, 10.0), 0.00010051111598689363, max_relative = 1e-10);
        // direct series
        assert_relative_eq!(polygamma_n(12, 0.7), -49438661345.67694, max_relative = 1e-10);
        assert_relative_eq!(polygamma_n(20, 1.5), -487772949462609.9, max_relative = 1e-10);
        // reflection
        assert_relative_eq!(polygamma_n(6, -0.3), 3283420.02651577, max_relative = 1e-10);
        assert_relative_eq!(polygamma_n(8, -2.5), -0.5763846518699325, max_relative = 1e-10);
        assert_relative_eq!(polygamma_n(12, -3.3), 3004370635081420.5, max_relative = 1e-10);
    }

    #[test]
    fn high_order_reflection_keeps_neighbouring_poles() {
        // x^−(n+1) alone is negligible against (x − 1)^−(n+1) here
        assert_relative_eq!(polygamma_n(60, -0.48), 2.2969740118462403e101, max_relative = 1e-10);
        assert_relative_eq!(polygamma_n(25, -0.3), 6.102292998575748e38, max_relative = 1e-10);
        assert_relative_eq!(polygamma_n(31, -1.45), 1.0302130268704424e45, max_relative = 1e-10);
        assert_relative_eq!(polygamma_n(40, -2.55), -1.348391302942859e62, max_relative = 1e-10);
    }

    #[test]
    fn cot_derivative_vanishes_at_half_for_even_order() {
        assert_eq!(scaled_cot_deriv(6, -0.5_f64), 0.0);
        assert_eq!(scaled_cot_deriv(8, -3.5_f64), 0.0);
        assert!(scaled_cot_deriv(7, -0.5_f64) != 0.0);
    }
}
