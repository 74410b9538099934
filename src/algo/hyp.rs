//! Term-ratio summation of hypergeometric series.
//!
//! Each evaluator accumulates tₖ₊₁ = tₖ · x/(k+1) · ∏(aᵢ+k)/∏(bⱼ+k) until
//! the relative size of the last term drops below the tolerance, the
//! truncation count `numt` is reached, or the evaluator's term cap trips.

use crate::machine::SpecialFloat;
use crate::utils::is_non_pos_int;

/// Term cap for the generic pFq loop.
const PFQ_MAX_TERMS: usize = 1000;
/// Base term cap for 1F1; grows by 4|x| up to [`F11_MAX_TERMS_LIMIT`].
const F11_MAX_TERMS: f64 = 1000.0;
const F11_MAX_TERMS_LIMIT: f64 = 1e6;
/// Term cap for 2F1.
const F21_MAX_TERMS: usize = 100_000;

/// Below this, e^−|x| is applied in pieces instead of up front; each piece
/// stays above it.
#[inline]
fn underflow<T: SpecialFloat>() -> T {
    T::MACH_TINY / T::MACH_EPSILON
}

/// Above this, a partial 1F1 sum absorbs one of the pending pieces.
#[inline]
fn overflow<T: SpecialFloat>() -> T {
    T::MACH_HUGE.sqrt()
}

/// Generic pFq by direct summation.
pub(crate) fn series_pfq<T: SpecialFloat>(a: &[T], b: &[T], x: T, numt: usize) -> T {
    let tol = T::tol();
    let limit = numt.min(PFQ_MAX_TERMS);

    let mut t = T::one();
    let mut res = t;
    let mut k = 1;
    while k <= limit && (t / res).abs() > tol {
        let kk = T::from_f64(k as f64);
        t = t * x / kk;
        let kk = kk - T::one();
        for &ai in a {
            t = t * (kk + ai);
        }
        for &bi in b {
            t = t / (kk + bi);
        }
        res = res + t;
        k += 1;
    }
    res
}

/// Confluent hypergeometric 1F1(a; b; x); `b` must not be a pole.
///
/// For x < 0 (and a series that is not truncated) Kummer's transformation
/// 1F1(a; b; x) = eˣ 1F1(b − a; b; −x) gives a series of positive terms.
/// When eˣ underflows it is split into `n = ⌊|x|/L⌋ + 1` equal factors,
/// L = −ln(tiny/ε), that are folded in whenever the partial sum grows past
/// √huge; any factors left at the end are applied in log space.
pub(crate) fn series_1f1<T: SpecialFloat>(a: T, b: T, x: T, numt: usize, truncated: bool) -> T {
    let zero = T::zero();
    let one = T::one();
    let tol = T::tol();

    if x == T::neg_infinity() && !truncated {
        // 1F1(a; b; x) ~ Γ(b)/Γ(b − a) · |x|^−a as x → −∞
        if a > zero || is_non_pos_int(b - a) {
            return zero;
        }
        let (_, sb) = b.lgamma_r();
        let (_, sba) = (b - a).lgamma_r();
        return if sb * sba < 0 {
            T::neg_infinity()
        } else {
            T::infinity()
        };
    }

    let mut a = a;
    let mut x = x;
    let floor = underflow::<T>();
    let n = (x.abs() / -floor.ln() + one).trunc();
    let mut count = n;
    let mut log_scale = zero;
    let mut t = one;

    if x < zero && !truncated {
        a = b - a;
        x = -x;
        t = (-x).exp();
        if t < floor {
            log_scale = -x / n;
            t = log_scale.exp();
            count = one;
        }
    }

    let cap = (T::from_f64(F11_MAX_TERMS) + T::from_f64(4.0) * x.abs())
        .min(T::from_f64(F11_MAX_TERMS_LIMIT))
        .to_usize()
        .unwrap_or(0)
        .min(numt);
    let scalef = log_scale.exp();
    let big = overflow::<T>();

    let mut res = t;
    let mut k = 1;
    while k <= cap && (t / res).abs() > tol {
        let kk = T::from_f64(k as f64);
        t = t * x / kk;
        let kk = kk - one;
        t = t * (kk + a) / (kk + b);
        if res > big && count < n {
            t = t * scalef;
            res = res * scalef;
            count = count + one;
        }
        res = res + t;
        k += 1;
    }

    if count < n {
        let sign = one.copysign(res);
        res = sign * (res.abs().ln() + log_scale * (n - count)).exp();
    }
    res
}

/// Gauss hypergeometric 2F1(a, b; c; x); `c` must not be a pole.
///
/// Negative x maps to x/(x − 1) by Pfaff's transformation
/// (Abramowitz & Stegun 15.3.4), which keeps the smaller of `a`, `b` and
/// so recomputes the truncation count, and x = 1 with c − a − b > 0 uses Gauss's
/// summation theorem.
pub(crate) fn series_2f1<T: SpecialFloat>(a: T, b: T, c: T, x: T, numt: usize) -> T {
    let zero = T::zero();
    let one = T::one();
    let tol = T::tol();

    let (mut a, mut b, mut x) = (a, b, x);
    let mut numt = numt;
    let mut scale = one;
    if x < zero {
        if b > a {
            b = c - b;
        } else {
            (a, b) = (b, c - a);
        }
        scale = scale * (one - x).powf(-a);
        x = x / (x - one);
        // the transformed series truncates only through the parameter kept
        numt = if is_non_pos_int(a) {
            (-a).to_usize().unwrap_or(usize::MAX)
        } else {
            usize::MAX
        };
    }

    if x == one && c - a - b > zero {
        let (lgc, sgc) = c.lgamma_r();
        let (lgcab, sgcab) = (c - a - b).lgamma_r();
        let (lgca, sgca) = (c - a).lgamma_r();
        let (lgcb, sgcb) = (c - b).lgamma_r();
        let sign = T::from_f64(f64::from(sgc * sgcab * sgca * sgcb));
        return scale * sign * (lgc + lgcab - lgca - lgcb).exp();
    }

    let limit = numt.min(F21_MAX_TERMS);
    let mut t = one;
    let mut res = t;
    let mut k = 1;
    while k <= limit && (t / res).abs() > tol {
        let kk = T::from_f64(k as f64);
        t = t * x / kk;
        let kk = kk - one;
        t = t * (kk + a) * (kk + b) / (kk + c);
        res = res + t;
        k += 1;
    }
    scale * res
}
