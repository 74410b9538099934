//! Primitive numeric utilities shared by every evaluator.
//!
//! Horner evaluation, parity helpers, pole detection, exact trigonometry of
//! π·x, and the parameter-list cancellation used by the gamma-ratio and
//! hypergeometric evaluators.

use alloc::vec::Vec;

use crate::machine::SpecialFloat;
use crate::types::Error;

/// Evaluate the polynomial Σ cᵢ·xⁱ with coefficients given lowest degree first.
///
/// Horner's method from the highest degree down, one fused multiply-add per
/// step, so the rounding sequence is fixed for a given coefficient slice.
///
/// Returns [`Error::InvalidArgument`] if `coeffs` is empty.
///
/// ```
/// use specfun::poly;
///
/// // 1 + 2x + 3x² at x = 2
/// assert_eq!(poly(2.0_f64, &[1.0, 2.0, 3.0]), Ok(17.0));
/// assert!(poly(2.0_f64, &[]).is_err());
/// ```
pub fn poly<T: SpecialFloat>(x: T, coeffs: &[T]) -> Result<T, Error> {
    let (&last, rest) = coeffs.split_last().ok_or(Error::InvalidArgument)?;
    Ok(rest.iter().rev().fold(last, |acc, &c| acc.fma(x, c)))
}

/// Horner evaluation over a fixed table of f64 coefficients, lowest degree
/// first. Infallible counterpart of [`poly`] for the built-in tables.
#[inline]
pub(crate) fn horner<T: SpecialFloat, const N: usize>(x: T, coeffs: &[f64; N]) -> T {
    coeffs
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc.fma(x, T::from_f64(c)))
}

/// (-1)ⁿ as ±1, without a general power.
#[inline]
pub fn pow_n1(n: i32) -> i32 {
    1 - 2 * (n & 1)
}

/// True when `n` is odd (negative values included).
#[inline]
pub fn is_odd(n: i32) -> bool {
    n & 1 == 1
}

/// True iff `x` is zero or a negative integer, i.e. a pole of Γ.
///
/// NaN and ±∞ are not poles.
///
/// ```
/// use specfun::is_non_pos_int;
///
/// assert!(is_non_pos_int(0.0_f64));
/// assert!(is_non_pos_int(-3.0_f64));
/// assert!(!is_non_pos_int(-0.5_f64));
/// assert!(!is_non_pos_int(2.0_f64));
/// ```
#[inline]
pub fn is_non_pos_int<T: SpecialFloat>(x: T) -> bool {
    x <= T::zero() && x.is_finite() && x == x.trunc()
}

/// True iff `x` is a finite value with zero fractional part.
#[inline]
pub(crate) fn is_integer<T: SpecialFloat>(x: T) -> bool {
    x.is_finite() && x == x.trunc()
}

/// Remove values common to `a` and `b`, one instance per match.
///
/// Each element of `a` cancels at most one equal element of `b`, scanning
/// `b` from the front. Both inputs are left untouched; the survivors are
/// returned in their original order. Equality is IEEE `==`, so NaN never
/// cancels, not even against another NaN.
///
/// ```
/// use specfun::remove_common_elements;
///
/// let (a, b) = remove_common_elements(&[1.0_f64, 2.0, 3.0], &[1.0, 2.0, 4.0, 5.0]);
/// assert_eq!(a, vec![3.0]);
/// assert_eq!(b, vec![4.0, 5.0]);
/// ```
pub fn remove_common_elements<T: SpecialFloat>(a: &[T], b: &[T]) -> (Vec<T>, Vec<T>) {
    let mut rest: Vec<T> = b.to_vec();
    let mut kept = Vec::with_capacity(a.len());
    for &ai in a {
        match rest.iter().position(|&bj| bj == ai) {
            Some(j) => {
                rest.remove(j);
            }
            None => kept.push(ai),
        }
    }
    (kept, rest)
}

/// Compute sin(π·x) with exact values at half-integers.
///
/// Reduces the argument modulo 2 first, so `sinpi(n)` is exactly 0 for
/// any integer `n`, and `sinpi(n + 0.5)` is exactly ±1. This avoids the
/// catastrophic rounding errors of `(x * PI).sin()` when x is a
/// half-integer (e.g. `sin(1.5 * PI)` = −1.837e-16 instead of 0).
#[inline]
pub fn sinpi<T: SpecialFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);
    let one_half = T::from_f64(1.5);
    let pi = T::from_f64(core::f64::consts::PI);

    // sinpi is odd: sinpi(-x) = -sinpi(x)
    let (ax, sign) = if x < zero { (-x, -one) } else { (x, one) };

    // Reduce to [0, 2): r = ax mod 2
    let r = ax % two;

    // Exact special values
    if r == zero || r == one {
        return zero;
    }
    if r == half {
        return sign;
    }
    if r == one_half {
        return -sign;
    }

    // Use symmetry to reduce to [0, 0.5]
    let s = if r < half {
        (r * pi).sin()
    } else if r < one {
        ((one - r) * pi).sin()
    } else if r < one_half {
        -((r - one) * pi).sin()
    } else {
        -((two - r) * pi).sin()
    };

    sign * s
}

/// Compute cos(π·x) with exact values at integers and half-integers.
///
/// Reduces the argument modulo 2 first, so `cospi(n + 0.5)` is exactly 0
/// for any integer `n`, and `cospi(n)` is exactly ±1.
#[inline]
pub fn cospi<T: SpecialFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);
    let one_half = T::from_f64(1.5);
    let pi = T::from_f64(core::f64::consts::PI);

    // cospi is even: cospi(-x) = cospi(x)
    let ax = x.abs();

    // Reduce to [0, 2): r = ax mod 2
    let r = ax % two;

    // Exact special values
    if r == zero {
        return one;
    }
    if r == half || r == one_half {
        return zero;
    }
    if r == one {
        return -one;
    }

    // Use symmetry to reduce to [0, 0.5]
    if r < half {
        (r * pi).cos()
    } else if r < one {
        -((one - r) * pi).cos()
    } else if r < one_half {
        -((r - one) * pi).cos()
    } else {
        ((two - r) * pi).cos()
    }
}

/// cot(π·x) from [`sinpi`] and [`cospi`]; ±∞ at integers, exactly 0 at
/// half-integers.
#[inline]
pub(crate) fn cotpi<T: SpecialFloat>(x: T) -> T {
    cospi(x) / sinpi(x)
}
