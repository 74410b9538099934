//! Fibonacci numbers, extended to real arguments.

use crate::constants::PHI;
use crate::machine::SpecialFloat;
use crate::utils::{cospi, is_integer, pow_n1};

/// Largest n with Fₙ exactly representable in f64.
const EXACT_MAX: i32 = 78;

/// Fibonacci number F(ν), with F(0) = 0 and F(1) = 1.
///
/// Integers with |ν| ≤ 78 are summed exactly, using F(−n) = (−1)ⁿ⁺¹ F(n)
/// for negative n. Other arguments use Binet's formula extended to real ν:
///
/// ```text
/// F(ν) = (φ^ν − cos(πν) φ^−ν) / √5
/// ```
///
/// NaN for NaN and −∞, +∞ at +∞.
///
/// ```
/// use specfun::fibonacci;
///
/// assert_eq!(fibonacci(10.0_f64), 55.0);
/// assert_eq!(fibonacci(-8.0_f64), -21.0);
/// assert!((fibonacci(2.5_f64) - 1.4893065462657091).abs() < 1e-15);
/// ```
pub fn fibonacci<T: SpecialFloat>(nu: T) -> T {
    let zero = T::zero();
    let one = T::one();

    if nu.is_nan() || nu == T::neg_infinity() {
        return T::nan();
    }
    if nu == T::infinity() {
        return nu;
    }

    if is_integer(nu) && nu.abs() <= T::from_f64(f64::from(EXACT_MAX)) {
        if let Some(n) = nu.to_i32() {
            let (mut a, mut b) = (zero, one);
            for _ in 0..n.abs() {
                (a, b) = (b, a + b);
            }
            return if n < 0 {
                T::from_f64(f64::from(-pow_n1(n))) * a
            } else {
                a
            };
        }
    }

    let phi = T::from_f64(PHI);
    let p = phi.powf(nu);
    let c = cospi(nu);
    // at half-integers the decaying term is exactly zero, even where φ^ν underflows
    let res = if c == zero { p } else { p - c / p };
    res / (phi + phi - one)
}
