//! Riemann zeta kernels.
//!
//! Euler–Maclaurin summation covers s > −1/2 (s ≠ 1); the functional
//! equation maps s ≤ −1/2 onto 1 − s ≥ 3/2 and is evaluated in log space so
//! the Γ(1 − s) factor cannot overflow before the sine scales it down.

use core::f64::consts::{LN_2, PI};

use super::polygamma::BERNOULLI_SCALED;
use crate::machine::SpecialFloat;
use crate::utils::sinpi;

/// Number of leading terms summed directly.
const EM_N: u32 = 10;
/// Number of Bernoulli corrections.
const EM_TERMS: usize = 12;
/// At and above this, ζ(s) = 1 + 2⁻ˢ + 3⁻ˢ to machine precision.
const ZETA_TAIL: f64 = 64.0;

/// ζ(s) by Euler–Maclaurin summation about N = 10.
///
/// ```text
/// ζ(s) = Σₙ₌₁ᴺ⁻¹ n⁻ˢ + N¹⁻ˢ/(s − 1) + N⁻ˢ/2 + Σₖ B₂ₖ/(2k)! · (s)₂ₖ₋₁ · N^(−s−2k+1)
/// ```
pub(crate) fn euler_maclaurin<T: SpecialFloat>(s: T) -> T {
    let one = T::one();
    let two = T::from_f64(2.0);
    let n = T::from_f64(f64::from(EM_N));

    let mut sum = T::zero();
    for k in 1..EM_N {
        sum = sum + T::from_f64(f64::from(k)).powf(-s);
    }

    let n_s = n.powf(-s);
    sum = sum + n * n_s / (s - one) + T::from_f64(0.5) * n_s;

    // rising factorial s(s+1)…(s+2k−2) and N^(−s−2k+1)
    let mut fac = s;
    let mut p = n_s / n;
    let n2 = n * n;
    for (k, &b) in BERNOULLI_SCALED[..EM_TERMS].iter().enumerate() {
        sum = sum + T::from_f64(b) * fac * p;
        let k2 = T::from_f64((2 * k) as f64);
        fac = fac * (s + k2 + one) * (s + k2 + two);
        p = p / n2;
    }
    sum
}

/// ζ(s) for s > −1/2, s ≠ 1.
pub(crate) fn zeta_right<T: SpecialFloat>(s: T) -> T {
    if s >= T::from_f64(ZETA_TAIL) {
        let one = T::one();
        return one + T::from_f64(2.0).powf(-s) + T::from_f64(3.0).powf(-s);
    }
    euler_maclaurin(s)
}

/// ζ(s) for s ≤ −1/2 that is not an even integer, from
/// ζ(s) = 2ˢ πˢ⁻¹ sin(πs/2) Γ(1 − s) ζ(1 − s).
pub(crate) fn reflect<T: SpecialFloat>(s: T) -> T {
    let one = T::one();

    let sin = sinpi(s * T::from_f64(0.5));
    let (lg, _) = (one - s).lgamma_r();
    let z = zeta_right(one - s);

    // Γ(1 − s) and ζ(1 − s) are positive here, so the sine carries the sign.
    let log_abs = s * T::from_f64(LN_2) + (s - one) * T::from_f64(PI).ln() + lg + sin.abs().ln() + z.ln();
    one.copysign(sin) * log_abs.exp()
}
