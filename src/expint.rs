//! Exponential, logarithmic and hyperbolic integrals.

use crate::algo::ei::{ei_cf, ei_large, ei_series, ei_small, en_cf, en_rec};
use crate::constants::LI_2;
use crate::machine::SpecialFloat;

/// Exponential integral Ei(x) = −PV∫₋ₓ^∞ e^−t/t dt.
///
/// Returns −∞ at 0, +∞ above the overflow threshold (716 for f64) and 0
/// below the underflow threshold (−705 for f64).
///
/// ```
/// use specfun::ei;
///
/// assert!((ei(1.0_f64) - 1.8951178163559368).abs() < 1e-14);
/// assert_eq!(ei(0.0_f64), f64::NEG_INFINITY);
/// ```
pub fn ei<T: SpecialFloat>(x: T) -> T {
    let xsmall = T::from_f64(3.0);
    let xlarge = T::from_f64(50.0);

    if x.is_nan() {
        return x;
    }
    if x < T::ei_min() {
        return T::zero();
    }
    if x > T::ei_max() {
        return T::infinity();
    }
    if x == T::zero() {
        return T::neg_infinity();
    }

    let xabs = x.abs();
    if xabs <= xsmall {
        ei_small(x)
    } else if xabs >= xlarge {
        ei_large(x)
    } else if x < -xsmall {
        ei_cf(x)
    } else {
        ei_series(x)
    }
}

/// Generalised exponential integral Eₙ(x) = ∫₁^∞ e^−xt/tⁿ dt.
///
/// NaN for NaN, `n < 0`, `n = x = 0` and `x < 0` with `n > 1`.
/// E₁(x) = −Ei(−x), so E₁ is defined for negative x too.
///
/// ```
/// use specfun::en;
///
/// assert!((en(2, 1.0_f64) - 0.14849550677592205).abs() < 1e-15);
/// assert_eq!(en(5, 0.0_f64), 0.25);
/// ```
pub fn en<T: SpecialFloat>(n: i32, x: T) -> T {
    let zero = T::zero();

    if x.is_nan() || n < 0 || (n == 0 && x == zero) || (x < zero && n > 1) {
        return T::nan();
    }
    if x == T::infinity() {
        return zero;
    }
    if n == 0 {
        return (-x).exp() / x;
    }
    if x == zero {
        return T::one() / T::from_f64(f64::from(n - 1));
    }
    if n == 1 {
        return -ei(-x);
    }
    if x > T::from_f64(5.0) || n >= 100 {
        en_cf(n, x)
    } else {
        en_rec(n, x, -ei(-x))
    }
}

/// Logarithmic integral li(x) = Ei(ln x), NaN for x < 0.
///
/// ```
/// use specfun::{li, LI_2};
///
/// assert!((li(2.0_f64) - LI_2).abs() < 1e-14);
/// ```
pub fn li<T: SpecialFloat>(x: T) -> T {
    ei(x.ln())
}

/// Offset logarithmic integral Li(x) = li(x) − li(2), so that Li(2) = 0.
pub fn li2<T: SpecialFloat>(x: T) -> T {
    if x == T::infinity() {
        return x;
    }
    if x == T::one() {
        return T::neg_infinity();
    }
    li(x) - T::from_f64(LI_2)
}

/// Hyperbolic sine integral Shi(x) = ∫₀ˣ sinh(t)/t dt.
///
/// Odd in x. Below |x| = 35 the Taylor series is summed; above, Shi(x)
/// equals Ei(x)/2 to working precision.
pub fn shi<T: SpecialFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();

    if x == zero {
        return zero;
    }
    let (sign, x) = if x < zero { (-one, -x) } else { (one, x) };

    if x < T::from_f64(35.0) {
        let tol = T::tol();
        let z = x * x;
        let mut a = one;
        let mut s = one;
        let mut k = T::from_f64(2.0);
        // a = x^(2m)/(2m+1)!, s = Σ a/(2m+1)
        while (a / s).abs() > tol {
            a = a * z / k;
            k = k + one;
            a = a / k;
            s = s + a / k;
            k = k + one;
        }
        return sign * s * x;
    }
    sign * ei(x) / T::from_f64(2.0)
}

/// Hyperbolic cosine integral Chi(x) = γ + ln|x| + ∫₀ˣ (cosh(t) − 1)/t dt,
/// evaluated as Ei(x) − Shi(x).
///
/// For negative x this is the real part.
pub fn chi<T: SpecialFloat>(x: T) -> T {
    ei(x) - shi(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NAN: f64 = f64::NAN;
    const INF: f64 = f64::INFINITY;

    // ── ei ──

    #[test]
    fn ei_special_values() {
        assert!(ei(NAN).is_nan());
        assert_eq!(ei(750.0), INF);
        assert_eq!(ei(INF), INF);
        assert_eq!(ei(-INF), 0.0);
        assert_eq!(ei(0.0), -INF);
    }

    #[test]
    fn ei_reference_values() {
        let cases = [
            (1e-5, -10.935699800043695),
            (1e-10, -22.448635264938925),
            (0.01, -4.017929465426669),
            (1.0, 1.8951178163559368),
            (2.0, 4.95423435600189),
            (5.0, 40.18527535580318),
            (6.01, 86.66495316518093),
            (10.00001, 2492.251002806792),
            (29.99, 3.654282129023645e11),
            (45.0, 7.943916035704454e17),
            (50.0, 1.058563689713169e20),
            (100.0, 2.71555274485388e41),
            (705.0, 2.138148975687854e303),
            (716.0, 1.2605029106040893e308),
            (-1e-100, -229.68129363450305),
            (-0.01, -4.037929576538114),
            (-1.0, -0.21938393439552029),
            (-4.0, -0.0037793524098489067),
            (-4.0000001, -0.0037793519519579615),
            (-10.0, -4.156968929685325e-06),
            (-30.0, -3.0215520106888124e-15),
            (-100.5, -2.2232069135926296e-46),
            (-500.0, -1.4220767822536383e-220),
            (-700.0, -1.406518766234033e-307),
        ];
        for (x, want) in cases {
            assert_relative_eq!(ei(x), want, max_relative = 1e-10);
        }
    }

    #[test]
    fn ei_holds_full_precision_near_the_taylor_edge() {
        let cases = [
            (-2.9, -0.014824019227261187),
            (-2.6, -0.021850221804082191),
            (-1.5, -0.10001958240663265),
            (1.5, 3.3012854491297978),
            (2.4, 6.6006702763505389),
            (2.9, 9.2860241865663476),
        ];
        for (x, want) in cases {
            assert_relative_eq!(ei(x), want, max_relative = 1e-13);
        }
    }

    // ── en ──

    #[test]
    fn en_special_values() {
        assert!(en(1, NAN).is_nan());
        assert!(en(-1, 2.0_f64).is_nan());
        assert!(en(2, -1.0_f64).is_nan());
        assert!(en(0, 0.0_f64).is_nan());
        assert_eq!(en(1, INF), 0.0);
        assert_eq!(en(1, 0.0), INF);
        assert_eq!(en(1, -720.0), -INF);
        assert_eq!(en(1, -100000.0), -INF);
        assert_eq!(en(5, 0.0), 0.25);
        assert_relative_eq!(en(1, -1.0), -1.8951178163559368, max_relative = 1e-10);
    }

    #[test]
    fn en_reference_values() {
        let cases: [(i32, f64, f64); 16] = [
            (0, 1e-8, 9.9999999e7),
            (2, 1e-8, 0.9999998115653491),
            (3, 1e-8, 0.49999999000000095),
            (10, 1e-8, 0.11111110986111111),
            (100, 1e-8, 0.010101009998969285),
            (2, 1.0, 0.14849550677592205),
            (20, 1.0, 0.018345971206755872),
            (100, 1.0, 0.003678422930396813),
            (2, 1.99999, 0.03753475082898094),
            (10, 2.0, 0.012092085136400296),
            (2, 5.0, 0.000996469042708838),
            (100, 5.0, 6.475775388266509e-05),
            (10, 25.0, 3.999356707583703e-13),
            (100, 25.0, 1.1181687061260001e-13),
            (20, 500.0, 1.3702118216839137e-220),
            (1000, 500.0, 4.75182858947099e-221),
        ];
        for (n, x, want) in cases {
            assert_relative_eq!(en(n, x), want, max_relative = 1e-10);
        }
    }

    // ── li, li2 ──

    #[test]
    fn li_reference_values() {
        assert!(li(-1.0_f64).is_nan());
        let cases = [
            (1e-300, -1.4455586289196509e-303),
            (1e-100, -4.324245377202095e-103),
            (1e-15, -2.815944392958954e-17),
            (1e-10, -4.168887750019648e-12),
            (1e-5, -8.036767291447334e-07),
            (2.0, 1.045163780117493),
            (1e250, 1.740206254656917e247),
        ];
        for (x, want) in cases {
            assert_relative_eq!(li(x), want, max_relative = 1e-10);
        }
    }

    #[test]
    fn li2_reference_values() {
        assert!(li2(-1.0_f64).is_nan());
        assert_eq!(li2(INF), INF);
        assert_eq!(li2(1.0), -INF);
        assert_eq!(li2(2.0), 0.0);
        assert_relative_eq!(li2(1e-321), -1.045163780117493, max_relative = 1e-10);
        assert_relative_eq!(li2(1e-10), -1.0451637801216618, max_relative = 1e-10);
        assert_relative_eq!(li2(1e250), 1.740206254656917e247, max_relative = 1e-10);
    }

    // ── shi, chi ──

    #[test]
    fn shi_reference_values() {
        assert_eq!(shi(0.0), 0.0);
        let cases = [
            (2.0, 2.5015674333549756),
            (7.9, 202.35036897887048),
            (-7.9, -202.35036897887048),
            (9.0, 518.9391515822219),
            (10.0, 1246.1144901994232),
            (80.0, 3.5073000024524e32),
        ];
        for (x, want) in cases {
            assert_relative_eq!(shi(x), want, max_relative = 1e-10);
        }
    }

    #[test]
    fn chi_reference_values() {
        assert_relative_eq!(chi(20.0), 1.2807826332028294e7, max_relative = 1e-10);
        // Chi(1) = γ + ∫₀¹ (cosh t − 1)/t dt
        assert_relative_eq!(chi(1.0), 0.8378669409802082, max_relative = 1e-10);
    }

    #[test]
    fn f32_smoke() {
        assert!((ei(1.0_f32) - 1.8951178).abs() < 1e-5);
        assert_eq!(ei(100.0_f32), f32::INFINITY);
        assert!((en(2, 1.0_f32) - 0.1484955).abs() < 1e-6);
    }
}
