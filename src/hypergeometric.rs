//! Generalised hypergeometric function pFq and its common special cases.
//!
//! ```text
//!                  ∞   (a₁)ₖ…(a_p)ₖ   xᵏ
//! pFq(a; b; x) =   Σ   ───────────── · ──
//!                 k=0  (b₁)ₖ…(b_q)ₖ    k!
//! ```
//!
//! Parameters shared by `a` and `b` cancel before evaluation, and infinite
//! parameters are eliminated through their limits. A non-positive integer
//! in `a` truncates the series to a polynomial; one in `b` without a
//! matching truncation makes the series undefined (NaN).

use crate::algo::hyp::{series_1f1, series_2f1, series_pfq};
use crate::machine::SpecialFloat;
use crate::utils::{is_non_pos_int, remove_common_elements};

/// Generalised hypergeometric function pFq(a; b; x).
///
/// Infinite parameters are resolved by their limits:
///
/// - a +∞/−∞ pair split across `a` and `b` drops both and flips the sign
///   of `x`;
/// - an unmatched ±∞ in `b` gives 1 for finite `x`, and reduces `x` to
///   ±1 when `x` is itself infinite;
/// - an unmatched ±∞ in `a` diverges (NaN).
///
/// Only non-positive integers take part in truncation and pole detection;
/// a parameter such as −2.5 neither ends the series nor blocks a
/// truncating −3 beside it. Without truncation the series diverges (NaN)
/// when p > q + 1, or when p = q + 1 and |x| > 1, except that 2F1 at
/// x < −1 is continued through Pfaff's transformation.
///
/// ```
/// use specfun::hyp_pfq;
///
/// // 0F0(;;x) = eˣ
/// assert!((hyp_pfq::<f64>(&[], &[], 1.0) - core::f64::consts::E).abs() < 1e-15);
/// // 2F1(1, 2; 1; 1/2) = 1F0(2;;1/2) = 4
/// assert!((hyp_pfq(&[1.0_f64, 2.0], &[1.0], 0.5) - 4.0).abs() < 1e-14);
/// ```
pub fn hyp_pfq<T: SpecialFloat>(a: &[T], b: &[T], x: T) -> T {
    let zero = T::zero();
    let one = T::one();

    if x == zero {
        return one;
    }

    let (mut a, mut b) = remove_common_elements(a, b);
    let mut x = x;

    // Opposite infinities: lim pFq(…, ±t; …, ∓t; x) = p−1Fq−1(…; …; −x).
    while let (Some(i), Some(j)) = (last_infinite(&a), last_infinite(&b)) {
        a.remove(i);
        b.remove(j);
        x = -x;
    }

    // lim pFq(…; …, t; x) = pFq−1(…; …; x/t) as |t| → ∞.
    let binf = b.iter().filter(|v| v.is_infinite()).count();
    if binf > 1 || (binf == 1 && !x.is_infinite()) {
        return one;
    }
    if let Some(j) = last_infinite(&b) {
        x = one.copysign(x * b[j]);
        b.remove(j);
    }

    if a.iter().any(|v| v.is_infinite()) {
        return T::nan();
    }

    let (p, q) = (a.len(), b.len());
    if p == 0 && q == 0 {
        return x.exp();
    }
    if p == 1 && q == 0 {
        return (one - x).powf(-a[0]);
    }

    let atrunc = greatest_non_pos_int(&a);
    let bpole = greatest_non_pos_int(&b);

    // A pole in b is only cancelled by a truncation in a that ends the
    // series no later.
    if let Some(bp) = bpole {
        if atrunc.map_or(true, |at| at < bp) {
            return T::nan();
        }
    }

    let truncated = atrunc.is_some();
    let numt = atrunc.map_or(usize::MAX, |at| (-at).to_usize().unwrap_or(usize::MAX));

    // Pfaff's transformation inside the 2F1 kernel maps x < −1 into (½, 1).
    let pfaff = p == 2 && q == 1 && x < -one && x.is_finite();
    if !truncated && (p > q + 1 || (p == q + 1 && x.abs() > one && !pfaff)) {
        return T::nan();
    }

    match (p, q) {
        (1, 1) => series_1f1(a[0], b[0], x, numt, truncated),
        (2, 1) => series_2f1(a[0], a[1], b[0], x, numt),
        _ => series_pfq(&a, &b, x, numt),
    }
}

/// Index of the last infinite entry.
fn last_infinite<T: SpecialFloat>(v: &[T]) -> Option<usize> {
    v.iter().rposition(|e| e.is_infinite())
}

/// The non-positive integer entry closest to zero, if any.
fn greatest_non_pos_int<T: SpecialFloat>(v: &[T]) -> Option<T> {
    v.iter()
        .copied()
        .filter(|&e| is_non_pos_int(e))
        .fold(None, |m, e| match m {
            Some(m) if m >= e => Some(m),
            _ => Some(e),
        })
}

/// Confluent hypergeometric limit function 0F1(; b; x).
///
/// ```
/// use specfun::hyp0f1;
///
/// assert!((hyp0f1(1.0_f64, 2.0) - 4.2523508795026235).abs() < 1e-14);
/// ```
pub fn hyp0f1<T: SpecialFloat>(b: T, x: T) -> T {
    hyp_pfq(&[], &[b], x)
}

/// Kummer's confluent hypergeometric function 1F1(a; b; x).
pub fn hyp1f1<T: SpecialFloat>(a: T, b: T, x: T) -> T {
    hyp_pfq(&[a], &[b], x)
}

/// Gauss hypergeometric function 2F1(a, b; c; x).
pub fn hyp2f1<T: SpecialFloat>(a: T, b: T, c: T, x: T) -> T {
    hyp_pfq(&[a, b], &[c], x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NAN: f64 = f64::NAN;
    const INF: f64 = f64::INFINITY;

    fn check(got: f64, want: f64) {
        if want.is_nan() {
            assert!(got.is_nan(), "got {got}, want NaN");
        } else if want.is_infinite() {
            assert_eq!(got, want);
        } else {
            assert_relative_eq!(got, want, max_relative = 1e-10);
        }
    }

    // ── 0F1 ──

    #[test]
    fn hyp0f1_special_values() {
        check(hyp0f1(NAN, 100.0), NAN);
        check(hyp0f1(-2.0, NAN), NAN);
        check(hyp0f1(INF, -INF), 0.36787944117144233);
        check(hyp0f1(INF, INF), 2.718281828459045);
        check(hyp0f1(INF, 4567.98765), 1.0);
        check(hyp0f1(-3.0, 11.0), NAN);
        check(hyp0f1(-4.0, -11.0), NAN);
        check(hyp0f1(9.876545678998766e10, 0.0), 1.0);
    }

    #[test]
    fn hyp0f1_reference_values() {
        let cases = [
            (1.0, 2.0, 4.2523508795026235),
            (2.0, 3.0, 3.468649618760533),
            (3.0, 25.5, 197.08967324379037),
            (3.0, 2555.5, 2.4708990611876765e39),
            (3.0, 125555.5, 1.4154906008294558e301),
            (333.3, 125555.5, 5.659525247124615e120),
            (333333.3, 125555.5, 1.4574179240855258),
            (3.33333333333e10, 1.255555555555e11, 43.23570534342665),
            (-3.0000001, 11.0, 6.856654383928824e9),
            (-3000.0001, 110.0, 0.963997631524568),
            (-7.7, 2.5, 0.7280854011698313),
            (-77.7, -25.5, 1.389427154414045),
            (-7777.7, -2555.5, 1.3889867337813122),
        ];
        for (b, x, want) in cases {
            check(hyp0f1(b, x), want);
        }
    }

    // ── 1F1 ──

    #[test]
    fn hyp1f1_special_values() {
        check(hyp1f1(NAN, 100.0, 10.0), NAN);
        check(hyp1f1(0.0, -4.0, 5.0), 1.0);
        check(hyp1f1(543.0, -4.0, 0.0), 1.0);
        check(hyp1f1(INF, INF, 1.0), 2.718281828459045);
        check(hyp1f1(INF, -INF, 1.0), 0.36787944117144233);
        check(hyp1f1(INF, 1.0, -1.0), NAN);
        check(hyp1f1(20.0, INF, 1.0), 1.0);
        check(hyp1f1(20.0, -INF, 1.0), 1.0);
        check(hyp1f1(-3.9, -4.0, 5.0), NAN);
        check(hyp1f1(2.0, -4.0, 5.0), NAN);
        check(hyp1f1(-1.0, -4.0, -5.0), -0.25);
    }

    #[test]
    fn hyp1f1_reference_values() {
        let cases = [
            (11.0, 11.0, 0.999, 2.715564905318566687331982733345286907488),
            (-1.0, -4.1, -5.0, -0.21951219512195121951219512195121951219512195121951219512),
            (-5.432, 2.2, -700.9, 1.3727292185988063233762299021768245936154987855107037e12),
            (-5.432, 2.2, -9700.9, 2.0692262222416140055851251664249965291876090468930709e18),
            (-5.432e-7, 2.2e-7, -9700.9, 3.469109295491283049683835128457572813179185164196529536809),
            (-11.0, 11.0, 9.999, -0.000486757541885359591903042751140800),
            (12.5, 11.75, 19.999, 1.024636534533486247341780883267801707746e9),
            (2.5, 3.5, 100.0, 6.619995042577486e41),
            (3.5, 2.5, -100.0, -1.450829630648126e-42),
            (2.0, 4.0, 5.0, 21.707494910771032),
            (2.0, 4.0, -5.0, 0.14626395019169272),
            (-2.0, -4.0, 5.0, 5.583333333333333),
            (1.0, 1e10, 5.0, 1.0000000005),
            (-10.0, -1000.0, 5e7, 1.0218603619401191e47),
            (-999.0, -1000.0, 0.005, 1.0050074957967967),
            (-543.43, -532.32, -324.432, -1.1198647713125607e141),
            (-10.0, 1.0, 5.0, 1.7562761794532629),
        ];
        for (a, b, x, want) in cases {
            check(hyp1f1(a, b, x), want);
        }
    }

    #[test]
    fn hyp1f1_minus_infinity_limit() {
        assert_eq!(hyp1f1(2.5, 3.0, -INF), 0.0);
        assert_eq!(hyp1f1(-0.5, 3.0, -INF), INF);
    }

    // ── 2F1 ──

    #[test]
    fn hyp2f1_reference_values() {
        check(hyp_pfq(&[INF, 9.0], &[-INF], 1.0), 1.0 / 512.0);
        check(hyp2f1(11.0, 9.0, -7.0, 0.0), 1.0);
        check(hyp2f1(-11.0, -9.0, -7.0, -5.0), NAN);
        check(hyp2f1(11.0, 9.0, -7.0, 0.1), NAN);
        check(hyp2f1(-10.1, -1.02, -5.0003, 1.999), NAN);
        check(hyp2f1(1.0, 2.2, 1.0, 1.5), NAN);
        check(hyp2f1(1.0, 2.0, 1.0, 0.5), 4.0);
        check(hyp2f1(3.0, 4.0, 8.0, 1.0), 35.0);
        check(hyp2f1(11.0, 9.0, 7.0, 0.1), 4.392161690778547690302457429384115309585456127951100973539);
        check(hyp2f1(1.0, 2.0, 11.0, -0.5), 0.918967125770628926427512111627668135785112812919289317012);
        check(hyp2f1(-10.1, -1.02, -5.3, 0.999), -0.86248371770779415948376560290918292774539519280219510389);
        check(hyp2f1(-11.0, 9.1, 7.1, 5.1), -4.3001996210395527789968701095461658841940532081377151e7);
        check(hyp2f1(-7.0, -9.0, -11.0, -5.0), 629856.0 / 11.0);
        check(hyp2f1(-10.0, -1.0, -5.0, 11.9), -22.8);
    }

    #[test]
    fn hyp2f1_beyond_minus_one_continues_through_pfaff() {
        check(hyp2f1(1.5, 0.5, 2.5, -3.0), 0.6198270018495268);
        check(hyp2f1(0.5, 0.75, 1.5, -10.0), 0.4786023883292274);
        // the parameter kept by the transform sets the degree
        check(hyp2f1(-3.0, -5.0, 2.0, -0.5), -0.5625);
        check(hyp2f1(-3.0, -3.5, 2.0, -0.5), -0.599609375);
    }

    // ── truncation ──

    #[test]
    fn non_integer_parameters_do_not_mask_truncation() {
        // 2F1(−½, −3; 1; 2) is a cubic
        check(hyp2f1(-0.5, -3.0, 1.0, 2.0), 3.0);
        check(hyp_pfq(&[-5.0, -2.5], &[-6.0], 2.0 / 0.7), 0.36782293092163975);
        check(hyp_pfq(&[-0.5, -2.0, 1.0], &[3.0, 4.0], 5.0), 1.3645833333333333);
    }

    #[test]
    fn non_integer_denominator_is_not_a_pole() {
        // −2.5 in b never meets a zero denominator
        check(hyp_pfq(&[-2.0, -0.5], &[-2.5], 3.0), -0.8);
    }

    // ── higher orders ──

    #[test]
    fn hyp_pfq_higher_orders() {
        check(hyp_pfq(&[11.0, 9.0, -7.0, INF], &[-INF, -INF], INF), -3.092849723114612e15);
        check(hyp_pfq(&[11.0, -9.0, INF, INF], &[-INF, -INF], 0.5), -2.46925295e7);
        check(hyp_pfq(&[11.0, -9.0, 1.0, 1.0], &[1.0, 1.0], 0.5), -2.46925295e7);
        check(hyp_pfq(&[11.0, 9.0, -7.0, 0.0], &[10.0, -1.0], 0.17), 1.0);
        check(hyp_pfq(&[11.0, 9.0, 7.0, 1.0], &[10.0, 1.0], 1.17), NAN);
        check(hyp_pfq(&[11.0, -9.0, 7.0, 1.0], &[10.0, 1.0], 0.17), -11.06499762995341472);
        check(hyp_pfq(&[11.0, -9.0, 7.0, 2.0], &[10.0, 1.0], 0.17), -153.3454736343267104);
        check(hyp_pfq(&[-11.0, 9.0, 7.0, 2.0], &[9.0, 7.0], 0.999), -1.88635604926837706836493630679805453798e8);
        check(
            hyp_pfq(&[11.0, -9.0, 7.0, 1.0, 10.0, 1.0, 0.17, 19.0], &[-23.4, 0.05, -2.222], 0.25),
            -4.895478076551896507233928858925372381540110041948574e34,
        );
        check(
            hyp_pfq(&[-11.0, 9.0, 7.0, 2.0, 9.0, 7.0, 0.17, 19.0], &[23.4, 0.05, -2.222], 0.25),
            1.4411904034175893283258108991983096641926408333514947e46,
        );
    }

    #[test]
    fn inputs_are_not_mutated() {
        let a = [1.0_f64, 2.0];
        let b = [1.0_f64];
        let _ = hyp_pfq(&a, &b, 0.5);
        assert_eq!(a, [1.0, 2.0]);
        assert_eq!(b, [1.0]);
    }
}
