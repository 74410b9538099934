//! Initial estimates and refinement for the real branches of Lambert W.
//!
//! Each branch is covered by a series about the branch point −1/e, rational
//! fits in the middle range and the log-log asymptotic expansion for large
//! |ln|x||. One Fritsch step then brings the estimate to full precision.
//!
//! Reference: D. Veberič, "Lambert W function for applications in physics",
//! Comput. Phys. Commun. 183 (2012) 2622–2628, arXiv:1209.0735.

#![allow(clippy::excessive_precision)]

use core::f64::consts::{E, SQRT_2};

use crate::machine::SpecialFloat;
use crate::utils::horner;

/// Below this, W₀ is seeded from the branch-point series.
const W0_BRANCH: f64 = -0.32358170806015724;
/// Split between the two rational fits of W₀.
const W0_RATIONAL_0: f64 = 0.14546954290661823;
/// Above this, W₀ is seeded from the asymptotic expansion.
const W0_RATIONAL_1: f64 = 8.706658967856612;
/// Below this, W₋₁ is seeded from the branch-point series.
const WM1_BRANCH: f64 = -0.30298541769;
/// Above this, W₋₁ is seeded from the asymptotic expansion.
const WM1_RATIONAL: f64 = -0.051012917658221676;

/// W(p) about the branch point in p = ±√(2(1 + e·x)).
#[rustfmt::skip]
const BRANCH_POINT: [f64; 10] = [
    -1.0,
    1.0,
    -0.3333333333333333,
    0.1527777777777778,
    -0.07962962962962963,
    0.04450231481481481,
    -0.02598471487360376,
    0.01563563253233392,
    -0.009616892024299432,
    0.006014543252956118,
];

#[rustfmt::skip]
const W0_P0_NUM: [f64; 5] = [
    1.0, 5.931375839364438, 11.39220550532913, 7.33888339911111, 0.653449016991959,
];
#[rustfmt::skip]
const W0_P0_DEN: [f64; 5] = [
    1.0, 6.931373689597704, 16.82349461388016, 16.43072324143226, 5.115235195211697,
];

#[rustfmt::skip]
const W0_P1_NUM: [f64; 5] = [
    1.0, 2.445053070726557, 1.343664225958226, 0.148440055397592, 0.0008047501729130,
];
#[rustfmt::skip]
const W0_P1_DEN: [f64; 5] = [
    1.0, 3.444708986486002, 3.292489857371952, 0.916460018803122, 0.0530686404483322,
];

#[rustfmt::skip]
const WM1_NUM: [f64; 3] = [-7.81417672390744, 253.88810188892484, 657.9493176902304];
#[rustfmt::skip]
const WM1_DEN: [f64; 6] = [
    1.0, -60.43958713690808, 99.9856708310761, 682.6073999909428, 962.1784396969866,
    1477.9341280760887,
];

/// Branch orientation: +1 for W₀, −1 for W₋₁.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Branch {
    Principal,
    Lower,
}

impl Branch {
    fn sign<T: SpecialFloat>(self) -> T {
        match self {
            Branch::Principal => T::one(),
            Branch::Lower => -T::one(),
        }
    }
}

/// Starting estimate of W on `branch` for x in the branch's open domain.
pub(crate) fn initial<T: SpecialFloat>(branch: Branch, x: T) -> T {
    match branch {
        Branch::Principal => {
            if x < T::from_f64(W0_BRANCH) {
                branch_point(branch, x)
            } else if x < T::from_f64(W0_RATIONAL_0) {
                x * horner(x, &W0_P0_NUM) / horner(x, &W0_P0_DEN)
            } else if x < T::from_f64(W0_RATIONAL_1) {
                x * horner(x, &W0_P1_NUM) / horner(x, &W0_P1_DEN)
            } else {
                asymptotic(branch, x)
            }
        }
        Branch::Lower => {
            if x < T::from_f64(WM1_BRANCH) {
                branch_point(branch, x)
            } else if x < T::from_f64(WM1_RATIONAL) {
                horner(x, &WM1_NUM) / horner(x, &WM1_DEN)
            } else {
                asymptotic(branch, x)
            }
        }
    }
}

fn branch_point<T: SpecialFloat>(branch: Branch, x: T) -> T {
    let p = branch.sign::<T>()
        * T::from_f64(SQRT_2)
        * (T::one() + T::from_f64(E) * x).sqrt();
    horner(p, &BRANCH_POINT)
}

/// W ≈ a − b + b/a · (1 + q(b)/a + …) with a = ln(s·x), b = ln(s·a).
fn asymptotic<T: SpecialFloat>(branch: Branch, x: T) -> T {
    let s = branch.sign::<T>();
    let c = |v: f64| T::from_f64(v);

    let a = (s * x).ln();
    let b = (s * a).ln();

    let ba = b / a;
    let b2 = b * b;
    let b3 = b2 * b;
    let b4 = b2 * b2;

    let q0 = b - c(2.0);
    let q1 = c(2.0) * b2 - c(9.0) * b + c(6.0);
    let q2 = c(3.0) * b3 - c(22.0) * b2 + c(36.0) * b - c(12.0);
    let q3 = c(12.0) * b4 - c(125.0) * b3 + c(350.0) * b2 - c(300.0) * b + c(60.0);

    let two_a = c(2.0) * a;
    let series = q0 + (q1 + (q2 + q3 / (c(5.0) * a)) / two_a) / (c(3.0) * a);
    a - b + ba * (T::one() + series / two_a)
}

/// One step of Fritsch's iteration, which has quartic convergence.
pub(crate) fn fritsch<T: SpecialFloat>(w: T, x: T) -> T {
    let one = T::one();
    let two = T::from_f64(2.0);

    // x and w share a sign; for subnormal x the quotient x/w can underflow.
    let ratio = x / w;
    let lr = if ratio > T::zero() {
        ratio.ln()
    } else {
        x.abs().ln() - w.abs().ln()
    };
    let z = lr - w;
    let w1 = w + one;
    let q = two * w1 * (w1 + two * z / T::from_f64(3.0));
    let eps = z / w1 * (q - z) / (q - two * z);
    w * (one + eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(w: f64, x: f64) -> f64 {
        // ln|w| + w − ln|x|, zero at the exact root
        w.abs().ln() + w - x.abs().ln()
    }

    #[test]
    fn seeds_are_close_enough_for_one_step() {
        for &x in &[-0.36, -0.33, -0.2, 0.01, 0.1, 0.5, 3.0, 8.0, 20.0, 1e5, 1e200] {
            let w = initial(Branch::Principal, x);
            assert!(residual(w, x).abs() < 1e-2, "x={x} w={w}");
        }
        for &x in &[-0.36, -0.31, -0.2, -0.06, -0.04, -1e-8, -1e-300] {
            let w = initial(Branch::Lower, x);
            assert!(residual(w, x).abs() < 1e-2, "x={x} w={w}");
        }
    }

    #[test]
    fn fritsch_step_reaches_machine_precision() {
        for &x in &[-0.33, 0.1, 4.5, 100.12, 1e300] {
            let w = fritsch(initial(Branch::Principal, x), x);
            assert!(residual(w, x).abs() < 1e-12, "x={x}");
        }
        for &x in &[-0.33, -0.1, -0.01, -1e-100] {
            let w = fritsch(initial(Branch::Lower, x), x);
            assert!(residual(w, x).abs() < 1e-12, "x={x}");
        }
    }

    #[test]
    fn fritsch_handles_subnormal_argument() {
        let x = -5e-324_f64;
        let w = fritsch(initial(Branch::Lower, x), x);
        assert!(w.is_finite());
        assert!(residual(w, x).abs() < 1e-12);
    }

    #[test]
    fn branches_meet_at_the_branch_point() {
        let x = -0.367879_f64;
        let w0 = fritsch(initial(Branch::Principal, x), x);
        let wm1 = fritsch(initial(Branch::Lower, x), x);
        assert!(w0 > -1.0 && wm1 < -1.0);
        assert!((w0 - wm1).abs() < 1e-2);
    }
}
