//! Real branches of the Lambert W function.

use crate::algo::lambertw::{fritsch, initial, Branch};
use crate::machine::SpecialFloat;

/// 1/e.
const INV_E: f64 = 0.36787944117144233;

/// Lambert W function, the inverse of w ↦ w·eʷ, on branch `k`.
///
/// `k = 0` is the principal branch on x ≥ −1/e and `k = −1` the lower branch
/// on −1/e ≤ x < 0. Any other `k`, x outside the branch's domain and NaN
/// give NaN. W₀(0) = 0, W₋₁(0) = −∞, W(−1/e) = −1 and W₀(+∞) = +∞.
///
/// ```
/// use specfun::lambert_w;
///
/// let w = lambert_w(0, 4.5_f64);
/// assert!((w * w.exp() - 4.5).abs() < 1e-14);
/// assert!((lambert_w(-1, -0.1_f64) + 3.577152063957297).abs() < 1e-14);
/// ```
pub fn lambert_w<T: SpecialFloat>(k: i32, x: T) -> T {
    let zero = T::zero();
    let branch_point = -T::from_f64(INV_E);

    let branch = match k {
        0 => Branch::Principal,
        -1 => Branch::Lower,
        _ => return T::nan(),
    };
    if x.is_nan() || x < branch_point || (branch == Branch::Lower && x > zero) {
        return T::nan();
    }
    if x == zero {
        return match branch {
            Branch::Principal => zero,
            Branch::Lower => T::neg_infinity(),
        };
    }
    if x == branch_point {
        return -T::one();
    }
    if x == T::infinity() {
        return x;
    }

    fritsch(initial(branch, x), x)
}
