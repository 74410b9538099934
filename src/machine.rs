//! Machine constants and the `SpecialFloat` trait.
//!
//! Every evaluator in the crate is generic over `SpecialFloat`. The trait
//! carries the precision-dependent knobs (series tolerance, overflow limits)
//! so the algorithms themselves stay free of `f64`-specific literals.

use num_traits::Float;

/// Floating-point trait for special function evaluation.
///
/// Implemented for `f64` and `f32`. Provides machine constants, the relative
/// tolerance used to stop iterative evaluators, saturation limits, and the
/// two primitives the algorithms need beyond [`Float`]: a fused multiply-add
/// and a signed log-gamma.
pub trait SpecialFloat: Float + core::fmt::Debug + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Smallest positive normal number.
    const MACH_TINY: Self;
    /// Largest representable number.
    const MACH_HUGE: Self;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`.
    /// Every coefficient table in the crate is written as f64 literals.
    fn from_f64(x: f64) -> Self;

    /// Relative tolerance at which series and products stop. Half the
    /// machine epsilon unless an implementation tightens it.
    #[inline]
    fn tol() -> Self {
        Self::MACH_EPSILON / Self::from_f64(2.0)
    }

    /// Largest argument for which `Ei(x)` is finite.
    fn ei_max() -> Self;

    /// Smallest argument for which `Ei(x)` does not underflow to zero.
    fn ei_min() -> Self;

    /// Fused multiply-add: `self * a + b`.
    ///
    /// With `std` enabled, uses hardware FMA via the C library `fma()`.
    /// Without `std`, falls back to plain `self * a + b` to avoid the
    /// slow software FMA in libm.
    ///
    /// Named `fma` to avoid ambiguity with [`Float::mul_add`].
    fn fma(self, a: Self, b: Self) -> Self;

    /// Natural logarithm of |Γ(self)| together with the sign of Γ(self).
    ///
    /// The sign is 1 at poles, NaN and infinities.
    fn lgamma_r(self) -> (Self, i32);
}

impl SpecialFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_TINY: f64 = 2.2250738585072014e-308;
    const MACH_HUGE: f64 = 1.7976931348623157e+308;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    // 1e-16, just under ε/2
    #[inline]
    fn tol() -> f64 {
        1e-16
    }
    #[inline]
    fn ei_max() -> f64 {
        716.0
    } // Ei(716) = 1.26e308
    #[inline]
    fn ei_min() -> f64 {
        -705.0
    } // Ei(-705) ~ -3.4e-309, subnormal

    #[cfg(feature = "std")]
    #[inline]
    fn fma(self, a: f64, b: f64) -> f64 {
        Float::mul_add(self, a, b)
    }

    #[cfg(not(feature = "std"))]
    #[inline]
    fn fma(self, a: f64, b: f64) -> f64 {
        self * a + b
    }

    #[inline]
    fn lgamma_r(self) -> (f64, i32) {
        libm::lgamma_r(self)
    }
}

impl SpecialFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_TINY: f32 = 1.1754944e-38;
    const MACH_HUGE: f32 = 3.4028235e+38;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn ei_max() -> f32 {
        94.0
    } // x - ln(x) > ln(MACH_HUGE) beyond ~93.3
    #[inline]
    fn ei_min() -> f32 {
        -104.0
    } // below the smallest subnormal

    #[cfg(feature = "std")]
    #[inline]
    fn fma(self, a: f32, b: f32) -> f32 {
        Float::mul_add(self, a, b)
    }

    #[cfg(not(feature = "std"))]
    #[inline]
    fn fma(self, a: f32, b: f32) -> f32 {
        self * a + b
    }

    #[inline]
    fn lgamma_r(self) -> (f32, i32) {
        libm::lgammaf_r(self)
    }
}
