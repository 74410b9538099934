//! Pure Rust real-valued special functions.
//!
//! This crate provides the gamma family (Γ, ln|Γ|, gamma ratios, Pochhammer,
//! Beta, digamma, trigamma, polygamma, harmonic numbers, incomplete gamma),
//! exponential and trigonometric integrals (Ei, Eₙ, li, Si, Ci, Cin, Shi,
//! Chi), generalised hypergeometric series, classical orthogonal
//! polynomials, spherical harmonics, the real branches of Lambert W and the
//! Riemann zeta and Dirichlet eta functions.
//!
//! Every function is generic over [`SpecialFloat`], implemented for `f64`
//! and `f32`. Evaluation never panics: domain errors give NaN and poles give
//! signed infinities.
//!
//! ```
//! use specfun::{digamma, gamma, lambert_w, EULER_GAMMA};
//!
//! assert_eq!(gamma(6.0_f64), 120.0);
//! assert!((digamma(1.0_f64) + EULER_GAMMA).abs() < 1e-15);
//!
//! let w = lambert_w(0, 1.0_f64);
//! assert!((w * w.exp() - 1.0).abs() < 1e-15);
//! ```
//!
//! # Features
//!
//! - `std` (default): uses the platform math library and hardware FMA.
//! - `libm`: pure Rust math for `no_std` targets. Build with
//!   `default-features = false, features = ["libm"]`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub(crate) mod algo;

pub mod constants;
pub mod expint;
pub mod gamma;
pub mod gammainc;
pub mod hypergeometric;
pub mod lambertw;
pub mod machine;
pub mod numbers;
pub mod orthopoly;
pub mod polygamma;
pub mod sici;
pub mod types;
pub mod utils;
pub mod zeta;

pub use constants::{CAHEN, CATALAN, EULER_GAMMA, GLAISHER, LI_2, OMEGA, PHI, PLASTIC};
pub use machine::SpecialFloat;
pub use types::{Error, SignedLog};
pub use utils::{cospi, is_non_pos_int, is_odd, poly, pow_n1, remove_common_elements, sinpi};

// ── Gamma family ──

pub use gamma::{beta, gamma, gamma_ratio, gamma_sign, lgamma, lgamma_ratio, poch};
pub use gammainc::{gamma_inc_l, gamma_inc_u, gamma_reg_p, gamma_reg_q};
pub use polygamma::{digamma, harmonic, polygamma, trigamma};

// ── Integrals ──

pub use expint::{chi, ei, en, li, li2, shi};
pub use sici::{ci, cin, si};

// ── Series and polynomials ──

pub use hypergeometric::{hyp0f1, hyp1f1, hyp2f1, hyp_pfq};
pub use orthopoly::{
    chebyshev_t, chebyshev_u, gegenbauer_c, hermite_h, hermite_he, jacobi_p, laguerre_al,
    laguerre_l, legendre_ap, legendre_p, legendre_q, spherical_harmonic_y, zernike_r,
};

// ── Other ──

pub use lambertw::lambert_w;
pub use numbers::fibonacci;
pub use zeta::{eta, zeta};
