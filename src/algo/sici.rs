//! Rational approximations for the trigonometric integrals.
//!
//! For |x| ≤ 4, Si and Cin are Padé approximants in x². Beyond 4 both are
//! written through the auxiliary functions
//!
//! ```text
//! f(x) = ∫₀^∞ sin(t)/(t + x) dt,   g(x) = ∫₀^∞ cos(t)/(t + x) dt
//! ```
//!
//! which are themselves rational in 1/x². Coefficients from Rowe et al.,
//! "GalSim: The modular galaxy image simulation toolkit" (arXiv:1407.7676).

#![allow(clippy::excessive_precision)]

use crate::machine::SpecialFloat;
use crate::utils::horner;

#[rustfmt::skip]
const SI_NUM: [f64; 8] = [
    1.0,
    -4.54393409816329991e-2,
    1.15457225751016682e-3,
    -1.41018536821330254e-5,
    9.43280809438713025e-8,
    -3.53201978997168357e-10,
    7.08240282274875911e-13,
    -6.05338212010422477e-16,
];

#[rustfmt::skip]
const SI_DEN: [f64; 7] = [
    1.0,
    1.01162145739225565e-2,
    4.99175116169755106e-5,
    1.55654986308745614e-7,
    3.28067571055789734e-10,
    4.5049097575386581e-13,
    3.21107051193712168e-16,
];

#[rustfmt::skip]
const CIN_NUM: [f64; 7] = [
    -1.0 / 4.0,
    7.51851524438898291e-3,
    -1.27528342240267686e-4,
    1.05297363846239184e-6,
    -4.68889508144848019e-9,
    1.06480802891189243e-11,
    -9.93728488857585407e-15,
];

#[rustfmt::skip]
const CIN_DEN: [f64; 8] = [
    1.0,
    1.1592605689110735e-2,
    6.72126800814254432e-5,
    2.55533277086129636e-7,
    6.97071295760958946e-10,
    1.38536352772778619e-12,
    1.89106054713059759e-15,
    1.39759616731376855e-18,
];

#[rustfmt::skip]
const F_NUM: [f64; 11] = [
    1.0,
    7.44437068161936700618e2,
    1.96396372895146869801e5,
    2.37750310125431834034e7,
    1.43073403821274636888e9,
    4.33736238870432522765e10,
    6.40533830574022022911e11,
    4.20968180571076940208e12,
    1.00795182980368574617e13,
    4.94816688199951963482e12,
    -4.94701168645415959931e11,
];

#[rustfmt::skip]
const F_DEN: [f64; 10] = [
    1.0,
    7.46437068161927678031e2,
    1.97865247031583951450e5,
    2.41535670165126845144e7,
    1.47478952192985464958e9,
    4.58595115847765779830e10,
    7.08501308149515401563e11,
    5.06084464593475076774e12,
    1.43468549171581016479e13,
    1.11535493509914254097e13,
];

#[rustfmt::skip]
const G_NUM: [f64; 11] = [
    1.0,
    8.1359520115168615e2,
    2.35239181626478200e5,
    3.12557570795778731e7,
    2.06297595146763354e9,
    6.83052205423625007e10,
    1.09049528450362786e12,
    7.57664583257834349e12,
    1.81004487464664575e13,
    6.43291613143049485e12,
    -1.36517137670871689e12,
];

#[rustfmt::skip]
const G_DEN: [f64; 10] = [
    1.0,
    8.19595201151451564e2,
    2.40036752835578777e5,
    3.26026661647090822e7,
    2.23355543278099360e9,
    7.87465017341829930e10,
    1.39866710696414565e12,
    1.17164723371736605e13,
    4.01839087307656620e13,
    3.99653257887490811e13,
];

/// Si(x) for |x| ≤ 4.
pub(crate) fn si_small<T: SpecialFloat>(x: T) -> T {
    let x2 = x * x;
    x * horner(x2, &SI_NUM) / horner(x2, &SI_DEN)
}

/// Cin(x) for |x| ≤ 4.
pub(crate) fn cin_small<T: SpecialFloat>(x: T) -> T {
    let x2 = x * x;
    -x2 * horner(x2, &CIN_NUM) / horner(x2, &CIN_DEN)
}

/// Auxiliary f(x) for x > 4.
pub(crate) fn aux_f<T: SpecialFloat>(x: T) -> T {
    let y = T::one() / (x * x);
    horner(y, &F_NUM) / (x * horner(y, &F_DEN))
}

/// Auxiliary g(x) for x > 4.
pub(crate) fn aux_g<T: SpecialFloat>(x: T) -> T {
    let y = T::one() / (x * x);
    y * horner(y, &G_NUM) / horner(y, &G_DEN)
}

/// Ci(x) for x > 4.
pub(crate) fn ci_large<T: SpecialFloat>(x: T) -> T {
    let (sin, cos) = x.sin_cos();
    sin * aux_f(x) - cos * aux_g(x)
}
