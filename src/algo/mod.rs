//! Internal evaluation kernels.
//!
//! The public modules handle special values and pick a region; the kernels
//! here do the numerical work for one region each. All functions are
//! `pub(crate)` and assume their caller has already filtered NaN, infinities
//! and poles.
//!
//! # Termination
//!
//! Every iterative kernel stops on whichever comes first: the relative size
//! of the last term falling below [`SpecialFloat::tol`] or a named iteration
//! cap. Continued fractions are evaluated bottom-up at a fixed depth.
//!
//! # Clippy suppressions
//!
//! Modules holding coefficient tables carry
//! `#![allow(clippy::excessive_precision)]`: the tables are transcribed at
//! the precision of their published source, and rounding them to what
//! clippy considers representable would obscure the correspondence.
//!
//! [`SpecialFloat::tol`]: crate::SpecialFloat::tol

// Gamma family
pub(crate) mod incgamma;
pub(crate) mod polygamma;

// Integrals
pub(crate) mod ei;
pub(crate) mod sici;

// Series and roots
pub(crate) mod hyp;
pub(crate) mod lambertw;
pub(crate) mod zeta;
