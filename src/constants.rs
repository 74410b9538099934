//! Mathematical constants.
//!
//! Values are the f64 roundings of the OEIS decimal expansions. Generic code
//! converts them with [`SpecialFloat::from_f64`](crate::SpecialFloat::from_f64).

#![allow(clippy::excessive_precision)]

/// Euler–Mascheroni constant γ (OEIS A001620).
pub const EULER_GAMMA: f64 = 0.57721566490153286060651209008240243104215933593992;

/// Catalan's constant G (OEIS A006752).
pub const CATALAN: f64 = 0.91596559417721901505460351493238411077414937428167;

/// Glaisher–Kinkelin constant A (OEIS A074962).
pub const GLAISHER: f64 = 1.28242712910062263687534256886979172776768892732500;

/// Omega constant Ω = W₀(1), the solution of Ω·e^Ω = 1 (OEIS A030178).
pub const OMEGA: f64 = 0.56714329040978387299996866221035554975381578718651;

/// Plastic number ρ, the real root of x³ = x + 1 (OEIS A060006).
pub const PLASTIC: f64 = 1.32471795724474602596090885447809734073440405690173;

/// Cahen's constant (OEIS A118227).
pub const CAHEN: f64 = 0.64341054628833802618225430775756476328658786026823;

/// Golden ratio φ = (1 + √5)/2.
pub const PHI: f64 = 1.61803398874989484820458683436563811772030917980576;

/// Li(2), the offset between the two logarithmic integrals (OEIS A069284).
pub const LI_2: f64 = 1.04516378011749278484458888919461313652261557815120;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omega_satisfies_its_definition() {
        assert!((OMEGA * OMEGA.exp() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn plastic_is_root_of_cubic() {
        assert!((PLASTIC * PLASTIC * PLASTIC - PLASTIC - 1.0).abs() < 1e-15);
    }

    #[test]
    fn golden_ratio() {
        assert!((PHI * PHI - PHI - 1.0).abs() < 1e-15);
    }
}
