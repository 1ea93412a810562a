use super::constants::{HYDROGEN, HYDROGEN_CATION_ELECTRONEGATIVITY};
use crate::params::Coefficients;

/// Evaluates `a + b*q + c*q^2` for an atom with partial charge `charge`.
#[inline]
pub fn electronegativity(coefficients: &Coefficients, charge: f64) -> f64 {
    coefficients.a + coefficients.b * charge + coefficients.c * (charge * charge)
}

/// The electronegativity of an atom carrying one positive charge, `a + b + c`.
///
/// Hydrogen is the exception: it returns the electronegativity of the bare proton.
#[inline]
pub fn positive_electronegativity(atomic_number: Option<u8>, coefficients: &Coefficients) -> f64 {
    if atomic_number == Some(HYDROGEN) {
        HYDROGEN_CATION_ELECTRONEGATIVITY
    } else {
        electronegativity(coefficients, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARBON_SP3: Coefficients = Coefficients::new(7.98, 9.18, 1.88);
    const HYDROGEN_S: Coefficients = Coefficients::new(7.17, 6.24, -0.56);

    #[test]
    fn neutral_atom_electronegativity_is_a() {
        assert_eq!(electronegativity(&CARBON_SP3, 0.0), 7.98);
    }

    #[test]
    fn electronegativity_is_quadratic_in_charge() {
        let expected = 7.98 - 9.18 * 0.5 + 1.88 * 0.25;
        assert!((electronegativity(&CARBON_SP3, -0.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn quadratic_term_squares_the_charge_first() {
        // c*(q*q) and (c*q)*q differ in the last bit here.
        assert_eq!(electronegativity(&CARBON_SP3, -0.942), 1.0006843200000015);
    }

    #[test]
    fn positive_electronegativity_sums_coefficients() {
        assert!((positive_electronegativity(Some(6), &CARBON_SP3) - 19.04).abs() < 1e-12);
    }

    #[test]
    fn hydrogen_uses_the_proton_value() {
        assert_eq!(
            positive_electronegativity(Some(HYDROGEN), &HYDROGEN_S),
            HYDROGEN_CATION_ELECTRONEGATIVITY
        );
        assert!((electronegativity(&HYDROGEN_S, 1.0) - 12.85).abs() < 1e-12);
    }
}
