//! The damped charge-transfer rounds of the PEOE procedure.

use crate::{
    math::{
        constants::DAMPING_DECAY,
        electronegativity::{electronegativity, positive_electronegativity},
    },
    params::Coefficients,
    types::Bond,
};

/// Per-atom quantities that stay fixed across rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomParameters {
    /// The atom's electronegativity coefficients.
    pub coefficients: Coefficients,
    /// Scales the charge an atom gives away; see [`positive_electronegativity`].
    pub divisor: f64,
}

impl AtomParameters {
    /// Creates the fixed per-atom quantities from an atom's coefficients.
    ///
    /// # Arguments
    ///
    /// * `atomic_number` - The atom's atomic number, if its element is known.
    /// * `coefficients` - The coefficients assigned to the atom.
    ///
    /// # Returns
    ///
    /// The coefficients together with the divisor `a + b + c`, or the proton electronegativity
    /// for hydrogen.
    ///
    /// # Examples
    ///
    /// ```
    /// use peoe::Coefficients;
    /// use peoe::solver::AtomParameters;
    ///
    /// let hydrogen = AtomParameters::new(Some(1), Coefficients::new(7.17, 6.24, -0.56));
    /// assert_eq!(hydrogen.divisor, 20.02);
    ///
    /// let carbon = AtomParameters::new(Some(6), Coefficients::new(7.98, 9.18, 1.88));
    /// assert!((carbon.divisor - 19.04).abs() < 1e-12);
    /// ```
    pub fn new(atomic_number: Option<u8>, coefficients: Coefficients) -> Self {
        Self {
            coefficients,
            divisor: positive_electronegativity(atomic_number, &coefficients),
        }
    }
}

/// Runs `rounds` equalization rounds over `bonds`, updating `charges` in place.
///
/// `atoms` and `charges` are indexed alike. An atom without parameters that takes part in
/// a bond loses its charge (`None`) in the first round and keeps it undefined; its
/// bond partner is not modified by that bond. Unbonded atoms are never touched.
pub fn equalize(
    atoms: &[Option<AtomParameters>],
    bonds: &[Bond],
    charges: &mut [Option<f64>],
    rounds: u32,
) {
    let mut damping = 1.0;
    let mut estimates: Vec<Option<f64>> = vec![None; atoms.len()];

    for round in 1..=rounds {
        damping *= DAMPING_DECAY;

        for (estimate, (atom, charge)) in estimates.iter_mut().zip(atoms.iter().zip(charges.iter())) {
            *estimate = match (atom, charge) {
                (Some(atom), Some(charge)) => Some(electronegativity(&atom.coefficients, *charge)),
                _ => None,
            };
        }

        for bond in bonds {
            let (i, j) = (bond.atom_i, bond.atom_j);
            match (estimates[i], estimates[j], atoms[i], atoms[j]) {
                (Some(en_i), Some(en_j), Some(atom_i), Some(atom_j)) => {
                    // Equal estimates take atom j's divisor; the transfer is zero then.
                    let divisor = if en_j > en_i {
                        atom_i.divisor
                    } else {
                        atom_j.divisor
                    };
                    let transfer = ((en_j - en_i) / divisor) * damping;
                    apply(&mut charges[i], transfer);
                    apply(&mut charges[j], -transfer);
                }
                _ => {
                    if estimates[i].is_none() {
                        charges[i] = None;
                    }
                    if estimates[j].is_none() {
                        charges[j] = None;
                    }
                }
            }
        }

        log::trace!("PEOE round {} (damping {}) finished", round, damping);
    }
}

#[inline]
fn apply(charge: &mut Option<f64>, transfer: f64) {
    if let Some(value) = charge {
        *value += transfer;
    }
}
