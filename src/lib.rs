//! Gasteiger-Marsili partial charges by partial equalization of orbital electronegativity (PEOE).
//!
//! The library computes one partial charge per atom of a bonded structure. Electronegativity
//! parameters are selected from each atom's hybridization state, which is read off its bond
//! types, and charge then flows along the bonds over a fixed number of damped rounds. Atoms for
//! which no parameters exist receive an undefined charge and are reported through advisory
//! [`Diagnostic`]s rather than errors.

pub mod assignment;
pub mod error;
pub mod hybridization;
pub mod math;
pub mod params;
pub mod solver;
pub mod types;

pub use assignment::Diagnostic;
pub use error::PeoeError;
pub use hybridization::Descriptor;
pub use params::{Coefficients, Parameters};
pub use solver::{PeoeSolver, SolverOptions};
pub use types::{
    Atom, AtomView, Bond, BondList, BondType, BondView, CalculationResult, PartnerTable,
    Structure, StructureView,
};

use std::sync::OnceLock;

static DEFAULT_PARAMETERS: OnceLock<Parameters> = OnceLock::new();

/// Returns the Gasteiger-Marsili parameter tables shipped with the library.
///
/// The embedded tables cover H, C, N, O, S, F, Cl, Br and I. They are parsed on first use and
/// shared for the rest of the process.
pub fn get_default_parameters() -> &'static Parameters {
    DEFAULT_PARAMETERS.get_or_init(|| {
        const DEFAULT_PARAMS_TOML: &str = include_str!("../resources/peoe.data.toml");
        Parameters::load_from_str(DEFAULT_PARAMS_TOML)
            .expect("Failed to parse embedded default parameters. This is a library bug.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_default_parameters() {
        let params1 = get_default_parameters();
        for element in [1, 6, 7, 8, 9, 16, 17, 35, 53] {
            assert!(
                params1.by_bond_type.contains_key(&element),
                "element {} should have bond-type entries",
                element
            );
            assert!(
                params1.by_partner_count.contains_key(&element),
                "element {} should have partner-count entries",
                element
            );
        }

        let params2 = get_default_parameters();
        assert_eq!(
            params1 as *const _, params2 as *const _,
            "Subsequent calls should return a cached reference"
        );
    }

    #[test]
    fn test_default_parameters_cover_expected_states() {
        let params = get_default_parameters();

        assert_eq!(
            params.by_bond_type(6, BondType::Aromatic),
            Ok(Coefficients::new(8.79, 9.18, 1.88))
        );
        assert_eq!(
            params.by_bond_type(8, BondType::Aromatic),
            params.by_bond_type(8, BondType::Single)
        );
        assert_eq!(
            params.by_bond_type(16, BondType::Aromatic),
            params.by_bond_type(16, BondType::Single)
        );
        assert!(params.by_bond_type(7, BondType::Aromatic).is_err());
        assert!(params.by_bond_type(8, BondType::Triple).is_err());
        assert_eq!(
            params.by_partner_count(7, 4),
            params.by_partner_count(7, 3)
        );
        assert_eq!(
            params.by_partner_count(6, 2),
            params.by_bond_type(6, BondType::Triple)
        );
    }
}
