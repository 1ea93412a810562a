//! This module implements the `PeoeSolver` for computing partial charges.
//!
//! The solver reads element symbols, formal charges and bonds through the `StructureView`
//! trait, resolves each atom's hybridization descriptor, assigns Gasteiger-Marsili
//! coefficients from a `Parameters` table, and runs a fixed number of damped
//! charge-transfer rounds along the bonds.

use super::{
    equalizer::{AtomParameters, equalize},
    options::SolverOptions,
};
use crate::{
    assignment::{Diagnostic, assign_parameters},
    error::PeoeError,
    hybridization::resolve_descriptors,
    params::{self, Parameters},
    types::{AtomView, BondView, CalculationResult, StructureView, validate_bond},
};

/// The main solver for Gasteiger-Marsili PEOE calculations.
///
/// The solver holds no per-structure state; a single instance can be reused for any number of
/// structures, including from several threads at once.
pub struct PeoeSolver<'p> {
    /// Reference to the electronegativity parameters used in calculations.
    parameters: &'p Parameters,
    /// Configuration options for the solver.
    options: SolverOptions,
}

impl<'p> PeoeSolver<'p> {
    /// Creates a new `PeoeSolver` with default options.
    ///
    /// # Arguments
    ///
    /// * `parameters` - A reference to the `Parameters` holding the coefficient tables.
    ///
    /// # Returns
    ///
    /// A new `PeoeSolver` running six rounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use peoe::{PeoeSolver, get_default_parameters};
    ///
    /// let solver = PeoeSolver::new(get_default_parameters());
    /// assert_eq!(solver.options().iterations, 6);
    /// ```
    pub fn new(parameters: &'p Parameters) -> Self {
        Self {
            parameters,
            options: SolverOptions::default(),
        }
    }

    /// Configures the solver with custom options.
    ///
    /// # Arguments
    ///
    /// * `options` - The `SolverOptions` to apply to the solver.
    ///
    /// # Returns
    ///
    /// The solver with the specified options.
    ///
    /// # Examples
    ///
    /// ```
    /// use peoe::{PeoeSolver, SolverOptions, get_default_parameters};
    ///
    /// let solver = PeoeSolver::new(get_default_parameters())
    ///     .with_options(SolverOptions { iterations: 1 });
    /// ```
    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    /// The options this solver runs with.
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Computes partial charges using the formal charges annotated on the atoms.
    ///
    /// Atoms without a formal-charge annotation start from zero. If no atom is annotated,
    /// a `Diagnostic::FormalChargesAssumedZero` advisory is added to the result.
    ///
    /// # Errors
    ///
    /// Returns `PeoeError::MissingBonds` if the structure carries no bond data, and
    /// `PeoeError::InvalidBond` or `PeoeError::AtomCountMismatch` if the bond data does not fit
    /// the atoms. Missing parameters are not errors; the affected charges are `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use peoe::{Atom, BondType, PeoeSolver, SolverOptions, Structure, get_default_parameters};
    ///
    /// // Fluoromethane: C, F, H, H, H
    /// let atoms = ["C", "F", "H", "H", "H"]
    ///     .into_iter()
    ///     .map(|symbol| Atom::new(symbol).with_formal_charge(0))
    ///     .collect();
    /// let bonds = [
    ///     (0, 1, BondType::Single),
    ///     (0, 2, BondType::Single),
    ///     (0, 3, BondType::Single),
    ///     (0, 4, BondType::Single),
    /// ];
    /// let fluoromethane = Structure::new(atoms, &bonds).unwrap();
    ///
    /// let solver = PeoeSolver::new(get_default_parameters());
    /// let result = solver.solve(&fluoromethane).unwrap();
    ///
    /// let fluorine = result.charges[1].unwrap();
    /// assert!((fluorine - (-0.253)).abs() < 1e-3);
    /// assert!(result.diagnostics.is_empty());
    /// ```
    pub fn solve<S: StructureView>(&self, structure: &S) -> Result<CalculationResult, PeoeError> {
        self.run(structure, None)
    }

    /// Computes partial charges starting from the given formal charges.
    ///
    /// The override takes precedence over any annotation on the atoms and must have one
    /// entry per atom.
    ///
    /// # Errors
    ///
    /// Returns `PeoeError::ChargeCountMismatch` if `formal_charges` has the wrong length, and
    /// otherwise fails exactly like [`solve`](Self::solve).
    pub fn solve_with_formal_charges<S: StructureView>(
        &self,
        structure: &S,
        formal_charges: &[i32],
    ) -> Result<CalculationResult, PeoeError> {
        self.run(structure, Some(formal_charges))
    }

    fn run<S: StructureView>(
        &self,
        structure: &S,
        formal_charge_override: Option<&[i32]>,
    ) -> Result<CalculationResult, PeoeError> {
        let bond_view = structure.bonds().ok_or(PeoeError::MissingBonds)?;
        let atoms = structure.atoms();
        let n_atoms = atoms.len();

        if bond_view.atom_count() != n_atoms {
            return Err(PeoeError::AtomCountMismatch {
                atoms: n_atoms,
                bond_atoms: bond_view.atom_count(),
            });
        }
        let bonds = bond_view.bonds();
        for bond in bonds {
            validate_bond(bond, n_atoms)?;
        }

        let mut diagnostics = Vec::new();
        let formal_charges = match formal_charge_override {
            Some(charges) if charges.len() != n_atoms => {
                return Err(PeoeError::ChargeCountMismatch {
                    expected: n_atoms,
                    found: charges.len(),
                });
            }
            Some(charges) => charges.to_vec(),
            None => annotated_formal_charges(atoms, &mut diagnostics),
        };

        log::debug!(
            "PEOE: {} atoms, {} bonds, {} rounds",
            n_atoms,
            bonds.len(),
            self.options.iterations
        );

        let partners = bond_view.all_bonds();
        if partners.atom_count() != n_atoms {
            return Err(PeoeError::AtomCountMismatch {
                atoms: n_atoms,
                bond_atoms: partners.atom_count(),
            });
        }

        let elements: Vec<Option<u8>> = atoms
            .iter()
            .map(|atom| params::atomic_number(atom.element()))
            .collect();
        let descriptors = resolve_descriptors(&elements, &partners, &formal_charges);
        let assignment =
            assign_parameters(atoms, &elements, &descriptors, bonds, self.parameters);
        diagnostics.extend(assignment.diagnostics);

        for diagnostic in &diagnostics {
            log::warn!("{}", diagnostic);
        }

        let atom_parameters: Vec<Option<AtomParameters>> = elements
            .iter()
            .zip(&assignment.coefficients)
            .map(|(&element, coefficients)| {
                coefficients.map(|coefficients| AtomParameters::new(element, coefficients))
            })
            .collect();

        let mut charges: Vec<Option<f64>> = formal_charges
            .iter()
            .map(|&charge| Some(f64::from(charge)))
            .collect();
        equalize(
            &atom_parameters,
            bonds,
            &mut charges,
            self.options.iterations,
        );

        Ok(CalculationResult {
            charges,
            iterations: self.options.iterations,
            diagnostics,
        })
    }
}

/// Reads the formal charge of every atom, defaulting to zero.
fn annotated_formal_charges<A: AtomView>(
    atoms: &[A],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<i32> {
    if !atoms.is_empty() && atoms.iter().all(|atom| atom.formal_charge().is_none()) {
        diagnostics.push(Diagnostic::FormalChargesAssumedZero);
    }
    atoms
        .iter()
        .map(|atom| atom.formal_charge().unwrap_or(0))
        .collect()
}
