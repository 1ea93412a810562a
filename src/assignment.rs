//! Assignment of electronegativity coefficients to atoms.
//!
//! Every atom receives coefficients from the parameter tables according to its resolved
//! descriptor, or `None` when no entry matches. Gaps are collected per run and reported once
//! per distinct element or valence state as `Diagnostic` advisories.

use crate::{
    hybridization::Descriptor,
    params::{self, Coefficients, LookupFailure, Parameters},
    types::{AtomView, Bond, BondType},
};
use std::collections::BTreeSet;
use std::fmt;

/// An advisory notice raised during a calculation.
///
/// Diagnostics never abort the calculation. They flag inputs for which the resulting
/// charges are degraded or undefined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No formal charges were supplied or annotated, so all were taken as zero.
    FormalChargesAssumedZero,
    /// Some atoms have bonds of unknown type and were parametrized by partner count.
    UnspecifiedBondTypes {
        /// Indices of the affected atoms, ascending.
        atoms: Vec<usize>,
    },
    /// Every bond of the structure has an unknown type.
    AllBondTypesUnspecified,
    /// Known elements were found in states the tables do not cover.
    UnparametrizedValences {
        /// Distinct `(element, descriptor)` pairs, sorted.
        states: Vec<(String, Descriptor)>,
    },
    /// Elements absent from the tables were found.
    UnparametrizedElements {
        /// Distinct element symbols, sorted.
        elements: Vec<String>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FormalChargesAssumedZero => f.write_str(
                "No formal charges were given and the structure has no charge annotation; \
                 all formal charges are assumed to be zero",
            ),
            Diagnostic::UnspecifiedBondTypes { atoms } => write!(
                f,
                "Some atoms have bonds of unspecified type; their hybridization state is derived \
                 from the number of binding partners, which can be erroneous. Affected atoms: {}",
                join(atoms.iter())
            ),
            Diagnostic::AllBondTypesUnspecified => f.write_str(
                "Every bond type is unspecified; hybridization states are derived from the number \
                 of binding partners, which can lead to erroneous results",
            ),
            Diagnostic::UnparametrizedValences { states } => write!(
                f,
                "Parameters are not available for the following valence states, their \
                 electronegativity is undefined: {}",
                join(
                    states
                        .iter()
                        .map(|(element, descriptor)| format!("{} ({})", element, descriptor))
                )
            ),
            Diagnostic::UnparametrizedElements { elements } => write!(
                f,
                "Parameters are not available for the following elements, their \
                 electronegativity is undefined: {}",
                join(elements.iter())
            ),
        }
    }
}

fn join<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Coefficients for every atom plus the advisories raised while looking them up.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// One entry per atom; `None` where no parameters apply.
    pub coefficients: Vec<Option<Coefficients>>,
    /// Advisories in reporting order: unspecified bond types, then valence gaps, then
    /// unknown elements.
    pub diagnostics: Vec<Diagnostic>,
}

/// Looks up the coefficients of every atom in index order.
///
/// `elements` and `descriptors` must have one entry per atom. `bonds` is only inspected to
/// detect structures whose bond types are all unknown.
pub fn assign_parameters<A: AtomView>(
    atoms: &[A],
    elements: &[Option<u8>],
    descriptors: &[Descriptor],
    bonds: &[Bond],
    parameters: &Parameters,
) -> Assignment {
    let mut coefficients = Vec::with_capacity(atoms.len());
    let mut unknown_elements = BTreeSet::new();
    let mut unknown_states = BTreeSet::new();
    let mut unspecified_atoms = Vec::new();

    for (index, ((atom, &element), &descriptor)) in
        atoms.iter().zip(elements).zip(descriptors).enumerate()
    {
        let lookup = match descriptor {
            // Ions are expected to be unbonded; nothing to report.
            Descriptor::Isolated => {
                coefficients.push(None);
                continue;
            }
            Descriptor::PartnerCount(count) => {
                unspecified_atoms.push(index);
                element
                    .ok_or(LookupFailure::UnknownElement)
                    .and_then(|z| parameters.by_partner_count(z, count))
            }
            Descriptor::BondType(bond_type) => element
                .ok_or(LookupFailure::UnknownElement)
                .and_then(|z| parameters.by_bond_type(z, bond_type)),
        };

        match lookup {
            Ok(found) => coefficients.push(Some(found)),
            Err(LookupFailure::UnknownElement) => {
                unknown_elements.insert(element_label(element, atom.element()));
                coefficients.push(None);
            }
            Err(LookupFailure::UnknownDescriptor) => {
                unknown_states.insert((element_label(element, atom.element()), descriptor));
                coefficients.push(None);
            }
        }
    }

    let mut diagnostics = Vec::new();
    let all_unspecified =
        !bonds.is_empty() && bonds.iter().all(|bond| bond.bond_type == BondType::Any);
    if all_unspecified {
        diagnostics.push(Diagnostic::AllBondTypesUnspecified);
    } else if !unspecified_atoms.is_empty() {
        diagnostics.push(Diagnostic::UnspecifiedBondTypes {
            atoms: unspecified_atoms,
        });
    }
    if !unknown_states.is_empty() {
        diagnostics.push(Diagnostic::UnparametrizedValences {
            states: unknown_states.into_iter().collect(),
        });
    }
    if !unknown_elements.is_empty() {
        diagnostics.push(Diagnostic::UnparametrizedElements {
            elements: unknown_elements.into_iter().collect(),
        });
    }

    Assignment {
        coefficients,
        diagnostics,
    }
}

fn element_label(element: Option<u8>, symbol: &str) -> String {
    element
        .and_then(params::element_symbol)
        .map(str::to_string)
        .unwrap_or_else(|| symbol.trim().to_string())
}
