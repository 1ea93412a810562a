//! Hybridization state resolution from bond topology.
//!
//! Gasteiger-Marsili parameters exist per hybridization state, which is read off the highest
//! bond type an atom takes part in. When any of an atom's bonds has an unknown type, the
//! state is instead described by the number of binding partners. Aromatic nitrogen needs
//! extra care because aromaticity alone does not say whether it carries a double bond.

use crate::types::{BondType, PartnerTable};
use std::fmt;

const NITROGEN: u8 = 7;

/// The key used to select an atom's electronegativity parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Descriptor {
    /// The atom has no binding partners.
    Isolated,
    /// The highest bond type of the atom. Never `BondType::Any`.
    BondType(BondType),
    /// At least one bond type is unknown; the number of binding partners is used instead.
    PartnerCount(usize),
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Isolated => f.write_str("no binding partners"),
            Descriptor::BondType(bond_type) => write!(f, "bond type {}", bond_type),
            Descriptor::PartnerCount(1) => f.write_str("1 binding partner"),
            Descriptor::PartnerCount(count) => write!(f, "{} binding partners", count),
        }
    }
}

/// Resolves the descriptor of every atom.
///
/// `elements` holds the atomic number of each atom (`None` for unrecognized symbols) and
/// `formal_charges` the formal charge used to disambiguate aromatic nitrogen. Both must
/// have one entry per atom of `partners`.
pub fn resolve_descriptors(
    elements: &[Option<u8>],
    partners: &PartnerTable,
    formal_charges: &[i32],
) -> Vec<Descriptor> {
    elements
        .iter()
        .zip(formal_charges)
        .enumerate()
        .map(|(atom, (&element, &formal_charge))| {
            resolve_atom(element, partners, atom, formal_charge)
        })
        .collect()
}

fn resolve_atom(
    element: Option<u8>,
    partners: &PartnerTable,
    atom: usize,
    formal_charge: i32,
) -> Descriptor {
    let partner_count = partners.partner_count(atom);
    if partner_count == 0 {
        return Descriptor::Isolated;
    }

    // One unknown bond makes the whole picture unreliable.
    if partners
        .partners(atom)
        .any(|(_, bond_type)| bond_type == BondType::Any)
    {
        return Descriptor::PartnerCount(partner_count);
    }

    let highest = partners
        .partners(atom)
        .map(|(_, bond_type)| bond_type)
        .max()
        .unwrap_or(BondType::Any);

    if highest == BondType::Aromatic && element == Some(NITROGEN) {
        return Descriptor::BondType(aromatic_nitrogen_bond_type(partner_count, formal_charge));
    }

    Descriptor::BondType(highest)
}

/// Decides whether an aromatic nitrogen has only single bonds or also a double bond.
///
/// A third partner is an exocyclic substituent, which leaves the nitrogen with single bonds
/// only, as in pyrrole. With two ring partners, a negative charge marks a deprotonated
/// nitrogen whose lone pair sits in the ring; otherwise the nitrogen is pyridine-like.
pub fn aromatic_nitrogen_bond_type(partner_count: usize, formal_charge: i32) -> BondType {
    if partner_count >= 3 || formal_charge == -1 {
        BondType::Single
    } else {
        BondType::Double
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bond;

    fn table(atom_count: usize, bonds: &[(usize, usize, BondType)]) -> PartnerTable {
        let bonds: Vec<Bond> = bonds
            .iter()
            .map(|&(i, j, bond_type)| Bond::new(i, j, bond_type))
            .collect();
        PartnerTable::from_bonds(atom_count, &bonds)
    }

    #[test]
    fn highest_bond_type_wins() {
        // O=C-O with carbon in the middle.
        let partners = table(
            3,
            &[(0, 1, BondType::Double), (1, 2, BondType::Single)],
        );
        let descriptors = resolve_descriptors(&[Some(8), Some(6), Some(8)], &partners, &[0, 0, 0]);
        assert_eq!(
            descriptors,
            vec![
                Descriptor::BondType(BondType::Double),
                Descriptor::BondType(BondType::Double),
                Descriptor::BondType(BondType::Single),
            ]
        );
    }

    #[test]
    fn any_bond_forces_partner_count() {
        // The triple bond on atom 1 is ignored because its other bond is untyped.
        let partners = table(
            3,
            &[(0, 1, BondType::Triple), (1, 2, BondType::Any)],
        );
        let descriptors = resolve_descriptors(&[Some(7), Some(6), Some(1)], &partners, &[0, 0, 0]);
        assert_eq!(
            descriptors,
            vec![
                Descriptor::BondType(BondType::Triple),
                Descriptor::PartnerCount(2),
                Descriptor::PartnerCount(1),
            ]
        );
    }

    #[test]
    fn isolated_atoms_are_marked() {
        let partners = table(2, &[]);
        let descriptors = resolve_descriptors(&[Some(11), Some(17)], &partners, &[1, -1]);
        assert_eq!(descriptors, vec![Descriptor::Isolated, Descriptor::Isolated]);
    }

    #[test]
    fn aromatic_nitrogen_with_substituent_is_single_bonded() {
        // N bonded into a ring (atoms 1, 2) plus an exocyclic hydrogen (atom 3).
        let partners = table(
            4,
            &[
                (0, 1, BondType::Aromatic),
                (0, 2, BondType::Aromatic),
                (0, 3, BondType::Single),
            ],
        );
        for charge in [-1, 0, 1] {
            let descriptors = resolve_descriptors(
                &[Some(7), Some(6), Some(6), Some(1)],
                &partners,
                &[charge, 0, 0, 0],
            );
            assert_eq!(descriptors[0], Descriptor::BondType(BondType::Single));
        }
    }

    #[test]
    fn aromatic_nitrogen_with_two_partners_depends_on_charge() {
        let partners = table(
            3,
            &[(0, 1, BondType::Aromatic), (0, 2, BondType::Aromatic)],
        );
        let elements = [Some(7), Some(6), Some(6)];

        let anion = resolve_descriptors(&elements, &partners, &[-1, 0, 0]);
        assert_eq!(anion[0], Descriptor::BondType(BondType::Single));

        let neutral = resolve_descriptors(&elements, &partners, &[0, 0, 0]);
        assert_eq!(neutral[0], Descriptor::BondType(BondType::Double));

        let cation = resolve_descriptors(&elements, &partners, &[1, 0, 0]);
        assert_eq!(cation[0], Descriptor::BondType(BondType::Double));
    }

    #[test]
    fn aromatic_stays_aromatic_for_other_elements() {
        let partners = table(
            3,
            &[(0, 1, BondType::Aromatic), (0, 2, BondType::Aromatic)],
        );
        let descriptors = resolve_descriptors(&[Some(16), Some(6), None], &partners, &[0, 0, 0]);
        assert_eq!(
            descriptors,
            vec![
                Descriptor::BondType(BondType::Aromatic),
                Descriptor::BondType(BondType::Aromatic),
                Descriptor::BondType(BondType::Aromatic),
            ]
        );
    }

    #[test]
    fn descriptor_display() {
        assert_eq!(
            Descriptor::BondType(BondType::Triple).to_string(),
            "bond type triple"
        );
        assert_eq!(Descriptor::PartnerCount(1).to_string(), "1 binding partner");
        assert_eq!(Descriptor::PartnerCount(5).to_string(), "5 binding partners");
    }
}
