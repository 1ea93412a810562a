//! This module defines the core types used in the peoe library for describing structures and results.
//!
//! It includes the `AtomView`, `BondView` and `StructureView` traits that abstract access to an
//! external molecular container, owned implementations of those traits (`Atom`, `BondList`,
//! `Structure`), and the `CalculationResult` returned by the solver. The traits let the solver
//! read element symbols, formal charges and bond topology from any host data structure without
//! conversion.

use crate::{assignment::Diagnostic, error::PeoeError};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// The type of a covalent bond.
///
/// Variants are ordered by the strength of the hybridization signal they carry, so the
/// maximum over an atom's bonds selects its descriptor. `Any` marks a bond whose type is
/// unknown; it sorts lowest but is handled as a wildcard by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum BondType {
    /// The bond type is unspecified.
    #[default]
    Any,
    Single,
    Double,
    Triple,
    /// A bond within an aromatic ring.
    Aromatic,
}

impl BondType {
    /// Returns the lowercase name used in parameter files.
    pub fn as_str(&self) -> &'static str {
        match self {
            BondType::Any => "any",
            BondType::Single => "single",
            BondType::Double => "double",
            BondType::Triple => "triple",
            BondType::Aromatic => "aromatic",
        }
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BondType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(BondType::Any),
            "single" => Ok(BondType::Single),
            "double" => Ok(BondType::Double),
            "triple" => Ok(BondType::Triple),
            "aromatic" => Ok(BondType::Aromatic),
            _ => Err(format!("unknown bond type: '{}'", s)),
        }
    }
}

/// An unordered bond between two atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    /// Index of the first atom.
    pub atom_i: usize,
    /// Index of the second atom.
    pub atom_j: usize,
    /// The annotated bond type, `BondType::Any` if unknown.
    pub bond_type: BondType,
}

impl Bond {
    /// Creates a new `Bond`.
    ///
    /// # Arguments
    ///
    /// * `atom_i` - Index of the first atom.
    /// * `atom_j` - Index of the second atom.
    /// * `bond_type` - The bond type, or `BondType::Any` if it is not known.
    ///
    /// # Returns
    ///
    /// A new `Bond`. Indices are not checked here; `BondList::new` and the solver validate them
    /// against the atom count.
    ///
    /// # Examples
    ///
    /// ```
    /// use peoe::{Bond, BondType};
    ///
    /// let bond = Bond::new(0, 1, BondType::Double);
    /// assert_eq!(bond.bond_type, BondType::Double);
    /// ```
    pub fn new(atom_i: usize, atom_j: usize, bond_type: BondType) -> Self {
        Self {
            atom_i,
            atom_j,
            bond_type,
        }
    }
}

/// A trait for viewing atom data without owning it.
///
/// The solver needs only the element and the formal charge of each atom. Implement this
/// trait on the atom type of an existing molecular container to run the calculation
/// in place.
pub trait AtomView {
    /// Returns the element symbol of the atom.
    ///
    /// Symbols are matched case-insensitively, so `"CL"`, `"cl"` and `"Cl"` all denote chlorine.
    fn element(&self) -> &str;

    /// Returns the formal charge of the atom, or `None` if the container carries no
    /// charge annotation for it.
    fn formal_charge(&self) -> Option<i32>;
}

/// A concrete representation of an atom with an element symbol and an optional formal charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// The element symbol, e.g. `"C"` or `"Cl"`.
    pub element: String,
    /// The formal charge, if annotated.
    pub formal_charge: Option<i32>,
}

impl Atom {
    /// Creates an atom of the given element without a formal-charge annotation.
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            formal_charge: None,
        }
    }

    /// Returns the atom with its formal charge set.
    pub fn with_formal_charge(mut self, formal_charge: i32) -> Self {
        self.formal_charge = Some(formal_charge);
        self
    }
}

impl AtomView for Atom {
    #[inline(always)]
    fn element(&self) -> &str {
        &self.element
    }

    #[inline(always)]
    fn formal_charge(&self) -> Option<i32> {
        self.formal_charge
    }
}

/// Fixed-width view of every atom's binding partners.
///
/// Each atom owns `width` slots, where `width` is the largest partner count in the
/// structure. Occupied slots hold the partner index and the bond type; unused slots
/// are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerTable {
    atom_count: usize,
    width: usize,
    slots: Vec<Option<(usize, BondType)>>,
}

impl PartnerTable {
    /// Builds the table for `atom_count` atoms from a bond enumeration.
    ///
    /// Bonds must reference atoms below `atom_count`.
    pub fn from_bonds(atom_count: usize, bonds: &[Bond]) -> Self {
        let mut counts = vec![0usize; atom_count];
        for bond in bonds {
            counts[bond.atom_i] += 1;
            counts[bond.atom_j] += 1;
        }
        let width = counts.iter().copied().max().unwrap_or(0);

        let mut slots = vec![None; atom_count * width];
        let mut filled = vec![0usize; atom_count];
        for bond in bonds {
            for (atom, partner) in [(bond.atom_i, bond.atom_j), (bond.atom_j, bond.atom_i)] {
                slots[atom * width + filled[atom]] = Some((partner, bond.bond_type));
                filled[atom] += 1;
            }
        }

        Self {
            atom_count,
            width,
            slots,
        }
    }

    /// The number of slots per atom.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of atoms covered by the table.
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// Returns the raw slots of an atom, including unused ones.
    pub fn slots(&self, atom: usize) -> &[Option<(usize, BondType)>] {
        let start = atom * self.width;
        self.slots.get(start..start + self.width).unwrap_or(&[])
    }

    /// Iterates over the occupied slots of an atom.
    pub fn partners(&self, atom: usize) -> impl Iterator<Item = (usize, BondType)> + '_ {
        self.slots(atom).iter().flatten().copied()
    }

    /// The number of atoms bonded to `atom`.
    pub fn partner_count(&self, atom: usize) -> usize {
        self.partners(atom).count()
    }
}

/// A trait for viewing the bond topology of a structure.
pub trait BondView {
    /// The number of atoms the bonds refer to.
    fn atom_count(&self) -> usize;

    /// Every bond of the structure, each unordered pair listed once.
    ///
    /// The solver visits bonds in exactly this order.
    fn bonds(&self) -> &[Bond];

    /// The per-atom partner view.
    fn all_bonds(&self) -> PartnerTable {
        PartnerTable::from_bonds(self.atom_count(), self.bonds())
    }
}

/// An owned, validated list of bonds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BondList {
    atom_count: usize,
    bonds: Vec<Bond>,
}

impl BondList {
    /// Creates a bond list for a structure of `atom_count` atoms.
    ///
    /// Each bond is stored with the lower atom index first. When the same pair appears more
    /// than once, only the first occurrence is kept.
    ///
    /// # Errors
    ///
    /// Returns `PeoeError::InvalidBond` if a bond references an atom at or beyond
    /// `atom_count`, or bonds an atom to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use peoe::{Bond, BondList, BondType, BondView};
    ///
    /// let bonds = BondList::new(
    ///     3,
    ///     vec![
    ///         Bond::new(1, 0, BondType::Single),
    ///         Bond::new(0, 1, BondType::Double),
    ///         Bond::new(1, 2, BondType::Single),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(bonds.bonds().len(), 2);
    /// assert_eq!(bonds.bonds()[0], Bond::new(0, 1, BondType::Single));
    /// ```
    pub fn new(atom_count: usize, bonds: Vec<Bond>) -> Result<Self, PeoeError> {
        let mut seen = HashSet::with_capacity(bonds.len());
        let mut normalized = Vec::with_capacity(bonds.len());

        for bond in bonds {
            validate_bond(&bond, atom_count)?;
            let (atom_i, atom_j) = if bond.atom_i < bond.atom_j {
                (bond.atom_i, bond.atom_j)
            } else {
                (bond.atom_j, bond.atom_i)
            };
            if seen.insert((atom_i, atom_j)) {
                normalized.push(Bond::new(atom_i, atom_j, bond.bond_type));
            }
        }

        Ok(Self {
            atom_count,
            bonds: normalized,
        })
    }

    /// Creates a bond list without any bonds.
    pub fn empty(atom_count: usize) -> Self {
        Self {
            atom_count,
            bonds: Vec::new(),
        }
    }
}

impl BondView for BondList {
    fn atom_count(&self) -> usize {
        self.atom_count
    }

    fn bonds(&self) -> &[Bond] {
        &self.bonds
    }
}

/// Checks that a bond connects two distinct atoms of a structure with `atom_count` atoms.
pub(crate) fn validate_bond(bond: &Bond, atom_count: usize) -> Result<(), PeoeError> {
    if bond.atom_i >= atom_count || bond.atom_j >= atom_count || bond.atom_i == bond.atom_j {
        return Err(PeoeError::InvalidBond {
            atom_i: bond.atom_i,
            atom_j: bond.atom_j,
            atom_count,
        });
    }
    Ok(())
}

/// A trait for viewing a whole structure: its atoms and, if present, its bonds.
pub trait StructureView {
    type Atom: AtomView;
    type Bonds: BondView;

    fn atoms(&self) -> &[Self::Atom];

    /// The bond topology, or `None` if the structure carries no bond data.
    fn bonds(&self) -> Option<&Self::Bonds>;
}

/// A concrete structure made of owned atoms and an optional bond list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Structure {
    pub atoms: Vec<Atom>,
    pub bonds: Option<BondList>,
}

impl Structure {
    /// Creates a structure from atoms and `(atom_i, atom_j, bond_type)` triples.
    ///
    /// # Errors
    ///
    /// Returns `PeoeError::InvalidBond` if any bond is out of range or a self-bond.
    ///
    /// # Examples
    ///
    /// ```
    /// use peoe::{Atom, BondType, Structure};
    ///
    /// let hydrogen_fluoride = Structure::new(
    ///     vec![Atom::new("H"), Atom::new("F")],
    ///     &[(0, 1, BondType::Single)],
    /// )
    /// .unwrap();
    ///
    /// assert!(hydrogen_fluoride.bonds.is_some());
    /// ```
    pub fn new(atoms: Vec<Atom>, bonds: &[(usize, usize, BondType)]) -> Result<Self, PeoeError> {
        let bond_list = BondList::new(
            atoms.len(),
            bonds
                .iter()
                .map(|&(atom_i, atom_j, bond_type)| Bond::new(atom_i, atom_j, bond_type))
                .collect(),
        )?;
        Ok(Self {
            atoms,
            bonds: Some(bond_list),
        })
    }

    /// Creates a structure with no bond data attached.
    pub fn without_bonds(atoms: Vec<Atom>) -> Self {
        Self { atoms, bonds: None }
    }
}

impl StructureView for Structure {
    type Atom = Atom;
    type Bonds = BondList;

    fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    fn bonds(&self) -> Option<&BondList> {
        self.bonds.as_ref()
    }
}

/// The result of a PEOE calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// The partial charge of every atom, in input order.
    ///
    /// `None` marks an undefined charge: the atom is bonded but no electronegativity
    /// parameters exist for it.
    pub charges: Vec<Option<f64>>,
    /// The number of equalization rounds performed.
    pub iterations: u32,
    /// Advisory notices raised while assigning parameters.
    pub diagnostics: Vec<Diagnostic>,
}

impl CalculationResult {
    /// Returns the charges with undefined values replaced by `f64::NAN`.
    pub fn charges_or_nan(&self) -> Vec<f64> {
        self.charges
            .iter()
            .map(|charge| charge.unwrap_or(f64::NAN))
            .collect()
    }

    /// The sum of all defined charges.
    pub fn total_charge(&self) -> f64 {
        self.charges.iter().flatten().sum()
    }

    /// Returns `true` if at least one atom has an undefined charge.
    pub fn has_undefined(&self) -> bool {
        self.charges.iter().any(Option::is_none)
    }
}
