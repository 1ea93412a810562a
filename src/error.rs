use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `peoe` library.
///
/// Only caller errors are represented here. Atoms that cannot be parametrized are
/// not failures: they receive an undefined charge and are reported through
/// [`Diagnostic`](crate::Diagnostic) advisories instead.
#[derive(Error, Debug)]
pub enum PeoeError {
    /// The structure has no bond data attached to it.
    ///
    /// Hybridization states are inferred from bonds, so the calculation cannot
    /// start without them.
    #[error("No bond data associated with this structure")]
    MissingBonds,

    /// A bond references an atom index outside the structure, or connects an
    /// atom to itself.
    #[error("Invalid bond ({atom_i}, {atom_j}) for a structure of {atom_count} atoms")]
    InvalidBond {
        /// The first atom index of the offending bond.
        atom_i: usize,
        /// The second atom index of the offending bond.
        atom_j: usize,
        /// The number of atoms the bond was checked against.
        atom_count: usize,
    },

    /// The bond data describes a different number of atoms than the structure holds.
    #[error("Bond data covers {bond_atoms} atoms but the structure has {atoms}")]
    AtomCountMismatch {
        /// The number of atoms in the structure.
        atoms: usize,
        /// The number of atoms reported by the bond data.
        bond_atoms: usize,
    },

    /// A formal-charge override does not provide exactly one value per atom.
    #[error("Expected {expected} formal charges (one per atom), got {found}")]
    ChargeCountMismatch {
        /// The number of atoms in the structure.
        expected: usize,
        /// The number of formal charges supplied.
        found: usize,
    },

    /// An I/O error that occurred while attempting to read a parameter file.
    #[error("I/O error at path '{path}': {source}")]
    IoError {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// An error that occurred while parsing a parameter file, typically indicating
    /// invalid TOML, an unknown element or bond-type key, or a malformed partner count.
    #[error("Failed to deserialize TOML parameters: {0}")]
    DeserializationError(#[from] toml::de::Error),
}
