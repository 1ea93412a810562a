//! This module defines the fixed constants of the Gasteiger-Marsili PEOE procedure.
//!
//! Values are given in electron volts where they carry a unit.

/// Electronegativity of the hydrogen cation, in electron volts.
///
/// Used as the positive-electronegativity divisor of hydrogen in place of the sum of its
/// coefficients, since a hydrogen that donates charge approaches the bare proton.
pub const HYDROGEN_CATION_ELECTRONEGATIVITY: f64 = 20.02;

/// The number of equalization rounds Gasteiger and Marsili found sufficient.
pub const DEFAULT_ITERATIONS: u32 = 6;

/// Factor applied to the damping at the start of every round.
///
/// The damping in round `k` (counted from 1) is `DAMPING_DECAY^k`.
pub const DAMPING_DECAY: f64 = 0.5;

/// Atomic number of hydrogen.
pub const HYDROGEN: u8 = 1;
