//! This module provides numerical constants and the electronegativity model of the peoe library.
//!
//! It contains the constants that fix the PEOE procedure (proton electronegativity, default
//! round count, damping decay) and the functions that evaluate an atom's orbital
//! electronegativity from its coefficients and current partial charge.

/// Constants used throughout the library.
///
/// This module defines the fixed values of the Gasteiger-Marsili procedure, so that the
/// solver and tests agree on a single source for them.
pub mod constants;

/// Evaluation of orbital electronegativity curves.
///
/// This module turns `(a, b, c)` coefficients into per-round electronegativity estimates and
/// into the positive-electronegativity divisor that scales charge transfer.
pub mod electronegativity;
