//! This module defines configuration options for the PEOE solver.
//!
//! It provides the `SolverOptions` struct, which controls how many damped equalization rounds
//! are run. Gasteiger and Marsili showed six rounds to be sufficient; more rounds change the
//! charges only marginally since the damping halves every round.

use crate::math::constants::DEFAULT_ITERATIONS;

/// Configuration parameters for the PEOE solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// The number of equalization rounds.
    ///
    /// There is no convergence check: exactly this many rounds are run. Zero rounds
    /// return the formal charges unchanged.
    pub iterations: u32,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}
