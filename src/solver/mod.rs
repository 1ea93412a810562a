//! This module contains the solver components for computing Gasteiger-Marsili partial charges.
//!
//! It includes the `PeoeSolver` that chains hybridization resolution, parameter assignment and
//! charge equalization, and the `SolverOptions` used to configure it.

mod equalizer;
mod implementation;
mod options;

pub use equalizer::{AtomParameters, equalize};
pub use implementation::PeoeSolver;
pub use options::SolverOptions;
