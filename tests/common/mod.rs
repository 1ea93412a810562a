#![allow(dead_code, unused_imports)]

use peoe::{
    Atom, BondType, PeoeSolver, SolverOptions, Structure, get_default_parameters,
};

pub use peoe::BondType::{Any, Aromatic, Double, Single, Triple};

pub struct TestCase<'a> {
    pub name: &'a str,
    pub structure: Structure,
    pub formal_charges: Option<Vec<i32>>,
    pub iterations: u32,
    pub expected: Vec<Option<f64>>,
}

impl<'a> TestCase<'a> {
    pub fn new(name: &'a str, structure: Structure, expected: &[f64]) -> Self {
        Self {
            name,
            structure,
            formal_charges: None,
            iterations: 6,
            expected: expected.iter().copied().map(Some).collect(),
        }
    }

    pub fn with_formal_charges(mut self, formal_charges: &[i32]) -> Self {
        self.formal_charges = Some(formal_charges.to_vec());
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Builds a structure whose atoms all carry a zero formal-charge annotation.
pub fn molecule(symbols: &[&str], bonds: &[(usize, usize, BondType)]) -> Structure {
    let atoms = symbols
        .iter()
        .map(|&symbol| Atom::new(symbol).with_formal_charge(0))
        .collect();
    Structure::new(atoms, bonds).expect("test structure should be valid")
}

pub fn fluoromethane() -> Structure {
    molecule(
        &["C", "F", "H", "H", "H"],
        &[(0, 1, Single), (0, 2, Single), (0, 3, Single), (0, 4, Single)],
    )
}

pub fn methanol(bond_type: BondType) -> Structure {
    molecule(
        &["C", "O", "H", "H", "H", "H"],
        &[
            (0, 1, bond_type),
            (0, 2, bond_type),
            (0, 3, bond_type),
            (0, 4, bond_type),
            (1, 5, bond_type),
        ],
    )
}

/// Imidazole with N1 protonated: N1, C2, N3, C4, C5, then the hydrogens of N1, C2, C4, C5.
pub fn imidazole() -> Structure {
    molecule(
        &["N", "C", "N", "C", "C", "H", "H", "H", "H"],
        &[
            (0, 1, Aromatic),
            (1, 2, Aromatic),
            (2, 3, Aromatic),
            (3, 4, Aromatic),
            (0, 4, Aromatic),
            (0, 5, Single),
            (1, 6, Single),
            (3, 7, Single),
            (4, 8, Single),
        ],
    )
}

/// The pyrrole ring with an unprotonated nitrogen: N, four carbons, four hydrogens.
pub fn pyrrolide() -> Structure {
    molecule(
        &["N", "C", "C", "C", "C", "H", "H", "H", "H"],
        &[
            (0, 1, Aromatic),
            (1, 2, Aromatic),
            (2, 3, Aromatic),
            (3, 4, Aromatic),
            (0, 4, Aromatic),
            (1, 5, Single),
            (2, 6, Single),
            (3, 7, Single),
            (4, 8, Single),
        ],
    )
}

pub fn run_group_test(group_name: &str, cases: Vec<TestCase>, tolerance: f64) {
    let params = get_default_parameters();

    let mut group_max_error: f64 = 0.0;

    println!("\nRunning Group Test: {}", group_name);
    println!("{:-<80}", "");
    println!(
        "{:<20} | {:<10} | {:<10} | {:<10}",
        "Molecule", "Atom Idx", "Expected", "Calculated"
    );

    for case in cases {
        let solver = PeoeSolver::new(params).with_options(SolverOptions {
            iterations: case.iterations,
        });
        let result = match &case.formal_charges {
            Some(charges) => solver.solve_with_formal_charges(&case.structure, charges),
            None => solver.solve(&case.structure),
        }
        .expect("Solver failed");

        assert_eq!(
            result.charges.len(),
            case.expected.len(),
            "{}: charge count",
            case.name
        );

        for (index, (expected_q, calculated_q)) in
            case.expected.iter().zip(&result.charges).enumerate()
        {
            match (expected_q, calculated_q) {
                (Some(expected_q), Some(calculated_q)) => {
                    let error = (calculated_q - expected_q).abs();
                    println!(
                        "{:<20} | {:<10} | {:<10.4} | {:<10.4} (Err: {:.2e})",
                        case.name, index, expected_q, calculated_q, error
                    );
                    group_max_error = group_max_error.max(error);
                }
                (None, None) => {
                    println!(
                        "{:<20} | {:<10} | {:<10} | {:<10}",
                        case.name, index, "undefined", "undefined"
                    );
                }
                _ => panic!(
                    "{} atom {}: expected {:?}, calculated {:?}",
                    case.name, index, expected_q, calculated_q
                ),
            }
        }
    }

    println!("{:-<80}", "");
    println!(
        "Group Max Error for '{}': {:.2e} (Limit: {:.2e})",
        group_name, group_max_error, tolerance
    );
    println!("{:-<80}\n", "");

    assert!(
        group_max_error <= tolerance,
        "Group maximum error {:.2e} exceeds limit {:.2e}",
        group_max_error,
        tolerance
    );
}
