mod common;

use common::{
    Double, Single, TestCase, Triple, fluoromethane, methanol, molecule, run_group_test,
};

#[test]
fn fluoromethane_matches_published_iterations() {
    let cases = vec![
        TestCase::new(
            "CH3F (1 round)",
            fluoromethane(),
            &[0.115, -0.175, 0.020, 0.020, 0.020],
        )
        .with_iterations(1),
        TestCase::new(
            "CH3F (6 rounds)",
            fluoromethane(),
            &[0.079, -0.253, 0.058, 0.058, 0.058],
        ),
    ];

    run_group_test("Fluoromethane", cases, 5e-4);
}

#[test]
fn small_organics_follow_bond_type_parameters() {
    let cases = vec![
        TestCase::new(
            "CH3CN",
            molecule(
                &["C", "C", "N", "H", "H", "H"],
                &[
                    (0, 1, Single),
                    (1, 2, Triple),
                    (0, 3, Single),
                    (0, 4, Single),
                    (0, 5, Single),
                ],
            ),
            &[0.023188, 0.059139, -0.196857, 0.038177, 0.038177, 0.038177],
        ),
        TestCase::new(
            "H2CO",
            molecule(
                &["C", "O", "H", "H"],
                &[(0, 1, Double), (0, 2, Single), (0, 3, Single)],
            ),
            &[0.106319, -0.302606, 0.098143, 0.098143],
        ),
        TestCase::new(
            "CH3OH",
            methanol(Single),
            &[0.032972, -0.398234, 0.052082, 0.052082, 0.052082, 0.209016],
        ),
    ];

    run_group_test("Small Organics", cases, 1e-6);
}
