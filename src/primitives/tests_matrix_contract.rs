// =========================================================================
// FALSIFY-MX: Matrix primitives contract
//
// Algebraic invariants every Matrix implementation must satisfy. Each test
// is named after the property it tries to falsify.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;
use crate::DEFAULT_TOLERANCE;

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att, a, "FALSIFIED MX-001: (A^T)^T != A");
}

/// FALSIFY-MX-002: Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn falsify_mx_002_transpose_swaps_shape() {
    let a = Matrix::zeros(3, 5);
    let at = a.transpose();

    assert_eq!(
        at.shape(),
        (5, 3),
        "FALSIFIED MX-002: transpose shape={:?}, expected (5,3)",
        at.shape()
    );
}

/// FALSIFY-MX-003: Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn falsify_mx_003_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED MX-003: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// FALSIFY-MX-004: Identity matmul: A * I = A
#[test]
fn falsify_mx_004_identity_matmul() {
    let a =
        Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).expect("valid");
    let result = a.matmul(&Matrix::identity(3)).expect("compatible dims");

    assert_eq!(result, a, "FALSIFIED MX-004: A*I != A");
}

/// FALSIFY-MX-005: Add then subtract is the identity: (A + B) - B = A
#[test]
fn falsify_mx_005_add_sub_roundtrip() {
    let a = Matrix::from_vec(2, 2, vec![1.0, -2.0, 3.5, 4.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![10.0, 0.25, -3.0, 8.0]).expect("valid");
    let back = a.add(&b).and_then(|s| s.sub(&b)).expect("same shapes");

    assert_eq!(back, a, "FALSIFIED MX-005: (A+B)-B != A");
}

/// FALSIFY-MX-006: (AB)^T = B^T A^T
#[test]
fn falsify_mx_006_transpose_of_product() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).expect("valid");
    let lhs = a.matmul(&b).expect("2x3 * 3x2").transpose();
    let rhs = b.transpose().matmul(&a.transpose()).expect("2x3 * 3x2");

    assert!(
        lhs.approx_eq(&rhs, DEFAULT_TOLERANCE),
        "FALSIFIED MX-006: (AB)^T={lhs} != B^T A^T={rhs}"
    );
}

/// FALSIFY-MX-007: Matmul mismatch names the actual operand shapes
#[test]
fn falsify_mx_007_matmul_mismatch_reports_shapes() {
    let a = Matrix::zeros(4, 2);
    let b = Matrix::zeros(3, 5);
    let err = a.matmul(&b).expect_err("2 != 3");

    let msg = err.to_string();
    assert!(
        msg.contains("4x2") && msg.contains("3x5"),
        "FALSIFIED MX-007: message '{msg}' lacks operand shapes"
    );
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn seeded(rows: usize, cols: usize, seed: u32) -> Matrix {
        let data: Vec<f64> = (0..rows * cols)
            .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
            .collect();
        Matrix::from_vec(rows, cols, data).expect("valid")
    }

    /// FALSIFY-MX-001-prop: Transpose involution for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_001_prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            let att = a.transpose().transpose();

            prop_assert_eq!(att, a, "FALSIFIED MX-001-prop: (A^T)^T != A");
        }
    }

    /// FALSIFY-MX-004-prop: Identity matmul for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_004_prop_identity_matmul(
            rows in 1..=6usize,
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, n, seed);
            let result = a.matmul(&Matrix::identity(n)).expect("compatible");

            prop_assert!(
                result.approx_eq(&a, DEFAULT_TOLERANCE),
                "FALSIFIED MX-004-prop: A*I != A for {}x{}",
                rows, n
            );
        }
    }

    /// FALSIFY-MX-008-prop: apply agrees with matmul against a column matrix
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_008_prop_apply_matches_matmul(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            let x = seeded(cols, 1, seed + 1);
            let via_apply = a.apply(&x.column(0)).expect("cols match");
            let via_matmul = a.matmul(&x).expect("cols match").column(0);

            prop_assert!(
                via_apply.approx_eq(&via_matmul, DEFAULT_TOLERANCE),
                "FALSIFIED MX-008-prop: apply={} != matmul={}",
                via_apply, via_matmul
            );
        }
    }
}
