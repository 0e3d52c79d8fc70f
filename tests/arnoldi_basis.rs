//! Invariant tests for the Arnoldi process: basis orthonormality, the Arnoldi
//! relation A·V_k = V_{k+1}·H̄_k, and happy breakdown on an invariant subspace.

use faer::Mat;
use gmres_core::core::traits::{InnerProduct, MatVec};
use gmres_core::solver::arnoldi::{ArnoldiOutcome, arnoldi_step};
use gmres_core::solver::{GmresSolver, LinearSolver};
use rand::Rng;

/// Run `steps` Arnoldi steps from the normalized seed `r0`.
///
/// Returns the basis columns and the Hessenberg matrix in row-major form
/// ((steps+1) rows × steps columns), stopping early on breakdown.
fn run_arnoldi(
    a: &Mat<f64>,
    r0: &[f64],
    steps: usize,
) -> (Vec<Vec<f64>>, Vec<Vec<f64>>, usize) {
    let ip = ();
    let beta = ip.norm(&r0.to_vec());
    let mut v_basis = vec![r0.iter().map(|ri| ri / beta).collect::<Vec<f64>>()];
    let mut h = vec![vec![0.0; steps]; steps + 1];
    let mut completed = 0;
    for k in 0..steps {
        match arnoldi_step(a, None, &v_basis, k, 1e-12).unwrap() {
            ArnoldiOutcome::Extended { column, v_next } => {
                for (i, hik) in column.into_iter().enumerate() {
                    h[i][k] = hik;
                }
                v_basis.push(v_next);
                completed = k + 1;
            }
            ArnoldiOutcome::Breakdown { column } => {
                for (i, hik) in column.into_iter().enumerate() {
                    h[i][k] = hik;
                }
                completed = k + 1;
                break;
            }
        }
    }
    (v_basis, h, completed)
}

fn random_system(n: usize) -> (Mat<f64>, Vec<f64>) {
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    let a = Mat::from_fn(n, n, |i, j| data[j * n + i]);
    let r0: Vec<f64> = (0..n).map(|_| rng.r#gen::<f64>() + 0.1).collect();
    (a, r0)
}

/// Basis columns stay mutually orthonormal: ‖VᵀV − I‖_F below 1e-10 after every step.
#[test]
fn basis_stays_orthonormal() {
    let n = 8;
    let (a, r0) = random_system(n);
    for steps in 1..n {
        let (v_basis, _, _) = run_arnoldi(&a, &r0, steps);
        let cols = v_basis.len();
        let mut frob = 0.0;
        let ip = ();
        for i in 0..cols {
            for j in 0..cols {
                let vtv = ip.dot(&v_basis[i], &v_basis[j]);
                let expected = if i == j { 1.0 } else { 0.0 };
                frob += (vtv - expected).powi(2);
            }
        }
        assert!(
            frob.sqrt() < 1e-10,
            "orthonormality defect {} after {} steps",
            frob.sqrt(),
            steps
        );
    }
}

/// The Arnoldi relation A·V_k = V_{k+1}·H̄_k holds to 1e-10 for every k reached.
#[test]
fn arnoldi_relation_holds() {
    let n = 8;
    let steps = 6;
    let (a, r0) = random_system(n);
    let (v_basis, h, completed) = run_arnoldi(&a, &r0, steps);
    for k in 0..completed {
        // Column k: A v_k vs sum_i H[i][k] v_i
        let mut av = vec![0.0; n];
        a.matvec(&v_basis[k], &mut av);
        let mut recon = vec![0.0; n];
        for i in 0..=(k + 1).min(v_basis.len() - 1) {
            for (rj, vj) in recon.iter_mut().zip(v_basis[i].iter()) {
                *rj += h[i][k] * vj;
            }
        }
        let defect: f64 = av
            .iter()
            .zip(recon.iter())
            .map(|(x, y)| (x - y).powi(2))
            .sum::<f64>()
            .sqrt();
        assert!(defect < 1e-10, "Arnoldi defect {} at column {}", defect, k);
    }
}

/// A residual that is already an eigenvector breaks down on the first step and
/// yields the exact solution x0 + (β/λ)·r0 with a recorded residual of zero.
#[test]
fn eigenvector_residual_breaks_down_to_exact_solution() {
    let a = Mat::from_fn(3, 3, |i, j| if i == j { (i + 2) as f64 } else { 0.0 });
    let b = vec![1.0, 0.0, 0.0]; // with x0 = 0, r0 = e1, an eigenvector (λ = 2)
    let mut x = vec![0.0; 3];
    let mut solver = GmresSolver::new(1e-10, 10);
    let stats = solver.solve(&a, None, &b, &mut x).unwrap();

    assert!(stats.converged);
    assert_eq!(stats.iterations, 1);
    assert_eq!(stats.final_residual, 0.0);
    assert_eq!(solver.residual_history, vec![1.0, 0.0]);
    // Exact solution lies in the one-dimensional Krylov subspace: x = r0/λ.
    assert!((x[0] - 0.5).abs() < 1e-14);
    assert_eq!(&x[1..], &[0.0, 0.0][..]);
}
