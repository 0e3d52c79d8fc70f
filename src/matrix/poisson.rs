//! Discretized 2D Poisson problem on an N×N grid with Dirichlet boundary conditions.
//!
//! Produces the classic 5-point-stencil system used to exercise the GMRES driver:
//! interior nodes get center coefficient `4(N−1)²` and neighbor coefficients
//! `−(N−1)²` with forcing term 1, while boundary nodes are identity rows with
//! forcing term 0. The matrix is returned dense; for the grid sizes used in tests
//! and benches that is plenty, and it drops straight into the faer wrappers.

use faer::Mat;

/// Build the 5-point-stencil Poisson system for an `n_grid` × `n_grid` mesh.
///
/// Returns `(A, b)` with `A` of dimension `n_grid²` × `n_grid²`. Node `(gx, gy)`
/// maps to row `gy * n_grid + gx`.
///
/// # Panics
/// Panics if `n_grid < 2` (a Dirichlet grid needs at least its boundary).
pub fn poisson2d(n_grid: usize) -> (Mat<f64>, Vec<f64>) {
    assert!(n_grid >= 2, "Poisson grid must be at least 2x2");
    let n = n_grid * n_grid;
    let h_inv2 = ((n_grid - 1) * (n_grid - 1)) as f64;

    let mut a = Mat::<f64>::zeros(n, n);
    let mut b = vec![0.0; n];
    for gy in 0..n_grid {
        for gx in 0..n_grid {
            let row = gy * n_grid + gx;
            let on_boundary = gx == 0 || gy == 0 || gx == n_grid - 1 || gy == n_grid - 1;
            if on_boundary {
                a[(row, row)] = 1.0;
            } else {
                a[(row, row)] = 4.0 * h_inv2;
                a[(row, row - 1)] = -h_inv2;
                a[(row, row + 1)] = -h_inv2;
                a[(row, row - n_grid)] = -h_inv2;
                a[(row, row + n_grid)] = -h_inv2;
                b[row] = 1.0;
            }
        }
    }
    (a, b)
}
