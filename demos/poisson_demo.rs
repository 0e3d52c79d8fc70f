use gmres_core::matrix::poisson::poisson2d;
use gmres_core::solver::{GmresSolver, LinearSolver};

fn main() {
    let n_grid = 10;
    let (a, b) = poisson2d(n_grid);
    let n = b.len();

    let mut x = vec![0.0; n];
    let mut solver = GmresSolver::new(1e-8, n).with_restart(20);
    let stats = solver.solve(&a, None, &b, &mut x).unwrap();

    println!(
        "Poisson {}x{} grid (n = {}): converged = {}, iterations = {}, final residual = {:.3e}",
        n_grid, n_grid, n, stats.converged, stats.iterations, stats.final_residual
    );
    for (k, res) in solver.residual_history.iter().enumerate() {
        println!("  iter {:3}: residual = {:.6e}", k, res);
    }
}
