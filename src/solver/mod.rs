//! Solver interfaces and the GMRES component stack.

use crate::preconditioner::Preconditioner;
use crate::utils::convergence::SolveStats;

/// Common interface for an iterative solver.
pub trait LinearSolver<M, V> {
    type Error;
    type Scalar: Copy + PartialOrd;
    /// Solve A·x = b, writing the result into `x`.
    /// Returns iteration stats (including convergence info).
    fn solve(
        &mut self,
        a: &M,
        pc: Option<&dyn Preconditioner<M, V>>,
        b: &V,
        x: &mut V,
    ) -> Result<SolveStats<Self::Scalar>, Self::Error>;
}

pub mod triangular;
pub use triangular::solve_upper_triangular;

pub mod arnoldi;
pub use arnoldi::{ArnoldiOutcome, arnoldi_step};

pub mod leastsq;
pub use leastsq::minimize_residual;

pub mod gmres;
pub use gmres::GmresSolver;
