//! Generalized Minimal Residual (GMRES) solver with optional fixed restart (Saad §6.4)
//!
//! Solves large, possibly sparse, nonsymmetric linear systems Ax = b by minimizing
//! the residual over a growing Krylov subspace. The driver wires together the three
//! components: the Arnoldi step ([`crate::solver::arnoldi`]) grows the orthonormal
//! basis and the Hessenberg matrix, the least-squares minimizer
//! ([`crate::solver::leastsq`]) extracts the residual estimate and solve
//! coefficients from a fresh QR factorization each iteration, and back substitution
//! ([`crate::solver::triangular`]) turns the triangular factor into update
//! coefficients.
//!
//! # Features
//! - Left preconditioning through the [`crate::preconditioner::Preconditioner`]
//!   capability; identity when absent
//! - Happy breakdown detection: an invariant Krylov subspace terminates the solve
//!   with the exact solution and a recorded residual of zero
//! - Optional restart bounding basis storage at the cost of extra iterations
//! - Residual trace (one seed entry plus one entry per iteration) kept on the solver
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems, 2nd Edition. SIAM. §6.4
//! - https://en.wikipedia.org/wiki/Generalized_minimal_residual_method

use crate::core::traits::{InnerProduct, MatVec};
use crate::error::GmresError;
use crate::solver::LinearSolver;
use crate::solver::arnoldi::{ArnoldiOutcome, arnoldi_step};
use crate::solver::leastsq::minimize_residual;
use crate::utils::convergence::{Convergence, SolveStats};
use num_traits::Float;

/// GMRES solver with restart and left-preconditioning support.
///
/// # Type Parameters
/// * `T` - Scalar type (e.g., f32, f64)
pub struct GmresSolver<T> {
    /// Convergence criteria (relative tolerance and max iterations)
    pub conv: Convergence<T>,
    /// Restart period; `None` lets the basis grow to the iteration bound
    pub restart: Option<usize>,
    /// Happy breakdown tolerance on the Arnoldi remainder norm
    pub breakdown_tol: T,
    /// Residual-norm estimates: the seed β at entry 0, then one per iteration.
    /// Cleared at the start of each `solve` call.
    pub residual_history: Vec<T>,
}

impl<T: Float> GmresSolver<T> {
    /// Create a new GMRES solver with relative tolerance and iteration bound.
    ///
    /// The bound is clamped to the system dimension at solve time, since the
    /// Krylov subspace cannot exceed n dimensions.
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self {
            conv: Convergence { tol, max_iters },
            restart: None,
            breakdown_tol: T::from(1e-12).unwrap(),
            residual_history: Vec::new(),
        }
    }

    /// Set the restart period (number of Arnoldi vectors kept per cycle).
    pub fn with_restart(mut self, restart: usize) -> Self {
        self.restart = Some(restart);
        self
    }

    /// Set the happy breakdown tolerance.
    pub fn with_breakdown_tol(mut self, tol: T) -> Self {
        self.breakdown_tol = tol;
        self
    }

    fn validate(&self, n: usize, x_len: usize) -> Result<(), GmresError> {
        if x_len != n {
            return Err(GmresError::Dimension {
                context: "initial guess x0",
                expected: n,
                found: x_len,
            });
        }
        if !(self.conv.tol > T::zero()) {
            return Err(GmresError::InvalidParameter("tolerance must be positive"));
        }
        if self.conv.max_iters == 0 {
            return Err(GmresError::InvalidParameter(
                "iteration bound must be positive",
            ));
        }
        if self.restart == Some(0) {
            return Err(GmresError::InvalidParameter(
                "restart period must be positive",
            ));
        }
        Ok(())
    }
}

impl<M, V, T> LinearSolver<M, V> for GmresSolver<T>
where
    M: MatVec<V>,
    (): InnerProduct<V, Scalar = T>,
    V: AsRef<[T]> + AsMut<[T]> + From<Vec<T>> + Clone,
    T: Float + From<f64>,
{
    type Error = GmresError;
    type Scalar = T;

    /// Solve Ax = b with restarted, left-preconditioned GMRES.
    ///
    /// # Arguments
    /// * `a` - Linear operator implementing `MatVec`
    /// * `pc` - Optional left preconditioner; `None` means identity
    /// * `b` - Right-hand side vector
    /// * `x` - On input: initial guess x0; on output: solution estimate
    ///
    /// # Returns
    /// * `Ok(SolveStats)` when converged or the iteration bound is reached; a
    ///   non-converged return carries the best available iterate, and the
    ///   convergence decision stays with the caller
    /// * `Err(GmresError)` on dimension or parameter errors, before any iteration
    fn solve(
        &mut self,
        a: &M,
        pc: Option<&dyn crate::preconditioner::Preconditioner<M, V>>,
        b: &V,
        x: &mut V,
    ) -> Result<SolveStats<T>, GmresError> {
        let n = b.as_ref().len();
        self.validate(n, x.as_ref().len())?;
        // Clamp: the Krylov subspace degenerates past n dimensions.
        let k_max = self.conv.max_iters.min(n);
        let cycle_cap = self.restart.map_or(k_max, |r| r.min(k_max));
        self.residual_history.clear();

        let ip = ();
        let mut x0 = x.as_ref().to_vec();
        let mut total_iters = 0;
        let mut res0 = T::zero();

        loop {
            // INIT: r0 = M⁻¹ (b − A x0), β = ‖r0‖
            let mut tmp = V::from(vec![T::zero(); n]);
            a.matvec(&V::from(x0.clone()), &mut tmp);
            let r_vec: Vec<T> = tmp
                .as_ref()
                .iter()
                .zip(b.as_ref())
                .map(|(&ax, &bi)| bi - ax)
                .collect();
            let z0 = match pc {
                Some(pc) => {
                    let mut z = V::from(vec![T::zero(); n]);
                    pc.apply(&V::from(r_vec), &mut z)?;
                    z
                }
                None => V::from(r_vec),
            };
            let beta = ip.norm(&z0);
            if total_iters == 0 {
                res0 = beta;
                self.residual_history.push(beta);
            }
            if beta == T::zero() {
                // x0 already solves the (preconditioned) system exactly.
                *x = V::from(x0);
                return Ok(SolveStats {
                    iterations: total_iters,
                    final_residual: beta,
                    converged: true,
                });
            }

            // Basis and Hessenberg storage for this cycle, preallocated to the
            // cycle length so columns are written in place, never reallocated.
            let m = cycle_cap.min(k_max - total_iters);
            let mut v_basis: Vec<V> = vec![V::from(vec![T::zero(); n]); m + 1];
            v_basis[0] = V::from(
                z0.as_ref()
                    .iter()
                    .map(|&zi| zi / beta)
                    .collect::<Vec<_>>(),
            );
            let mut h = vec![vec![T::zero(); m]; m + 1];
            let mut xk = x0.clone();

            for j in 0..m {
                let outcome =
                    arnoldi_step(a, pc, &v_basis[..j + 1], j, self.breakdown_tol)?;
                let (column, breakdown) = match outcome {
                    ArnoldiOutcome::Extended { column, v_next } => {
                        v_basis[j + 1] = v_next;
                        (column, false)
                    }
                    ArnoldiOutcome::Breakdown { column } => (column, true),
                };
                for (i, &hij) in column.iter().enumerate() {
                    h[i][j] = hij;
                }

                // Residual estimate + coefficients from a fresh QR of H̄.
                let (y, p) = minimize_residual(&h, j + 1, beta, self.breakdown_tol)?;

                // x_k = x0 + V[:, :k+1] y
                xk = x0.clone();
                for (yj, vj) in y.iter().zip(v_basis.iter()) {
                    for (xi, vi) in xk.iter_mut().zip(vj.as_ref()) {
                        *xi = *xi + *yj * *vi;
                    }
                }
                total_iters += 1;

                // Breakdown means the subspace is invariant: the reduced-basis
                // solution is exact, so the trace records the exact value.
                let p_k = if breakdown { T::zero() } else { p };
                self.residual_history.push(p_k);

                let (_, mut stats) = self.conv.check(p_k, res0, total_iters);
                if breakdown {
                    stats.converged = true;
                }
                if stats.converged || total_iters >= k_max {
                    *x = V::from(xk);
                    return Ok(stats);
                }
            }

            // RESTARTING: latest iterate becomes the new initial guess; the
            // basis and Hessenberg matrix are rebuilt from scratch.
            x0 = xk;
        }
    }
}
