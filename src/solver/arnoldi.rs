//! Single Arnoldi step: extend the Krylov basis by one column.
//!
//! Each step applies the (optionally left-preconditioned) operator to the newest
//! basis vector and orthogonalizes the result against every existing column with
//! a single Gram-Schmidt sweep in increasing column order — the sweep order is
//! fixed so runs are reproducible. There is no second refinement pass; callers
//! needing extra robustness on ill-conditioned bases would add re-orthogonalization
//! here.
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems, 2nd Edition. SIAM. §6.3

use crate::core::traits::{InnerProduct, MatVec};
use crate::error::GmresError;
use crate::preconditioner::Preconditioner;
use num_traits::Float;

/// Result of one Arnoldi step.
///
/// `column` is the new Hessenberg column of length k+2: entries `0..=k` are the
/// Gram-Schmidt projection coefficients and entry `k+1` is the norm of the
/// orthogonalized remainder.
pub enum ArnoldiOutcome<V, T> {
    /// The remainder had nonzero norm; `v_next` is the normalized new basis vector.
    Extended { column: Vec<T>, v_next: V },
    /// The remainder norm fell at or below the breakdown tolerance: the Krylov
    /// subspace is invariant under the operator and the current least-squares
    /// solution is exact. No new basis vector exists.
    Breakdown { column: Vec<T> },
}

/// Perform Arnoldi step `k`, orthogonalizing `M⁻¹·A·v_k` against columns `0..=k`.
///
/// `v_basis` holds the populated basis columns; its last element is `v_k`.
/// The caller stores the returned column into the Hessenberg matrix and, unless
/// breakdown was signaled, appends `v_next` to the basis.
pub fn arnoldi_step<M, V, T>(
    a: &M,
    pc: Option<&dyn Preconditioner<M, V>>,
    v_basis: &[V],
    k: usize,
    breakdown_tol: T,
) -> Result<ArnoldiOutcome<V, T>, GmresError>
where
    M: MatVec<V>,
    (): InnerProduct<V, Scalar = T>,
    V: AsRef<[T]> + AsMut<[T]> + From<Vec<T>> + Clone,
    T: Float,
{
    let n = v_basis[k].as_ref().len();
    let ip = ();

    // w = M⁻¹ (A v_k)
    let mut aw = V::from(vec![T::zero(); n]);
    a.matvec(&v_basis[k], &mut aw);
    let mut w = match pc {
        Some(pc) => {
            let mut z = V::from(vec![T::zero(); n]);
            pc.apply(&aw, &mut z)?;
            z
        }
        None => aw,
    };

    // Gram-Schmidt sweep, columns in increasing order.
    let mut column = vec![T::zero(); k + 2];
    for i in 0..=k {
        let hik = ip.dot(&w, &v_basis[i]);
        column[i] = hik;
        for (wj, vij) in w.as_mut().iter_mut().zip(v_basis[i].as_ref()) {
            *wj = *wj - hik * *vij;
        }
    }
    let rem_norm = ip.norm(&w);
    column[k + 1] = rem_norm;

    if rem_norm <= breakdown_tol {
        return Ok(ArnoldiOutcome::Breakdown { column });
    }
    let v_next = V::from(
        w.as_ref()
            .iter()
            .map(|&wi| wi / rem_norm)
            .collect::<Vec<_>>(),
    );
    Ok(ArnoldiOutcome::Extended { column, v_next })
}
