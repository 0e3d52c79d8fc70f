//! Least-squares residual minimization over the Hessenberg matrix.
//!
//! After k+1 Arnoldi steps the projected problem is `min ‖β·e₁ − H̄·y‖` with H̄
//! of shape (k+2)×(k+1). A QR factorization of H̄ reduces it to a triangular
//! solve: the rotations that annihilate the subdiagonal, applied to `β·e₁`,
//! produce `β·Qᵀe₁`, whose last entry is (up to sign) the minimal residual and
//! whose leading entries form the right-hand side for back substitution.
//!
//! The factorization is recomputed from scratch on every call. An optimized
//! variant would keep the accumulated Givens rotations between iterations and
//! rotate only the newest column — functionally identical, strictly faster, and
//! intentionally not done here: this module is the reference formulation.
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems, 2nd Edition. SIAM. §6.5.3

use crate::error::GmresError;
use crate::solver::triangular::solve_upper_triangular;
use num_traits::Float;

/// Givens rotation (c, s) annihilating `v2` against `v1`.
fn givens_rotation<T: Float>(v1: T, v2: T) -> (T, T) {
    let t = (v1 * v1 + v2 * v2).sqrt();
    if t == T::zero() {
        (T::one(), T::zero())
    } else {
        (v1 / t, v2 / t)
    }
}

/// Minimize `‖β·e₁ − H̄·y‖` for the Hessenberg matrix held in `h`.
///
/// `h` is row-major with at least `cols + 1` rows of at least `cols` entries;
/// only the leading (cols+1)×cols block is read, and `h` itself is left
/// untouched. Returns the coefficient vector `y` (length `cols`) and the
/// minimal residual norm.
///
/// # Errors
/// * [`GmresError::Dimension`] if `h` does not cover the (cols+1)×cols block.
/// * [`GmresError::ZeroPivot`] if the triangular factor is singular within
///   `pivot_tol` (a rank-deficient Hessenberg column).
pub fn minimize_residual<T: Float>(
    h: &[Vec<T>],
    cols: usize,
    beta: T,
    pivot_tol: T,
) -> Result<(Vec<T>, T), GmresError> {
    let rows = cols + 1;
    if h.len() < rows {
        return Err(GmresError::Dimension {
            context: "Hessenberg matrix",
            expected: rows,
            found: h.len(),
        });
    }
    if let Some(short) = h.iter().take(rows).find(|row| row.len() < cols) {
        return Err(GmresError::Dimension {
            context: "Hessenberg row",
            expected: cols,
            found: short.len(),
        });
    }

    // Working copies: the rotated factor and g = β·Qᵀe₁.
    let mut r: Vec<Vec<T>> = h.iter().take(rows).map(|row| row[..cols].to_vec()).collect();
    let mut g = vec![T::zero(); rows];
    g[0] = beta;

    for j in 0..cols {
        let (c, s) = givens_rotation(r[j][j], r[j + 1][j]);
        for l in j..cols {
            let temp = c * r[j][l] + s * r[j + 1][l];
            r[j + 1][l] = -s * r[j][l] + c * r[j + 1][l];
            r[j][l] = temp;
        }
        let temp = c * g[j] + s * g[j + 1];
        g[j + 1] = -s * g[j] + c * g[j + 1];
        g[j] = temp;
    }

    let residual = g[cols].abs();
    let y = solve_upper_triangular(&r, &g[..cols], pivot_tol)?;
    Ok((y, residual))
}
