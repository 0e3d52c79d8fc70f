//! Back substitution for upper-triangular systems.
//!
//! Solves R·z = y for square, non-singular upper-triangular R. The GMRES driver
//! feeds this the rotated Hessenberg matrix (last row dropped) to extract the
//! least-squares coefficients, but the routine is self-contained and usable on
//! any row-major upper-triangular system.
//!
//! Zero-pivot policy: a diagonal entry with magnitude below `pivot_tol` raises
//! [`GmresError::ZeroPivot`]. The alternative — dividing through and letting
//! ±∞/NaN propagate — is rejected here; callers get an error they can match on
//! instead of a poisoned solution vector.

use crate::error::GmresError;
use num_traits::Float;

/// Solve R·z = y by back substitution, processing rows from last to first.
///
/// `r` is row-major: `r[i][j]` is the entry in row `i`, column `j`, and entries
/// below the diagonal are ignored. Rows of `r` must have at least `y.len()`
/// columns.
///
/// # Errors
/// * [`GmresError::Dimension`] if `r` has fewer rows than `y` has entries.
/// * [`GmresError::ZeroPivot`] if a diagonal entry is smaller than `pivot_tol`
///   in magnitude.
pub fn solve_upper_triangular<T: Float>(
    r: &[Vec<T>],
    y: &[T],
    pivot_tol: T,
) -> Result<Vec<T>, GmresError> {
    let m = y.len();
    if r.len() < m {
        return Err(GmresError::Dimension {
            context: "triangular solve",
            expected: m,
            found: r.len(),
        });
    }
    for (i, row) in r.iter().take(m).enumerate() {
        if row.len() < m {
            return Err(GmresError::Dimension {
                context: "triangular solve row",
                expected: m,
                found: row.len(),
            });
        }
        if r[i][i].abs() <= pivot_tol {
            return Err(GmresError::ZeroPivot(i));
        }
    }

    let mut z = vec![T::zero(); m];
    for i in (0..m).rev() {
        let mut sum = y[i];
        for j in (i + 1)..m {
            sum = sum - r[i][j] * z[j];
        }
        z[i] = sum / r[i][i];
    }
    Ok(z)
}
