//! Core linear-algebra traits for gmres-core.

/// Matrix–vector product: y ← A x.
///
/// Any linear operator qualifies; no structural assumptions are made beyond
/// linearity. The solver only ever calls `matvec`, so matrix-free operators
/// work the same as stored matrices.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Inner products & norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd + From<f64>;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}

