//! Wrappers for faer dense matrix types and vector operations.
//!
//! This module implements the core linear algebra traits for `faer::Mat`, `faer::MatRef`,
//! and `Vec<T>`, so that faer matrices and plain Rust vectors can be passed straight into
//! the generic GMRES driver. Inner products and norms optionally use Rayon for a
//! data-parallel reduction; this is the only parallelism in the crate, since every
//! Arnoldi step depends on the full basis built by all prior steps.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::{InnerProduct, MatVec};
use faer::{Mat, MatRef};
use num_traits::Float;

/// Implements matrix-vector multiplication for `faer::Mat`.
///
/// Computes `y = A * x` where `A` is a dense matrix, `x` and `y` are vectors.
impl<T: Float> MatVec<Vec<T>> for Mat<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            y[i] = T::zero();
            for j in 0..self.ncols() {
                y[i] = y[i] + self[(i, j)] * x[j];
            }
        }
    }
}

/// Implements matrix-vector multiplication for a matrix reference (`faer::MatRef`).
impl<'a, T: Float> MatVec<Vec<T>> for MatRef<'a, T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            y[i] = T::zero();
            for j in 0..self.ncols() {
                y[i] = y[i] + self[(i, j)] * x[j];
            }
        }
    }
}

/// Implements inner product and norm for vectors, with optional Rayon parallelism.
///
/// If the `rayon` feature is enabled, uses parallel iterators for the reduction.
impl<T: Float + From<f64> + Send + Sync> InnerProduct<Vec<T>> for () {
    type Scalar = T;
    /// Computes the dot product of two vectors: `x^T y`.
    fn dot(&self, x: &Vec<T>, y: &Vec<T>) -> T {
        assert_eq!(x.len(), y.len(), "Vectors must have the same length");
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            x.as_slice()
                .par_iter()
                .zip(y.as_slice().par_iter())
                .map(|(xi, yi)| *xi * *yi)
                .reduce(|| T::zero(), |acc, v| acc + v)
        }
        #[cfg(not(feature = "rayon"))]
        {
            x.iter()
                .zip(y.iter())
                .map(|(xi, yi)| *xi * *yi)
                .fold(T::zero(), |acc, v| acc + v)
        }
    }
    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &Vec<T>) -> T {
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            x.as_slice()
                .par_iter()
                .map(|xi| *xi * *xi)
                .reduce(|| T::zero(), |acc, v| acc + v)
                .sqrt()
        }
        #[cfg(not(feature = "rayon"))]
        {
            x.iter()
                .map(|xi| *xi * *xi)
                .fold(T::zero(), |acc, v| acc + v)
                .sqrt()
        }
    }
}
