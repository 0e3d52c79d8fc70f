//! Core traits and trait implementations for matrices and vectors.

pub mod traits;
pub mod wrappers;

pub use traits::{InnerProduct, MatVec};
