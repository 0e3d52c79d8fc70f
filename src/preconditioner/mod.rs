//! Preconditioner interface for the GMRES driver.
//!
//! This crate only *applies* preconditioners; it never chooses or constructs one.
//! Any type exposing `apply(r) -> z` qualifies, so callers can wrap whatever
//! factorization or approximation they own. [`Identity`] is the trivial
//! implementation and the default when no preconditioner is supplied.

use crate::error::GmresError;

/// A left preconditioner M ≈ A⁻¹.
pub trait Preconditioner<M, V> {
    /// Apply M⁻¹ to r, writing z = M⁻¹ r
    fn apply(&self, r: &V, z: &mut V) -> Result<(), GmresError>;
}

pub mod identity;

pub use identity::Identity;
