// Identity preconditioner: M⁻¹ = I

use crate::error::GmresError;
use crate::preconditioner::Preconditioner;

/// Identity preconditioner: leaves the residual untouched.
///
/// Solving with `Identity` is exactly unpreconditioned GMRES.
pub struct Identity;

impl Identity {
    pub fn new() -> Self {
        Identity
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, V> Preconditioner<M, V> for Identity
where
    V: Clone,
{
    fn apply(&self, r: &V, z: &mut V) -> Result<(), GmresError> {
        *z = r.clone();
        Ok(())
    }
}
