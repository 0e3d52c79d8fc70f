//! Matrix module: test-problem generators.

pub mod poisson;
pub use poisson::poisson2d;
