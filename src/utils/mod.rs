//! Shared utilities for the solver core.

pub mod convergence;

pub use convergence::{Convergence, SolveStats};
