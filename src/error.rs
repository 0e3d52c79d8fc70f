use thiserror::Error;

// Unified error type for gmres-core

#[derive(Error, Debug)]
pub enum GmresError {
    #[error("dimension mismatch in {context}: expected {expected}, got {found}")]
    Dimension {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("zero pivot at row {0}")]
    ZeroPivot(usize),
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}
