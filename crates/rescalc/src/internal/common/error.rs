use thiserror::Error;

use crate::internal::resources::DimensionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RcError {
    #[error("Resource vectors have different dimensions: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Subtraction underflows in dimension {dimension}")]
    Underflow { dimension: DimensionId },
    #[error("Invalid allocation limits: {0}")]
    InvalidLimits(String),
    #[error("Unknown resource calculator '{0}'")]
    UnknownCalculator(String),
    #[error("Unknown resource dimension '{0}'")]
    UnknownDimension(String),
    #[error("Error: {0}")]
    GenericError(String),
}

impl From<String> for RcError {
    fn from(e: String) -> Self {
        Self::GenericError(e)
    }
}

impl From<&str> for RcError {
    fn from(e: &str) -> Self {
        Self::GenericError(e.to_string())
    }
}
