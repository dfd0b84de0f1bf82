//! Composite error types

use modelgraph_federation::FederationError;
use thiserror::Error;

/// Failures raised by composite operations.
#[derive(Error, Debug)]
pub enum ComplexError {
    /// A validation failed before any primitive was applied
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The first primitive failed; no state changed
    #[error(transparent)]
    Failed(#[from] FederationError),

    /// A later primitive failed; the earlier ones remain applied
    #[error("failed after {completed} applied operations: {source}")]
    PartialFailure {
        completed: usize,
        source: FederationError,
    },
}

impl ComplexError {
    pub fn precondition(msg: impl Into<String>) -> Self {
        ComplexError::Precondition(msg.into())
    }

    /// Wrap a primitive failure with the number of primitives already applied
    pub fn after(completed: usize, source: FederationError) -> Self {
        if completed == 0 {
            ComplexError::Failed(source)
        } else {
            ComplexError::PartialFailure { completed, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, ComplexError>;
