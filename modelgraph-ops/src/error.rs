//! Operation error types

use thiserror::Error;

/// Expected domain failures reported by executors as values.
///
/// These never abort the store: a failed operation leaves state untouched and
/// the caller decides whether to retry, report, or abort a larger composite.
#[derive(Error, Debug)]
pub enum OperationError {
    /// A referenced IRI has no resource at all
    #[error("Not found: {iri}")]
    NotFound { iri: String },

    /// A referenced IRI resolved to a resource of the wrong kind
    #[error("Invalid type: {iri} is not a {expected}")]
    InvalidType { iri: String, expected: &'static str },

    /// A domain-specific constraint was violated
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The reader failed while resolving a referenced resource
    #[error("Read error: {0}")]
    Read(#[from] modelgraph_core::Error),
}

impl OperationError {
    /// Create a not-found error
    pub fn not_found(iri: impl Into<String>) -> Self {
        OperationError::NotFound { iri: iri.into() }
    }

    /// Create an invalid-type error
    pub fn invalid_type(iri: impl Into<String>, expected: &'static str) -> Self {
        OperationError::InvalidType {
            iri: iri.into(),
            expected,
        }
    }

    /// Create a constraint-violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        OperationError::Constraint(msg.into())
    }
}

/// Wire-boundary parse failures for operations.
#[derive(Error, Debug)]
pub enum OperationParseError {
    /// No recognized operation tag in the `types` array
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// The value is not a well-formed operation envelope
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Field-level JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
