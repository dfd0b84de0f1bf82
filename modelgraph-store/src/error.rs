//! Store error types

use thiserror::Error;

/// Failures raised while applying operations to a store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The executor rejected the operation; store state is unchanged
    #[error(transparent)]
    Operation(#[from] modelgraph_ops::OperationError),

    /// A wire-form operation could not be parsed
    #[error(transparent)]
    Parse(#[from] modelgraph_ops::OperationParseError),

    /// Resource serialization failed while snapshotting or restoring
    #[error(transparent)]
    Resource(#[from] modelgraph_core::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
