//! Error types for modelgraph-core

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A wire resource carried no recognized type tag
    #[error("Unknown resource type: {0}")]
    UnknownType(String),

    /// A wire resource was structurally invalid (missing iri/types, wrong shape)
    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    /// Backing storage failed while reading or listing resources
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Create an unknown-type error
    pub fn unknown_type(tags: impl Into<String>) -> Self {
        Error::UnknownType(tags.into())
    }

    /// Create an invalid-resource error
    pub fn invalid_resource(msg: impl Into<String>) -> Self {
        Error::InvalidResource(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }
}
