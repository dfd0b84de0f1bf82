//! Federation error types

use thiserror::Error;

/// Failures raised by the federated facade.
#[derive(Error, Debug)]
pub enum FederationError {
    /// No sub-store is registered for the addressed schema
    #[error("Unknown schema: no store registered for {iri}")]
    UnknownSchema { iri: String },

    /// The IRI does not belong to any registered sub-store
    #[error("Unregistered resource: {iri} belongs to no known store")]
    UnregisteredResource { iri: String },

    /// The owning sub-store is known but holds no resource for the IRI
    #[error("Resource not found: {iri} is owned by a registered store but absent")]
    ResourceNotFound { iri: String },

    /// The owning sub-store rejected the operation
    #[error(transparent)]
    Store(#[from] modelgraph_store::StoreError),

    /// A sub-store failed while reading
    #[error(transparent)]
    Read(#[from] modelgraph_core::Error),
}

impl FederationError {
    pub fn unknown_schema(iri: impl Into<String>) -> Self {
        FederationError::UnknownSchema { iri: iri.into() }
    }

    pub fn unregistered_resource(iri: impl Into<String>) -> Self {
        FederationError::UnregisteredResource { iri: iri.into() }
    }

    pub fn resource_not_found(iri: impl Into<String>) -> Self {
        FederationError::ResourceNotFound { iri: iri.into() }
    }
}

pub type Result<T> = std::result::Result<T, FederationError>;
