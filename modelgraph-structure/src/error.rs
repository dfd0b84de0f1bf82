//! IR construction error types

use thiserror::Error;

/// Failures that abort a structure-model build.
///
/// The builder never hands a partially built model to a caller; any of these
/// fails the whole generation run.
#[derive(Error, Debug)]
pub enum StructureError {
    /// A root or referenced IRI resolves to no resource
    #[error("Unresolved reference: {iri}")]
    Unresolved { iri: String },

    /// A referenced resource is not of the kind the position requires
    #[error("Unexpected resource: {iri} is not a {expected}")]
    Unexpected { iri: String, expected: &'static str },

    /// A class reaches itself through its own parent chain
    #[error("Cyclic inheritance through {iri}")]
    CyclicExtends { iri: String },

    /// A class reaches itself through its own include chain
    #[error("Cyclic include through {iri}")]
    CyclicInclude { iri: String },

    /// The reader failed while fetching the graph
    #[error(transparent)]
    Read(#[from] modelgraph_core::Error),
}

impl StructureError {
    pub fn unresolved(iri: impl Into<String>) -> Self {
        StructureError::Unresolved { iri: iri.into() }
    }

    pub fn unexpected(iri: impl Into<String>, expected: &'static str) -> Self {
        StructureError::Unexpected {
            iri: iri.into(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, StructureError>;
