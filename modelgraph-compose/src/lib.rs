//! # modelgraph-compose
//!
//! Composite operations.
//!
//! A composite sequences primitive operations through the
//! [`FederatedStore`](modelgraph_federation::FederatedStore) facade, so a
//! single user intent ("create a class and make it the root")
//! becomes several log entries across one or more sub-stores. Each primitive
//! is atomic on its own; there is no cross-store transaction. When a
//! primitive in the middle of a sequence fails, the composite stops and
//! reports how far it got, leaving the earlier primitives applied.
//!
//! Composites also own input normalization: empty strings and empty language
//! maps from outer layers become absent values here, before any primitive
//! runs. Primitive executors store what they are given verbatim.

pub mod create_detailed_attribute;
pub mod create_root_class;
pub mod error;
pub mod initialize_schema;
pub mod normalize;
pub mod operation;
pub mod reference_external_class;
pub mod wrap_root_with_or;

pub use create_detailed_attribute::CreateDetailedAttribute;
pub use create_root_class::CreateRootClass;
pub use error::{ComplexError, Result};
pub use initialize_schema::InitializeSchema;
pub use operation::ComplexOperation;
pub use reference_external_class::ReferenceExternalClass;
pub use wrap_root_with_or::WrapRootWithOr;
