//! # modelgraph-federation
//!
//! One logical resource graph over many sub-stores.
//!
//! Each sub-store owns exactly one schema and every resource created under
//! it. The [`StoreRegistry`] tracks both mappings; the [`FederatedStore`]
//! facade routes reads by resource ownership and operations by schema, and
//! records ownership of every IRI an operation creates. Callers against the
//! facade never name a concrete store.

pub mod error;
pub mod federated;
pub mod registry;

pub use error::{FederationError, Result};
pub use federated::FederatedStore;
pub use registry::StoreRegistry;
