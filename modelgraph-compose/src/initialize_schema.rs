//! Provision a sub-store with a fresh schema

use crate::error::{ComplexError, Result};
use crate::normalize::normalize_language_string;
use crate::operation::ComplexOperation;
use async_trait::async_trait;
use modelgraph_core::LanguageString;
use modelgraph_federation::{FederatedStore, FederationError};
use modelgraph_ops::operation::DataPsmCreateSchema;
use modelgraph_store::{MemoryResourceStore, ResourceWriter};
use std::sync::Arc;

/// Create a new in-memory sub-store, create its schema, and bind both into
/// the federation.
///
/// The schema IRI doubles as the sub-store's registry key, so everything the
/// store will ever create is addressable through the facade from this point
/// on.
#[derive(Debug, Clone, Default)]
pub struct InitializeSchema {
    /// Prefix under which the new sub-store mints IRIs
    pub iri_prefix: String,
    pub human_label: Option<LanguageString>,
    pub human_description: Option<LanguageString>,
}

#[async_trait]
impl ComplexOperation for InitializeSchema {
    /// IRI of the created schema
    type Output = String;

    async fn execute(&self, federation: &FederatedStore) -> Result<String> {
        let store = Arc::new(MemoryResourceStore::new(&self.iri_prefix));
        let op = DataPsmCreateSchema {
            human_label: normalize_language_string(self.human_label.clone()),
            human_description: normalize_language_string(self.human_description.clone()),
        };
        let delta = store
            .apply_operation(&op.into())
            .await
            .map_err(FederationError::from)
            .map_err(ComplexError::Failed)?;
        let schema_iri = delta.created_iris().remove(0);

        let registry = federation.registry();
        registry.register_store(&schema_iri, store as Arc<dyn ResourceWriter>);
        registry.register_resource(&schema_iri, &schema_iri);
        tracing::info!(schema = %schema_iri, "initialized schema store");
        Ok(schema_iri)
    }
}
