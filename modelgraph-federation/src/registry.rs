//! Sub-store and ownership registry

use modelgraph_store::ResourceWriter;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Tracks which sub-store serves each schema and which schema owns each
/// resource IRI.
///
/// Both mappings are write-once: IRIs are never reused and a schema never
/// migrates between stores, so an attempt to rebind is dropped with a
/// warning and the first binding stays authoritative.
#[derive(Default)]
pub struct StoreRegistry {
    stores: RwLock<HashMap<String, Arc<dyn ResourceWriter>>>,
    owners: RwLock<HashMap<String, String>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a sub-store to the schema it serves.
    ///
    /// Returns `false` if the schema was already bound; the existing binding
    /// is kept.
    pub fn register_store(
        &self,
        schema_iri: impl Into<String>,
        store: Arc<dyn ResourceWriter>,
    ) -> bool {
        let schema_iri = schema_iri.into();
        let mut stores = self.stores.write();
        if stores.contains_key(&schema_iri) {
            tracing::warn!(schema = %schema_iri, "store already registered, keeping existing binding");
            return false;
        }
        tracing::debug!(schema = %schema_iri, "registered store");
        stores.insert(schema_iri, store);
        true
    }

    /// Record that a resource IRI is owned by a schema's sub-store.
    ///
    /// Returns `false` if the IRI already has an owner; the existing owner is
    /// kept.
    pub fn register_resource(
        &self,
        resource_iri: impl Into<String>,
        schema_iri: impl Into<String>,
    ) -> bool {
        let resource_iri = resource_iri.into();
        let mut owners = self.owners.write();
        if owners.contains_key(&resource_iri) {
            tracing::warn!(resource = %resource_iri, "resource already has an owner, keeping existing binding");
            return false;
        }
        owners.insert(resource_iri, schema_iri.into());
        true
    }

    /// The sub-store serving a schema
    pub fn store_for_schema(&self, schema_iri: &str) -> Option<Arc<dyn ResourceWriter>> {
        self.stores.read().get(schema_iri).cloned()
    }

    /// The schema whose sub-store owns a resource IRI
    pub fn schema_for_resource(&self, resource_iri: &str) -> Option<String> {
        self.owners.read().get(resource_iri).cloned()
    }

    /// All registered schema IRIs, in deterministic order
    pub fn schemas(&self) -> Vec<String> {
        let mut schemas: Vec<String> = self.stores.read().keys().cloned().collect();
        schemas.sort();
        schemas
    }
}
