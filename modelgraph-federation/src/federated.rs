//! The federated facade

use crate::error::{FederationError, Result};
use crate::registry::StoreRegistry;
use async_trait::async_trait;
use modelgraph_core::{Resource, ResourceReader};
use modelgraph_ops::{Operation, OperationDelta};
use serde_json::Value;

/// One logical store over every registered sub-store.
///
/// Reads route by resource ownership, writes by the addressed schema. When
/// an operation succeeds, every IRI it created is recorded as owned by the
/// addressed schema, so later reads and writes find it without any IRI
/// naming convention.
#[derive(Default)]
pub struct FederatedStore {
    registry: StoreRegistry,
}

impl FederatedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying registry, for binding new sub-stores
    pub fn registry(&self) -> &StoreRegistry {
        &self.registry
    }

    /// Apply a typed operation to the sub-store serving `schema_iri`
    pub async fn apply_operation(
        &self,
        schema_iri: &str,
        op: &Operation,
    ) -> Result<OperationDelta> {
        let store = self
            .registry
            .store_for_schema(schema_iri)
            .ok_or_else(|| FederationError::unknown_schema(schema_iri))?;
        let delta = store.apply_operation(op).await?;
        for iri in delta.created_iris() {
            self.registry.register_resource(iri, schema_iri);
        }
        Ok(delta)
    }

    /// Parse a wire-form operation and apply it to the addressed sub-store
    pub async fn apply_json(&self, schema_iri: &str, op: Value) -> Result<OperationDelta> {
        let op = Operation::from_json(op).map_err(modelgraph_store::StoreError::from)?;
        self.apply_operation(schema_iri, &op).await
    }

    /// Read a resource, failing when its IRI belongs to no registered store.
    ///
    /// An owned IRI whose store reads back nothing (a deleted resource;
    /// ownership is never unregistered) is a distinct failure from an IRI
    /// with no owner at all.
    pub async fn require_resource(&self, iri: &str) -> Result<Resource> {
        let schema = self
            .registry
            .schema_for_resource(iri)
            .ok_or_else(|| FederationError::unregistered_resource(iri))?;
        let store = self
            .registry
            .store_for_schema(&schema)
            .ok_or_else(|| FederationError::unknown_schema(&schema))?;
        store
            .read_resource(iri)
            .await?
            .ok_or_else(|| FederationError::resource_not_found(iri))
    }

    /// The schema whose sub-store owns `iri`
    pub fn schema_for_resource(&self, iri: &str) -> Option<String> {
        self.registry.schema_for_resource(iri)
    }
}

#[async_trait]
impl ResourceReader for FederatedStore {
    /// An IRI with no registered owner reads as absent
    async fn read_resource(&self, iri: &str) -> modelgraph_core::Result<Option<Resource>> {
        let Some(schema) = self.registry.schema_for_resource(iri) else {
            return Ok(None);
        };
        let Some(store) = self.registry.store_for_schema(&schema) else {
            return Ok(None);
        };
        store.read_resource(iri).await
    }

    async fn list_resources(&self) -> modelgraph_core::Result<Vec<String>> {
        let mut iris = Vec::new();
        for schema in self.registry.schemas() {
            if let Some(store) = self.registry.store_for_schema(&schema) {
                iris.extend(store.list_resources().await?);
            }
        }
        iris.sort();
        iris.dedup();
        Ok(iris)
    }
}
